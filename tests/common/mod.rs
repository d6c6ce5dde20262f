use palindrome_messages::store::{PostgresMessageStore, StoreConfig};
use std::time::Duration;
use testcontainers::{core::WaitFor, GenericImage, RunnableImage};

/// The PostgreSQL Docker image to use for testing
pub const POSTGRES_IMAGE: &str = "postgres";
pub const POSTGRES_TAG: &str = "16-alpine";

/// Default PostgreSQL port
pub const POSTGRES_PORT: u16 = 5432;

/// Credentials for the test container
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_PASSWORD: &str = "messages_password";
pub const POSTGRES_DB: &str = "messages";

/// Create a runnable PostgreSQL container with the messages database
pub fn create_postgres_container() -> RunnableImage<GenericImage> {
    let image = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
        .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
        .with_env_var("POSTGRES_DB", POSTGRES_DB)
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ));

    RunnableImage::from(image).with_tag(POSTGRES_TAG)
}

/// Build a connection string for the running container
pub fn build_connection_string(host: &str, port: u16) -> String {
    format!(
        "postgresql://{}:{}@{}:{}/{}",
        POSTGRES_USER, POSTGRES_PASSWORD, host, port, POSTGRES_DB
    )
}

/// Connect to the container, retrying while the init-time server restarts
///
/// The image logs its ready message once for the init server and again for
/// the real one, so the first match can come before TCP connections work.
pub async fn connect_with_retry(connection_string: &str) -> PostgresMessageStore {
    const ATTEMPTS: u32 = 30;

    let config = StoreConfig::from_connection_string(connection_string).unwrap();
    let mut delay = Duration::from_millis(100);

    for attempt in 1..=ATTEMPTS {
        match PostgresMessageStore::connect(config.clone()).await {
            Ok(store) => return store,
            Err(e) if attempt < ATTEMPTS => {
                eprintln!("connect attempt {} failed: {}", attempt, e);
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(Duration::from_secs(1));
            }
            Err(e) => panic!("could not connect to test database: {}", e),
        }
    }

    unreachable!("retry loop always returns or panics")
}
