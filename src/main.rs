use std::process;
use std::sync::Arc;

use palindrome_messages::config::{AppConfig, StoreBackend};
use palindrome_messages::routes::configure_routes;
use palindrome_messages::store::{InMemoryMessageStore, PostgresMessageStore, SharedStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            process::exit(1);
        }
    };

    let store: SharedStore = match config.backend {
        StoreBackend::Postgres(store_config) => {
            let store = match PostgresMessageStore::connect(store_config).await {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!(error = %e, "could not connect to database");
                    process::exit(1);
                }
            };
            if let Err(e) = store.ensure_schema().await {
                tracing::error!(error = %e, "could not create messages table");
                process::exit(1);
            }
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory message store; data is lost on exit");
            Arc::new(InMemoryMessageStore::new())
        }
    };

    let routes = configure_routes(store);

    tracing::info!(addr = %config.bind_addr, "starting server");
    warp::serve(routes).run(config.bind_addr).await;
}
