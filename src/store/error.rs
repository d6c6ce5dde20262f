use thiserror::Error;

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for message store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No message has the requested id
    #[error("message {0} not found")]
    NotFound(i64),

    /// Database error - SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(String),

    /// Pool error - connection pool issues
    #[error("Pool error: {0}")]
    Pool(String),

    /// Connection error - database unreachable or authentication failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid store configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        // Non-database errors (closed connection, I/O) keep their full text
        StoreError::Database(err.to_string())
    }
}

/// Convert deadpool errors to store errors
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Pool(err.to_string())
    }
}

/// Convert deadpool build errors to store errors
impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}
