use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::Message;
use crate::store::{
    connection::StoreConfig,
    error::{Result, StoreError},
    MessageStore,
};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS messages (
    id BIGSERIAL PRIMARY KEY,
    body TEXT NOT NULL
)";

/// PostgreSQL-backed message store
#[derive(Clone)]
pub struct PostgresMessageStore {
    pool: Pool,
}

impl PostgresMessageStore {
    /// Build the pool and verify that one connection can be opened
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        let pool = config.build_pool()?;

        // Test the connection
        let _conn = pool.get().await.map_err(|e| {
            StoreError::Connection(format!(
                "Unable to connect to {} on {}:{}: {}",
                config.database, config.host, config.port, e
            ))
        })?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            pool_size = config.max_pool_size,
            "connected to message store"
        );

        Ok(Self { pool })
    }

    /// Create the `messages` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = self.pool.get().await?;
        conn.batch_execute(CREATE_TABLE_SQL).await?;
        Ok(())
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let conn = self.pool.get().await?;
        let rows = conn
            .query("SELECT id, body FROM messages ORDER BY id", &[])
            .await?;

        rows.iter().map(row_to_message).collect()
    }

    async fn get(&self, id: i64) -> Result<Message> {
        let conn = self.pool.get().await?;
        let row = conn
            .query_opt("SELECT id, body FROM messages WHERE id = $1", &[&id])
            .await?;

        match row {
            Some(row) => row_to_message(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn insert(&self, body: String) -> Result<Message> {
        let conn = self.pool.get().await?;
        let row = conn
            .query_one(
                "INSERT INTO messages (body) VALUES ($1) RETURNING id, body",
                &[&body],
            )
            .await?;

        row_to_message(&row)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let conn = self.pool.get().await?;
        let affected = conn
            .execute("DELETE FROM messages WHERE id = $1", &[&id])
            .await?;

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn row_to_message(row: &Row) -> Result<Message> {
    let id: i64 = row.try_get("id")?;
    let body: String = row.try_get("body")?;
    Ok(Message::new(id, body))
}
