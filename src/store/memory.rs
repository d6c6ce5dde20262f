use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::Message;
use crate::store::{
    error::{Result, StoreError},
    MessageStore,
};

/// In-process message store
///
/// Ids start at 1 and are never reused, matching a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, String>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn list(&self) -> Result<Vec<Message>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .map(|(id, body)| Message::new(*id, body.clone()))
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Message> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .map(|body| Message::new(id, body.clone()))
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, body: String) -> Result<Message> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, body.clone());
        Ok(Message::new(id, body))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
