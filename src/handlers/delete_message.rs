// DELETE /messages/{id} handler

use std::convert::Infallible;
use warp::reply::Response;

use super::error::{parse_id, ApiError};
use super::reply::{empty_ok, finish};
use crate::store::{MessageStore, SharedStore};

pub async fn delete_message_handler(raw_id: String, store: SharedStore) -> Result<Response, Infallible> {
    tracing::debug!("DELETE /messages/{}", raw_id);
    finish("DELETE /messages/{id}", delete_message(store.as_ref(), &raw_id).await)
}

async fn delete_message(store: &dyn MessageStore, raw_id: &str) -> Result<Response, ApiError> {
    let id = parse_id(raw_id)?;

    store.delete(id).await.map_err(|e| {
        ApiError::from_store(e, format!("Could not delete message with id {}", id))
    })?;

    tracing::info!(id, "message deleted");
    Ok(empty_ok())
}
