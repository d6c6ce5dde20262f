// GET /messages handler

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;

use super::error::ApiError;
use super::reply::{finish, json_reply};
use crate::store::{MessageStore, SharedStore};

/// Lists every stored message.
///
/// `isPalindrome` is left at its default here; only the single-message
/// endpoint derives it.
pub async fn list_messages_handler(store: SharedStore) -> Result<Response, Infallible> {
    tracing::debug!("GET /messages");
    finish("GET /messages", list_messages(store.as_ref()).await)
}

async fn list_messages(store: &dyn MessageStore) -> Result<Response, ApiError> {
    let messages = store.list().await.map_err(|e| {
        ApiError::from_store(e, "Encountered an error getting messages from database")
    })?;

    json_reply(&messages, StatusCode::OK)
}
