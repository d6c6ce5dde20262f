// GET /messages/{id} handler

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;

use super::error::{parse_id, ApiError};
use super::reply::{finish, json_reply};
use crate::store::{MessageStore, SharedStore};

/// Fetches one message and derives `isPalindrome` from its body.
pub async fn get_message_handler(raw_id: String, store: SharedStore) -> Result<Response, Infallible> {
    tracing::debug!("GET /messages/{}", raw_id);
    finish("GET /messages/{id}", get_message(store.as_ref(), &raw_id).await)
}

async fn get_message(store: &dyn MessageStore, raw_id: &str) -> Result<Response, ApiError> {
    let id = parse_id(raw_id)?;

    let message = store.get(id).await.map_err(|e| {
        ApiError::from_store(e, format!("Could not get message with id {}", id))
    })?;

    json_reply(&message.with_palindrome_flag(), StatusCode::OK)
}
