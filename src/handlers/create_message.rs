// POST /messages handler

use bytes::Buf;
use futures_util::Stream;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;

use super::error::ApiError;
use super::reply::{finish, json_reply, read_limited};
use super::MAX_BODY_BYTES;
use crate::models::CreateMessageRequest;
use crate::store::{MessageStore, SharedStore};

pub async fn create_message_handler<S, B>(store: SharedStore, body: S) -> Result<Response, Infallible>
where
    S: Stream<Item = Result<B, warp::Error>> + Send,
    B: Buf + Send,
{
    tracing::debug!("POST /messages");
    finish("POST /messages", create_message(store.as_ref(), body).await)
}

async fn create_message<S, B>(store: &dyn MessageStore, body: S) -> Result<Response, ApiError>
where
    S: Stream<Item = Result<B, warp::Error>> + Send,
    B: Buf + Send,
{
    let bytes = read_limited(body, MAX_BODY_BYTES).await?;

    let request = CreateMessageRequest::from_slice(&bytes)
        .map_err(|e| ApiError::Validation(format!("Could not parse JSON: {}", e)))?;

    let message = store
        .insert(request.body)
        .await
        .map_err(|e| ApiError::from_store(e, "Could not insert message in the database"))?;

    tracing::info!(id = message.id, "message created");
    json_reply(&message, StatusCode::CREATED)
}
