// Response helpers shared by the handlers

use bytes::Buf;
use futures_util::{pin_mut, Stream, StreamExt};
use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use super::error::ApiError;

pub const JSON_CONTENT: &str = "application/json; charset=utf-8";

/// Serialize `value` into a JSON response with the given status
pub fn json_reply<T: Serialize + ?Sized>(value: &T, status: StatusCode) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(ApiError::Encoding)?;
    let reply = warp::reply::with_header(body, "content-type", JSON_CONTENT);
    Ok(warp::reply::with_status(reply, status).into_response())
}

/// 200 with an empty body
pub fn empty_ok() -> Response {
    warp::reply::with_status(warp::reply(), StatusCode::OK).into_response()
}

/// Log the outcome of a handler and turn errors into responses
pub fn finish(route: &str, result: Result<Response, ApiError>) -> Result<Response, Infallible> {
    match result {
        Ok(response) => {
            tracing::debug!(route, status = response.status().as_u16(), "request handled");
            Ok(response)
        }
        Err(err) => {
            match &err {
                ApiError::Store { .. } | ApiError::Encoding(_) => {
                    tracing::error!(route, error = %err, "request failed")
                }
                ApiError::NotFound(_) => tracing::warn!(route, error = %err, "record not found"),
                ApiError::Validation(_) => tracing::debug!(route, error = %err, "rejected request"),
            }
            Ok(err.into_response())
        }
    }
}

/// Collect a request body, failing once more than `limit` bytes arrive
pub async fn read_limited<S, B>(body: S, limit: usize) -> Result<Vec<u8>, ApiError>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf + Send,
{
    pin_mut!(body);

    let mut bytes = Vec::new();
    while let Some(chunk) = body.next().await {
        let mut chunk = chunk
            .map_err(|e| ApiError::Validation(format!("Could not read request body: {}", e)))?;

        if bytes.len() + chunk.remaining() > limit {
            return Err(ApiError::Validation(format!(
                "request body exceeds {} bytes",
                limit
            )));
        }

        while chunk.has_remaining() {
            let part = chunk.chunk();
            let len = part.len();
            bytes.extend_from_slice(part);
            chunk.advance(len);
        }
    }

    Ok(bytes)
}
