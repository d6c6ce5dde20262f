//! Errors surfaced to HTTP clients

use percent_encoding::percent_decode_str;
use thiserror::Error;
use warp::Reply;
use warp::http::StatusCode;

use crate::store::StoreError;

/// Failure of a single request, rendered as a plain-text response
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed id, malformed JSON or oversized body
    #[error("{0}")]
    Validation(String),

    /// No message with the requested id
    #[error("Could not find record with id {0}")]
    NotFound(i64),

    /// Any other store failure, prefixed with what the handler was doing
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: StoreError,
    },

    /// Response serialization failed
    #[error("Encountered an error encoding JSON response: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl ApiError {
    /// Translate a store error, keeping "not found" distinct from failures
    pub fn from_store(err: StoreError, context: impl Into<String>) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            source => ApiError::Store {
                context: context.into(),
                source,
            },
        }
    }

    pub fn invalid_id() -> Self {
        ApiError::Validation("id must be an integer".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } | ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Reply for ApiError {
    fn into_response(self) -> warp::reply::Response {
        let status = self.status();
        // String replies carry `text/plain; charset=utf-8`
        warp::reply::with_status(self.to_string(), status).into_response()
    }
}

/// Parse a percent-encoded `{id}` path segment
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ApiError::invalid_id())?;
    decoded.parse::<i64>().map_err(|_| ApiError::invalid_id())
}
