//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, ApiError>`. Status mapping lives in
//! `status_code`; the body is the error message as plain text. Store
//! messages are passed through unchanged.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use todo_core::{InvalidId, StoreError};
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Path id is not a well-formed store identifier.
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// Request body could not be decoded into the record shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("todo not found")]
    NotFound,

    /// Any failure talking to the store.
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => ApiError::Store(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::from(InvalidId("x".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MalformedBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_map_by_kind() {
        assert!(matches!(ApiError::from(StoreError::NotFound), ApiError::NotFound));

        let err = ApiError::from(StoreError::Backend("write conflict".to_string()));
        assert!(matches!(&err, ApiError::Store(msg) if msg == "write conflict"));

        let err = ApiError::from(StoreError::Timeout(Duration::from_secs(2)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_id_message_is_passed_through() {
        let err = ApiError::from(InvalidId("abc".to_string()));
        assert_eq!(err.to_string(), r#"invalid todo id: "abc""#);
    }
}
