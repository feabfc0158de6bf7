//! Error types for the guestbook service.
//!
//! A missing signature is not an error: store lookups return `Option` and
//! the routes turn `None` into a 404. Everything here is a failure of the
//! storage layer or the runtime and maps to a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuestbookError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl GuestbookError {
    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Storage(_) => Some("STORAGE_ERROR"),
            Self::Serialization(_) => Some("SERIALIZATION_ERROR"),
            Self::Deserialization(_) => Some("DESERIALIZATION_ERROR"),
            Self::Internal(_) => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for GuestbookError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<std::io::Error> for GuestbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GuestbookError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for GuestbookError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("Blocking task failed: {err}"))
    }
}

impl From<redb::Error> for GuestbookError {
    fn from(err: redb::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<redb::DatabaseError> for GuestbookError {
    fn from(err: redb::DatabaseError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<redb::TableError> for GuestbookError {
    fn from(err: redb::TableError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<redb::TransactionError> for GuestbookError {
    fn from(err: redb::TransactionError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<redb::CommitError> for GuestbookError {
    fn from(err: redb::CommitError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<redb::StorageError> for GuestbookError {
    fn from(err: redb::StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type GuestbookResult<T> = Result<T, GuestbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_is_internal_server_error() {
        let err = GuestbookError::Storage("disk full".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), Some("STORAGE_ERROR"));
    }

    #[test]
    fn test_internal_error_hides_code() {
        assert_eq!(GuestbookError::Internal("boom".to_string()).error_code(), None);
    }

    #[test]
    fn test_json_syntax_error_maps_to_deserialization() {
        let err = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        assert!(matches!(
            GuestbookError::from(err),
            GuestbookError::Deserialization(_)
        ));
    }

    #[test]
    fn test_into_response_uses_500() {
        let response = GuestbookError::Storage("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
