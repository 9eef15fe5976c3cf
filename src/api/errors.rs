use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::RepositoryError;
use crate::services::{TeamCreationError, TeamQueryError};

/// API error type with HTTP status code, kind tag and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, kind, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NotFound", message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, kind, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(kind: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, kind, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "kind": self.kind,
        }));

        (self.status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("InvalidRequest", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request("InvalidRequest", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("InvalidRequest", rejection.body_text())
    }
}

impl From<TeamCreationError> for ApiError {
    fn from(err: TeamCreationError) -> Self {
        let kind = err.kind();
        match err {
            TeamCreationError::DuplicateName(_) => Self::conflict(kind, err.to_string()),
            TeamCreationError::StorageFailure(_) => {
                Self::internal_server_error(kind, err.to_string())
            }
            TeamCreationError::Validation(_) | TeamCreationError::InvalidCaptain(_) => {
                Self::bad_request(kind, err.to_string())
            }
        }
    }
}

impl From<TeamQueryError> for ApiError {
    fn from(err: TeamQueryError) -> Self {
        match err {
            TeamQueryError::NotFound(_) => Self::not_found(err.to_string()),
            TeamQueryError::StorageFailure(_) => {
                Self::internal_server_error("StorageFailure", err.to_string())
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::internal_server_error("StorageFailure", format!("Database error: {}", err))
    }
}
