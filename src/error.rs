use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::{json_response, Envelope};
use crate::store::StoreError;

/// Application error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Create request body that does not decode as a user payload
    #[error("invalid request body")]
    UnprocessableBody,

    /// Update request body that does not decode as a user payload
    #[error("invalid request body")]
    MalformedBody,

    /// Path parameter that does not parse as a user id
    #[error("invalid user id")]
    InvalidUserId,

    /// Field content outside the allowed bounds
    #[error("{0}")]
    Validation(String),

    #[error("user not found")]
    NotFound,

    #[error("internal server error")]
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Unavailable => {
                tracing::error!("User store unavailable");
                ApiError::Internal
            }
        }
    }
}

/// Implement IntoResponse to convert ApiError into HTTP responses
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnprocessableBody => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody | ApiError::InvalidUserId | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        json_response(status, &Envelope::error(self.to_string()))
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, ApiError>;
