//! API error handling
//!
//! Use-case failures map to statuses by [`ErrorKind`]. Store and
//! configuration failures are logged in full and answered with a generic
//! message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, info};

use application::{UseCaseError, GENERIC_FAILURE};
use core_kernel::ErrorKind;

use crate::dto::ApiResponse;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be decoded or failed validation
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Legal rule violation: {0}")]
    UnprocessableEntity(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Request timed out")]
    Timeout,

    /// Details were logged; the message is safe to return
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::UnprocessableEntity(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::Timeout => "the request timed out".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.message());
        (self.status(), Json(body)).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        if !err.is_user_facing() {
            error!(
                stage = %err.stage(),
                kind = %err.kind(),
                error = ?err,
                "Registration failed"
            );
            return ApiError::Internal(GENERIC_FAILURE.to_string());
        }

        info!(stage = %err.stage(), kind = %err.kind(), error = %err, "Registration rejected");
        let message = err.public_message();
        match err.kind() {
            ErrorKind::LegalRuleViolation => ApiError::UnprocessableEntity(message),
            ErrorKind::AlreadyExists => ApiError::Conflict(message),
            _ => ApiError::BadRequest(message),
        }
    }
}
