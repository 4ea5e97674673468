//! API error responses
//!
//! Every failure maps to a fixed, generic message. Internal detail stays in
//! the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feedback_core::{ErrorBody, FeedbackError, RepositoryError};
use thiserror::Error;

/// Errors returned by the feedback endpoint
#[derive(Error, Debug)]
pub enum ApiError {
    /// Presence check failed
    #[error("Missing required fields")]
    MissingRequiredFields,

    /// Body is not JSON or a field has the wrong type
    #[error("Invalid request body")]
    InvalidBody,

    /// The store's schema rejected the document
    #[error("Invalid field values")]
    InvalidFieldValues,

    /// Storage failure; the detail is logged, not returned
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingRequiredFields | Self::InvalidBody | Self::InvalidFieldValues => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FeedbackError> for ApiError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::MissingRequiredFields => Self::MissingRequiredFields,
            FeedbackError::ConstraintViolation(_) => Self::InvalidFieldValues,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Constraint(_) => Self::InvalidFieldValues,
            RepositoryError::Storage(detail) | RepositoryError::Serialization(detail) => {
                Self::Internal(detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
