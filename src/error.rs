//! Application error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::entities::ValidationError;
use crate::web::templates::ErrorTemplate;

/// Errors returned by the store and service layers.
///
/// Each kind maps to one HTTP status in [`IntoResponse`]; handlers branch on
/// [`AppError::Validation`] to re-render forms instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid post id: {id}")]
    InvalidId { id: String },

    #[error("post not found: {id}")]
    NotFound { id: String },

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("store error during {operation}: {message}")]
    Store {
        operation: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Wraps a persistence failure with the name of the failed operation.
    pub fn store(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Store {
            operation,
            message: err.to_string(),
        }
    }

    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId { .. } | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::InvalidId { .. } => "Invalid post ID".to_string(),
            AppError::NotFound { .. } => "Post not found".to_string(),
            AppError::BadRequest(message) => (*message).to_string(),
            AppError::Store { .. } => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Store { operation, message } => {
                tracing::error!(operation, error = %message, "Store operation failed");
            }
            other => {
                tracing::warn!(error = %other, status = status.as_u16(), "Request rejected");
            }
        }

        let page = ErrorTemplate {
            message: self.public_message(),
        };

        (status, page).into_response()
    }
}
