//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. HTTP response
//! shaping lives in `api::reporter`, which needs the request path and
//! locale that this type deliberately does not carry.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::ValidationErrors;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more sign-up fields were rejected; the messages inside are
    /// already localized for the requesting client.
    #[error("Validation failure")]
    Validation(ValidationErrors),

    /// Unique-constraint violation observed at write time (the race the
    /// advisory pre-check cannot close).
    #[error("{0} already exists")]
    Conflict(String),

    /// The activation email could not be dispatched.
    #[error("Email failure")]
    EmailDelivery,

    /// No pending account matches the presented activation token.
    #[error("Activation token is not valid")]
    InvalidToken,

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this failure kind
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidToken => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::EmailDelivery => StatusCode::BAD_GATEWAY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
