//! Error Reporter - uniform failure envelopes.
//!
//! Every core failure leaving the API boundary is recovered into the same
//! envelope: the requested path, the wall-clock time in milliseconds, a
//! localized summary message and, for validation failures only, the
//! per-field messages. No internal fault propagates to clients opaquely.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ValidationErrors;
use crate::errors::AppError;
use crate::i18n::{Locale, MessageKey};

/// Externally visible failure envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Path of the request that failed
    pub path: String,
    /// Envelope construction time, milliseconds since epoch
    pub timestamp: i64,
    /// Localized failure summary
    pub message: String,
    /// Per-field messages, present for validation failures only
    #[serde(rename = "validationErrors", skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<ValidationErrors>,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorEnvelope {
    /// HTTP status this envelope is served with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Translates internal failures into response envelopes for one request.
#[derive(Debug, Clone, Copy)]
pub struct ErrorReporter {
    locale: Locale,
}

impl ErrorReporter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build the envelope for a failure raised while serving `path`.
    pub fn report(&self, path: &str, err: AppError) -> ErrorEnvelope {
        let status = err.status();
        let (key, validation_errors) = match err {
            AppError::Validation(errors) => (MessageKey::ValidationFailure, Some(errors)),
            AppError::InvalidToken => (MessageKey::ActivationFailure, None),
            AppError::EmailDelivery => (MessageKey::EmailFailure, None),
            other => {
                tracing::error!(error = %other, "unrecovered failure at API boundary");
                (MessageKey::InternalFailure, None)
            }
        };

        ErrorEnvelope {
            path: path.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            message: self.locale.text(key).to_string(),
            validation_errors,
            status,
        }
    }
}
