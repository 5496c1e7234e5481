//! Account registration and activation handlers.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::reporter::{ErrorEnvelope, ErrorReporter};
use crate::api::AppState;
use crate::domain::SignUpRequest;
use crate::i18n::{Locale, MessageKey};

/// Localized outcome summary for successful requests
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    /// Outcome summary in the requested locale
    #[schema(example = "User created")]
    pub message: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/api/1.0/users", post(register))
        .route("/api/1.0/users/token/:token", post(activate))
}

/// Register a new account and dispatch its activation mail
#[utoipa::path(
    post,
    path = "/api/1.0/users",
    tag = "Accounts",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account registered, activation mail dispatched", body = MessageBody),
        (status = 400, description = "One or more fields rejected", body = ErrorEnvelope),
        (status = 502, description = "Activation mail could not be dispatched", body = ErrorEnvelope)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    locale: Locale,
    Json(payload): Json<SignUpRequest>,
) -> Response {
    match state.registration.register(payload, locale).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageBody {
                message: locale.text(MessageKey::UserCreated).to_string(),
            }),
        )
            .into_response(),
        Err(err) => ErrorReporter::new(locale)
            .report(uri.path(), err)
            .into_response(),
    }
}

/// Activate a pending account with its mailed token
#[utoipa::path(
    post,
    path = "/api/1.0/users/token/{token}",
    tag = "Accounts",
    params(
        ("token" = String, Path, description = "Activation token from the sign-up mail")
    ),
    responses(
        (status = 200, description = "Account activated", body = MessageBody),
        (status = 400, description = "Token unknown or already consumed", body = ErrorEnvelope)
    )
)]
pub async fn activate(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    locale: Locale,
    Path(token): Path<String>,
) -> Response {
    match state.activation.activate(&token).await {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageBody {
                message: locale.text(MessageKey::AccountActivated).to_string(),
            }),
        )
            .into_response(),
        Err(err) => ErrorReporter::new(locale)
            .report(uri.path(), err)
            .into_response(),
    }
}
