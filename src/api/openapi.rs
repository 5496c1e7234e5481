//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::account_handler;
use crate::api::reporter::ErrorEnvelope;
use crate::domain::{SignUpRequest, ValidationErrors};

/// OpenAPI documentation for the Signup API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup API",
        version = "0.1.0",
        description = "User sign-up and account activation with localized error reporting",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        account_handler::register,
        account_handler::activate,
    ),
    components(
        schemas(
            SignUpRequest,
            ValidationErrors,
            ErrorEnvelope,
            account_handler::MessageBody,
        )
    ),
    tags(
        (name = "Accounts", description = "Registration and activation")
    )
)]
pub struct ApiDoc;
