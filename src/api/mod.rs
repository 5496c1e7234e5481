//! API layer - HTTP handlers and routing glue
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - The locale extractor
//! - Failure envelope reporting
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod reporter;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use reporter::{ErrorEnvelope, ErrorReporter};
pub use routes::create_router;
pub use state::AppState;
