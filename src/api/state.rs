//! Application state - Dependency injection container.
//!
//! Provides the request-facing services to handlers. Both services are
//! held behind their traits so tests can inject doubles.

use std::sync::Arc;

use crate::infra::{AccountStore, Database, EmailNotifier};
use crate::services::{ActivationService, Activator, Registrar, RegistrationService};

/// Application state containing the request-facing services.
#[derive(Clone)]
pub struct AppState {
    /// Registration pipeline
    pub registration: Arc<dyn RegistrationService>,
    /// Token-based activation
    pub activation: Arc<dyn ActivationService>,
}

impl AppState {
    /// Wire the concrete services over a live database connection.
    pub fn from_database(database: &Database) -> Self {
        let accounts = Arc::new(AccountStore::new(database.get_connection()));
        let notifier = Arc::new(EmailNotifier::new());

        Self {
            registration: Arc::new(Registrar::new(accounts.clone(), notifier)),
            activation: Arc::new(Activator::new(accounts)),
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        activation: Arc<dyn ActivationService>,
    ) -> Self {
        Self {
            registration,
            activation,
        }
    }
}
