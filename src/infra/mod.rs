//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Account repository
//! - Activation mail dispatch

pub mod db;
pub mod mailer;
pub mod repositories;

pub use db::{Database, Migrator};
pub use mailer::{ActivationNotifier, EmailNotifier};
pub use repositories::{AccountRepository, AccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use mailer::MockActivationNotifier;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAccountRepository;
