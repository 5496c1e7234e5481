//! Repository layer - data access behind trait seams.

pub mod account_repository;
pub mod entities;

pub use account_repository::{AccountRepository, AccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
