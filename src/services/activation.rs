//! Activation service - consumes tokens to activate pending accounts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Account;
use crate::errors::{AppError, AppResult};
use crate::infra::AccountRepository;

/// Activation service trait for dependency injection.
#[async_trait]
pub trait ActivationService: Send + Sync {
    /// Activate the pending account holding `token`.
    async fn activate(&self, token: &str) -> AppResult<Account>;
}

/// Concrete implementation of ActivationService.
pub struct Activator {
    accounts: Arc<dyn AccountRepository>,
}

impl Activator {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl ActivationService for Activator {
    async fn activate(&self, token: &str) -> AppResult<Account> {
        // A consumed token was cleared at activation time, so a replay
        // fails this lookup like any unknown token. Unknown tokens mutate
        // nothing.
        let pending = self
            .accounts
            .find_by_token(token)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let account = self.accounts.activate(pending.id).await?;

        tracing::info!(account_id = %account.id, "account activated");
        Ok(account)
    }
}
