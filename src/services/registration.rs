//! Registration service - the create-then-notify pipeline.
//!
//! A registration is a small saga: validate, hash, tokenize, persist,
//! notify. No transaction can span the external mail call, so a failed
//! send is compensated by deleting the row that was just written.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    Account, ActivationToken, NewAccount, Password, SignUpRequest, ValidationErrors,
};
use crate::errors::{AppError, AppResult};
use crate::i18n::{Locale, MessageKey};
use crate::infra::{AccountRepository, ActivationNotifier};

use super::validator::SignUpValidator;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Run the full registration pipeline for one submission.
    async fn register(&self, form: SignUpRequest, locale: Locale) -> AppResult<Account>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    accounts: Arc<dyn AccountRepository>,
    notifier: Arc<dyn ActivationNotifier>,
    validator: SignUpValidator,
}

impl Registrar {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        notifier: Arc<dyn ActivationNotifier>,
    ) -> Self {
        let validator = SignUpValidator::new(accounts.clone());
        Self {
            accounts,
            notifier,
            validator,
        }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, form: SignUpRequest, locale: Locale) -> AppResult<Account> {
        // Field rules plus the advisory uniqueness check. Nothing is
        // hashed, generated or persisted while any field is invalid.
        let errors = self.validator.validate(&form, locale).await?;
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        // Validation guarantees presence of all three fields.
        let username = form.username.unwrap_or_default();
        let email = form.email.unwrap_or_default();
        let password = form.password.unwrap_or_default();

        // The plaintext stops here.
        let password_hash = Password::new(&password)?.into_string();
        let token = ActivationToken::generate();

        // Write the inactive row. A lost uniqueness race surfaces to the
        // client exactly as the pre-check would have.
        let account = match self
            .accounts
            .create(NewAccount {
                username,
                email: email.clone(),
                password_hash,
                activation_token: token.as_str().to_string(),
            })
            .await
        {
            Ok(account) => account,
            Err(AppError::Conflict(_)) => {
                let errors = ValidationErrors {
                    email: Some(locale.text(MessageKey::EmailInUse).to_string()),
                    ..Default::default()
                };
                return Err(AppError::Validation(errors));
            }
            Err(e) => return Err(e),
        };

        // Dispatch the activation mail; on failure undo the write so no
        // unreachable inactive account is left behind.
        if let Err(send_err) = self.notifier.send_activation(&email, token.as_str()).await {
            tracing::warn!(
                account_id = %account.id,
                error = %send_err,
                "activation mail failed, rolling back account"
            );
            if let Err(delete_err) = self.accounts.delete(account.id).await {
                // Best effort only; the orphaned row is accepted and the
                // caller still sees the email failure.
                tracing::error!(
                    account_id = %account.id,
                    error = %delete_err,
                    "compensating delete failed"
                );
            }
            return Err(AppError::EmailDelivery);
        }

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "account registered, awaiting activation"
        );
        Ok(account)
    }
}
