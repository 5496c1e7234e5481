//! Sign-up field validation.
//!
//! Pure per-field rules (null, size, pattern) map each raw value to the
//! first applicable failure key; a thin wrapper resolves keys through the
//! locale catalog and performs the single asynchronous uniqueness
//! pre-check against the account store. Fields are evaluated
//! independently, so a submission reports every failing field at once.

use std::sync::Arc;

use crate::domain::{SignUpRequest, ValidationErrors};
use crate::errors::AppResult;
use crate::i18n::{Locale, MessageKey};
use crate::infra::AccountRepository;

/// Validates sign-up submissions against field rules and the store.
pub struct SignUpValidator {
    accounts: Arc<dyn AccountRepository>,
}

impl SignUpValidator {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Validate one submission for the requested locale.
    ///
    /// The store is consulted exactly once per submission, and only after
    /// email syntax passed. The check is advisory; the unique constraint
    /// at write time remains authoritative.
    pub async fn validate(
        &self,
        form: &SignUpRequest,
        locale: Locale,
    ) -> AppResult<ValidationErrors> {
        let username =
            rules::username(form.username.as_deref()).map(|key| locale.text(key).to_string());

        let email = match rules::email_syntax(form.email.as_deref()) {
            Some(key) => Some(locale.text(key).to_string()),
            None => {
                let email = form.email.as_deref().unwrap_or_default();
                if self.accounts.exists_by_email(email).await? {
                    Some(locale.text(MessageKey::EmailInUse).to_string())
                } else {
                    None
                }
            }
        };

        let password =
            rules::password(form.password.as_deref()).map(|key| locale.text(key).to_string());

        Ok(ValidationErrors {
            username,
            email,
            password,
        })
    }
}

/// Pure per-field rules. Within a field the checks are mutually
/// exclusive: a null value yields only the null key, an out-of-range
/// length only the size key, and so on.
mod rules {
    use validator::ValidateEmail;

    use crate::config::{
        MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
    };
    use crate::i18n::MessageKey;

    pub fn username(value: Option<&str>) -> Option<MessageKey> {
        let Some(value) = value else {
            return Some(MessageKey::UsernameNull);
        };

        let len = value.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
            return Some(MessageKey::UsernameSize);
        }

        None
    }

    pub fn email_syntax(value: Option<&str>) -> Option<MessageKey> {
        let Some(value) = value else {
            return Some(MessageKey::EmailNull);
        };

        if !value.validate_email() {
            return Some(MessageKey::EmailInvalid);
        }

        None
    }

    pub fn password(value: Option<&str>) -> Option<MessageKey> {
        let Some(value) = value else {
            return Some(MessageKey::PasswordNull);
        };

        let len = value.chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
            return Some(MessageKey::PasswordSize);
        }

        let has_lower = value.chars().any(|c| c.is_lowercase());
        let has_upper = value.chars().any(|c| c.is_uppercase());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_symbol = value.chars().any(|c| !c.is_alphanumeric());
        if !(has_lower && has_upper && has_digit && has_symbol) {
            return Some(MessageKey::PasswordPattern);
        }

        None
    }
}
