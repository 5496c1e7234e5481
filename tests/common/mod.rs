//! Shared test doubles.
//!
//! Hand-written fakes for the persistence and notification seams: an
//! in-memory account store that honors the unique-email contract at write
//! time, and a notifier that records sends or fails on demand.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use signup_api::domain::{Account, AccountStatus, NewAccount, SignUpRequest};
use signup_api::errors::{AppError, AppResult};
use signup_api::infra::{AccountRepository, ActivationNotifier};

/// In-memory account store mirroring the repository contract, including
/// the unique-email constraint checked at write time.
#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored rows.
    pub fn all(&self) -> Vec<Account> {
        self.rows.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|a| a.email == email))
    }

    async fn create(&self, new: NewAccount) -> AppResult<Account> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.email == new.email) {
            return Err(AppError::conflict("E-mail"));
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            status: AccountStatus::Inactive,
            activation_token: Some(new.activation_token),
            created_at: now,
            updated_at: now,
        };
        rows.push(account.clone());
        Ok(account)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Account>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.activation_token.as_deref() == Some(token))
            .cloned())
    }

    async fn activate(&self, id: Uuid) -> AppResult<Account> {
        let mut rows = self.rows.lock().unwrap();
        let account = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::InvalidToken)?;

        account.status = AccountStatus::Active;
        account.activation_token = None;
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

/// Notifier double that records successful sends and fails on demand.
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A notifier whose every send is reported failed.
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Recorded `(email, token)` pairs.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivationNotifier for RecordingNotifier {
    async fn send_activation(&self, email: &str, token: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::EmailDelivery);
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), token.to_string()));
        Ok(())
    }
}

/// The canonical valid sign-up fixture.
pub fn valid_form() -> SignUpRequest {
    SignUpRequest {
        username: Some("user1".to_string()),
        email: Some("user1@mail.com".to_string()),
        password: Some("P4ssword!".to_string()),
    }
}
