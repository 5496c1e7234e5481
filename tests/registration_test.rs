//! Registration pipeline integration tests.
//!
//! Exercise the full validate → hash → tokenize → persist → notify saga
//! against the in-memory store, plus mockall doubles for the failure
//! orderings a fake store cannot produce (lost uniqueness race, failing
//! compensating delete).

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use common::{valid_form, InMemoryAccounts, RecordingNotifier};
use signup_api::domain::{Account, AccountStatus, NewAccount, SignUpRequest};
use signup_api::errors::{AppError, AppResult};
use signup_api::i18n::Locale;
use signup_api::infra::AccountRepository;
use signup_api::services::{Registrar, RegistrationService};

mockall::mock! {
    Accounts {}

    #[async_trait]
    impl AccountRepository for Accounts {
        async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
        async fn create(&self, account: NewAccount) -> AppResult<Account>;
        async fn find_by_token(&self, token: &str) -> AppResult<Option<Account>>;
        async fn activate(&self, id: Uuid) -> AppResult<Account>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

fn stored_account() -> Account {
    Account {
        id: Uuid::new_v4(),
        username: "user1".to_string(),
        email: "user1@mail.com".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        status: AccountStatus::Inactive,
        activation_token: Some("cafebabe".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_valid_sign_up_persists_inactive_account() {
    let accounts = Arc::new(InMemoryAccounts::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = Registrar::new(accounts.clone(), notifier);

    let result = service.register(valid_form(), Locale::En).await;
    assert!(result.is_ok());

    let rows = accounts.all();
    assert_eq!(rows.len(), 1);
    let saved = &rows[0];
    assert_eq!(saved.username, "user1");
    assert_eq!(saved.email, "user1@mail.com");
    assert_eq!(saved.status, AccountStatus::Inactive);
    assert!(saved.activation_token.is_some());
    assert_ne!(saved.password_hash, "P4ssword!");
}

#[tokio::test]
async fn test_activation_mail_carries_recipient_and_stored_token() {
    let accounts = Arc::new(InMemoryAccounts::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = Registrar::new(accounts.clone(), notifier.clone());

    service.register(valid_form(), Locale::En).await.unwrap();

    let saved = &accounts.all()[0];
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "user1@mail.com");
    assert_eq!(Some(sent[0].1.as_str()), saved.activation_token.as_deref());
}

#[tokio::test]
async fn test_submitted_status_like_fields_are_ignored() {
    // Clients may submit extra fields, including status-like ones; none
    // reach the stored row, which is always created inactive.
    let payload = serde_json::json!({
        "username": "user1",
        "email": "user1@mail.com",
        "password": "P4ssword!",
        "inactive": false,
        "role": "central line inserter"
    });
    let form: SignUpRequest = serde_json::from_value(payload).unwrap();

    let accounts = Arc::new(InMemoryAccounts::new());
    let service = Registrar::new(accounts.clone(), Arc::new(RecordingNotifier::new()));
    service.register(form, Locale::En).await.unwrap();

    assert_eq!(accounts.all()[0].status, AccountStatus::Inactive);
}

#[tokio::test]
async fn test_null_username_reports_only_that_field() {
    let accounts = Arc::new(InMemoryAccounts::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = Registrar::new(accounts.clone(), notifier.clone());

    let form = SignUpRequest {
        username: None,
        ..valid_form()
    };

    let err = service.register(form, Locale::En).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.username.as_deref(), Some("cannot be null"));
    assert!(errors.email.is_none());
    assert!(errors.password.is_none());

    // Rejected before any side effect
    assert!(accounts.is_empty());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_null_username_and_email_reported_together() {
    let service = Registrar::new(
        Arc::new(InMemoryAccounts::new()),
        Arc::new(RecordingNotifier::new()),
    );

    let form = SignUpRequest {
        username: None,
        email: None,
        ..valid_form()
    };

    let err = service.register(form, Locale::En).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.username.as_deref(), Some("cannot be null"));
    assert_eq!(errors.email.as_deref(), Some("cannot be null"));
    assert!(errors.password.is_none());

    // Exactly the two failed keys, username first
    let json = serde_json::to_string(&errors).unwrap();
    assert!(json.find("username").unwrap() < json.find("email").unwrap());
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn test_duplicate_email_rejected_without_second_row() {
    let accounts = Arc::new(InMemoryAccounts::new());
    let service = Registrar::new(accounts.clone(), Arc::new(RecordingNotifier::new()));

    service.register(valid_form(), Locale::En).await.unwrap();

    // Same email, otherwise valid submission
    let form = SignUpRequest {
        username: Some("user2".to_string()),
        ..valid_form()
    };
    let err = service.register(form, Locale::En).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.email.as_deref(), Some("in use"));
    assert_eq!(accounts.len(), 1);
}

#[tokio::test]
async fn test_lost_uniqueness_race_reported_as_in_use() {
    // Pre-check passes, but the write hits the unique constraint: the
    // client sees the same validation failure either way.
    let mut accounts = MockAccounts::new();
    accounts.expect_exists_by_email().returning(|_| Ok(false));
    accounts
        .expect_create()
        .returning(|_| Err(AppError::conflict("E-mail")));
    accounts.expect_delete().times(0);

    let service = Registrar::new(Arc::new(accounts), Arc::new(RecordingNotifier::new()));
    let err = service.register(valid_form(), Locale::En).await.unwrap_err();

    let AppError::Validation(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.email.as_deref(), Some("in use"));
}

#[tokio::test]
async fn test_notifier_failure_rolls_back_account() {
    let accounts = Arc::new(InMemoryAccounts::new());
    let service = Registrar::new(accounts.clone(), Arc::new(RecordingNotifier::failing()));

    let err = service.register(valid_form(), Locale::En).await.unwrap_err();

    assert!(matches!(err, AppError::EmailDelivery));
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_failed_compensating_delete_still_reports_email_failure() {
    let mut accounts = MockAccounts::new();
    accounts.expect_exists_by_email().returning(|_| Ok(false));
    accounts.expect_create().returning(|_| Ok(stored_account()));
    accounts
        .expect_delete()
        .times(1)
        .returning(|_| Err(AppError::internal("connection lost")));

    let service = Registrar::new(Arc::new(accounts), Arc::new(RecordingNotifier::failing()));
    let err = service.register(valid_form(), Locale::En).await.unwrap_err();

    assert!(matches!(err, AppError::EmailDelivery));
}

#[tokio::test]
async fn test_invalid_submission_touches_nothing() {
    let mut accounts = MockAccounts::new();
    // Broken email syntax: not even the advisory pre-check may run
    accounts.expect_exists_by_email().times(0);
    accounts.expect_create().times(0);

    let service = Registrar::new(Arc::new(accounts), Arc::new(RecordingNotifier::new()));
    let form = SignUpRequest {
        username: Some("usr".to_string()),
        email: Some("not-an-email".to_string()),
        password: Some("password".to_string()),
    };

    let err = service.register(form, Locale::En).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(
        errors.username.as_deref(),
        Some("must be at least 4 and at most 32 characters")
    );
    assert_eq!(errors.email.as_deref(), Some("is not valid"));
    assert_eq!(
        errors.password.as_deref(),
        Some("must include at least 1 lowercase, 1 uppercase, 1 number, and 1 symbol")
    );
}

#[tokio::test]
async fn test_locale_switches_validation_messages() {
    let service = Registrar::new(
        Arc::new(InMemoryAccounts::new()),
        Arc::new(RecordingNotifier::new()),
    );

    let form = SignUpRequest {
        username: None,
        ..valid_form()
    };

    let err = service.register(form, Locale::Es).await.unwrap_err();
    let AppError::Validation(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.username.as_deref(), Some("no puede ser nulo"));
}
