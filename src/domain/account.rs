//! Account domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{STATUS_ACTIVE, STATUS_INACTIVE};

/// Account lifecycle states.
///
/// Every account starts out `Inactive` and becomes `Active` exactly once,
/// when the matching activation token is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Inactive,
    Active,
}

impl AccountStatus {
    /// Check whether this status allows the account to sign in
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ACTIVE => AccountStatus::Active,
            _ => AccountStatus::Inactive,
        }
    }
}

impl From<String> for AccountStatus {
    fn from(s: String) -> Self {
        AccountStatus::from(s.as_str())
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Inactive => write!(f, "{}", STATUS_INACTIVE),
            AccountStatus::Active => write!(f, "{}", STATUS_ACTIVE),
        }
    }
}

/// Account domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub status: AccountStatus,
    /// Present only while the account awaits activation; cleared forever
    /// once the token has been consumed.
    #[serde(skip_serializing)]
    pub activation_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if the account has been activated
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Check if the account still awaits its activation token
    pub fn is_pending(&self) -> bool {
        matches!(self.status, AccountStatus::Inactive)
    }
}

/// Sign-up submission as received from the client.
///
/// Every field is optional so that null or absent values reach the
/// validator, which owns the error message, instead of being rejected at
/// deserialization. Unknown fields, including any status-like ones a
/// client might submit, are dropped by serde.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SignUpRequest {
    /// Desired username (4-32 characters)
    #[schema(example = "user1")]
    pub username: Option<String>,
    /// Account email address, globally unique
    #[schema(example = "user1@mail.com")]
    pub email: Option<String>,
    /// Password (8-50 characters, mixed character classes)
    #[schema(example = "P4ssword!")]
    pub password: Option<String>,
}

/// Data for a freshly registered account row.
///
/// Status and token are decided by the registration pipeline, never taken
/// from client input: the store writes every new row as `Inactive` with the
/// generated token attached.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub activation_token: String,
}
