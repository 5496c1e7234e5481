//! Activation token value object.

use uuid::Uuid;

/// Single-use token mailed to a new account's address.
///
/// Sourced from the operating system CSPRNG (uuid v4) and rendered as
/// 32 lowercase hex characters. Tokens carry no expiry; one stays valid
/// until it is consumed by activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationToken(String);

impl ActivationToken {
    /// Generate a fresh unguessable token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<ActivationToken> for String {
    fn from(token: ActivationToken) -> Self {
        token.0
    }
}

impl std::fmt::Display for ActivationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
