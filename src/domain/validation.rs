//! Field-level validation outcomes for sign-up submissions.

use serde::Serialize;
use utoipa::ToSchema;

/// Per-field validation messages, already localized for the requesting
/// client.
///
/// One entry per failed field; fields that passed stay `None` and are
/// omitted from the serialized map. Struct field order fixes the JSON key
/// order clients observe: username, email, password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ValidationErrors {
    /// True when every field passed its rules.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}
