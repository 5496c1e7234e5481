//! Locale-keyed message catalog.
//!
//! Every client-visible string is looked up by `MessageKey` through an
//! exhaustive match over `(Locale, MessageKey)`. Adding a key without
//! translating it for every locale is a compile error, so no request can
//! ever fall back to an untranslated key at runtime.

/// Supported response languages.
///
/// Resolved from the `Accept-Language` request header; anything the
/// catalog does not carry falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Resolve an `Accept-Language` header value.
    ///
    /// Only the primary subtag of the first language range matters here;
    /// quality weights are ignored.
    pub fn from_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Locale::En;
        };

        let primary = value
            .split(',')
            .next()
            .unwrap_or("")
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .split('-')
            .next()
            .unwrap_or("");

        match primary.to_ascii_lowercase().as_str() {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    /// Look up the localized text for a message key.
    pub fn text(self, key: MessageKey) -> &'static str {
        message(self, key)
    }
}

/// Enumerated keys for every client-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    // Field validation
    UsernameNull,
    UsernameSize,
    EmailNull,
    EmailInvalid,
    EmailInUse,
    PasswordNull,
    PasswordSize,
    PasswordPattern,
    // Outcome summaries
    UserCreated,
    ValidationFailure,
    EmailFailure,
    AccountActivated,
    ActivationFailure,
    InternalFailure,
}

/// Catalog lookup. One arm per locale, one line per key.
pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    use MessageKey::*;

    match locale {
        Locale::En => match key {
            UsernameNull => "cannot be null",
            UsernameSize => "must be at least 4 and at most 32 characters",
            EmailNull => "cannot be null",
            EmailInvalid => "is not valid",
            EmailInUse => "in use",
            PasswordNull => "cannot be null",
            PasswordSize => "must be at least 8 and at most 50 characters",
            PasswordPattern => {
                "must include at least 1 lowercase, 1 uppercase, 1 number, and 1 symbol"
            }
            UserCreated => "User created",
            ValidationFailure => "Validation failure",
            EmailFailure => "Email failure",
            AccountActivated => "Account activated",
            ActivationFailure => "Activation token is not valid",
            InternalFailure => "Internal server error",
        },
        Locale::Es => match key {
            UsernameNull => "no puede ser nulo",
            UsernameSize => "debe tener al menos 4 y como máximo 32 caracteres",
            EmailNull => "no puede ser nulo",
            EmailInvalid => "no es válido",
            EmailInUse => "en uso",
            PasswordNull => "no puede ser nulo",
            PasswordSize => "debe tener al menos 8 y como máximo 50 caracteres",
            PasswordPattern => {
                "debe incluir al menos 1 minúscula, 1 mayúscula, 1 número y 1 símbolo"
            }
            UserCreated => "Usuario creado",
            ValidationFailure => "Fallo de validación",
            EmailFailure => "Fallo de correo",
            AccountActivated => "Cuenta activada",
            ActivationFailure => "El token de activación no es válido",
            InternalFailure => "Error interno del servidor",
        },
    }
}
