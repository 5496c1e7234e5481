//! Activation mail dispatch.
//!
//! The SMTP transport itself lives outside this service. What the
//! registration pipeline needs is the capability to send one activation
//! message and observe success or failure; with no SMTP host configured
//! the notifier renders the message into the log instead (development
//! mode) and reports it delivered.

use async_trait::async_trait;
use std::env;

use crate::config::{ACTIVATION_MAIL_SUBJECT, DEFAULT_MAIL_FROM, DEFAULT_SMTP_PORT};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Capability to deliver an activation message.
///
/// No retries happen at this level: a failed send is reported to the
/// caller. Retry policy belongs to the registration service, which
/// performs none and aborts the registration instead.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ActivationNotifier: Send + Sync {
    /// Send the activation message for `email` carrying `token`.
    async fn send_activation(&self, email: &str, token: &str) -> AppResult<()>;
}

/// Mail settings from environment.
struct MailConfig {
    smtp_host: Option<String>,
    smtp_port: u16,
    from: String,
}

impl MailConfig {
    fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from: env::var("SMTP_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
        }
    }

    fn is_configured(&self) -> bool {
        self.smtp_host.is_some()
    }
}

/// Notifier backed by the process mail settings.
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Render the message body; it must carry both the recipient address
    /// and the literal token value.
    fn render_body(email: &str, token: &str) -> String {
        format!(
            "Hello {email},\n\n\
             Your activation token is:\n\
             {token}\n"
        )
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivationNotifier for EmailNotifier {
    async fn send_activation(&self, email: &str, token: &str) -> AppResult<()> {
        let config = MailConfig::from_env();
        let body = Self::render_body(email, token);

        if !config.is_configured() {
            tracing::info!(
                to = %email,
                from = %config.from,
                subject = ACTIVATION_MAIL_SUBJECT,
                "SMTP not configured - logging activation mail instead of sending\n{}",
                body
            );
            return Ok(());
        }

        // A relay is configured but this build ships no SMTP transport;
        // the send cannot be honored and is reported failed.
        tracing::error!(
            to = %email,
            host = %config.smtp_host.unwrap_or_default(),
            port = config.smtp_port,
            "no SMTP transport available for configured relay"
        );
        Err(AppError::EmailDelivery)
    }
}
