//! Email Notifier
//!
//! Outbound mail goes through a webhook relay; the trait seam keeps the
//! OTP flow testable without a network.

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

/// A rendered email ready for dispatch
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// OTP delivery mail
    pub fn otp(to: &str, code: &str, ttl_minutes: i64) -> Self {
        Self {
            to: to.to_string(),
            subject: "Your password reset code".to_string(),
            body: format!(
                "Your one-time password is {code}. It expires in {ttl_minutes} minutes."
            ),
        }
    }

    /// Welcome mail with the initial credentials chosen by the admin
    pub fn welcome(to: &str, name: &str, password: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Welcome aboard".to_string(),
            body: format!(
                "Hi {name}, your account has been created. Login with this email and the password: {password}. Please change it after first login."
            ),
        }
    }
}

/// Email dispatch seam
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError>;
}

/// Notifier failure
#[derive(Debug, thiserror::Error)]
#[error("Email dispatch failed: {0}")]
pub struct NotifyError(pub String);

/// Delivers mail by POSTing to a relay webhook
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.url)
            .json(&message)
            .send()
            .await
            .map_err(|e| NotifyError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(NotifyError(format!(
                "relay returned {} for {}",
                resp.status(),
                message.to
            )));
        }
        Ok(())
    }
}

/// Logs mail instead of sending it. Used in development when no relay
/// webhook is configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        info!(to = %message.to, subject = %message.subject, "Email (log only): {}", message.body);
        Ok(())
    }
}
