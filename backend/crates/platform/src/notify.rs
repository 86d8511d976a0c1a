//! Outbound Webhook Notification
//!
//! Best-effort delivery of short text messages to a configured webhook
//! (team chat integration). Failures are reported to the caller, who is
//! expected to log and swallow them; a notification must never fail the
//! operation that triggered it.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook returned status {0}")]
    BadStatus(u16),
}

/// Webhook notifier. Cheap to clone; the inner client pools connections.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(webhook_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            webhook_url,
        }
    }

    /// Post a message to the webhook as a form-encoded `content` field.
    pub async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .form(&[("content", message)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::BadStatus(status.as_u16()));
        }

        Ok(())
    }
}
