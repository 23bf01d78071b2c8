//! Mock mailer for development and testing
//!
//! Prints messages to the log instead of delivering them, so the full
//! account flows can run without a mail provider.

use async_trait::async_trait;
use tracing::info;

use mailauth_core::errors::DomainError;
use mailauth_core::services::mail::{EmailMessage, Mailer};

/// Mailer that logs messages instead of sending them
#[derive(Debug, Default)]
pub struct MockMailer;

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        info!(
            "[MOCK MAIL] to: {} | subject: {} | body: {}",
            message.to, message.subject, message.text_body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_always_succeeds() {
        let mailer = MockMailer::new();
        let message = EmailMessage {
            to: "ann@x.com".to_string(),
            subject: "Hello".to_string(),
            text_body: "Hi".to_string(),
            html_body: "<p>Hi</p>".to_string(),
        };
        assert!(mailer.send(message).await.is_ok());
    }
}
