//! HTTP transactional-mail provider client
//!
//! Sends messages through a provider's REST API (a single JSON POST per
//! message, authenticated with a bearer token).

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use mailauth_core::errors::DomainError;
use mailauth_core::services::mail::{EmailMessage, Mailer};
use mailauth_shared::config::MailConfig;
use mailauth_shared::utils::validation::mask_email;

use crate::InfrastructureError;

/// JSON payload accepted by the provider's send endpoint
#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Mailer backed by an HTTP mail provider API
pub struct HttpApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_email: String,
}

impl HttpApiMailer {
    /// Create a new provider client from configuration
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL not set".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "HTTP mail provider initialized with sender: {}",
            mask_email(&config.sender_email)
        );

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            sender_email: config.sender_email.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpApiMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        debug!(
            "Sending email to {} with subject: {}",
            mask_email(&message.to),
            message.subject
        );

        let payload = SendPayload {
            from: &self.sender_email,
            to: &message.to,
            subject: &message.subject,
            text: &message.text_body,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Mail provider request failed: {}", e);
                DomainError::internal(format!("Mail provider request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Mail provider returned {}: {}", status, body);
            return Err(DomainError::internal(format!(
                "Mail provider returned {}",
                status
            )));
        }

        info!("Email sent to {}", mask_email(&message.to));
        Ok(())
    }
}
