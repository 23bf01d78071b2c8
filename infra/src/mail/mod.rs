//! Mail delivery module
//!
//! Outbound email implementations behind the core [`Mailer`] seam:
//! an HTTP transactional-mail provider client for production and a
//! console-logging mock for development.

use async_trait::async_trait;

use mailauth_core::errors::DomainError;
use mailauth_core::services::mail::{EmailMessage, Mailer};
use mailauth_shared::config::MailConfig;

pub mod http_api;
pub mod mock;

pub use http_api::HttpApiMailer;
pub use mock::MockMailer;

/// A mailer chosen at runtime from configuration
pub struct DynMailer {
    inner: Box<dyn Mailer>,
}

#[async_trait]
impl Mailer for DynMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError> {
        self.inner.send(message).await
    }
}

/// Create a mailer based on configuration
///
/// Falls back to the mock implementation when the configured provider is
/// unknown or cannot be initialized.
pub fn create_mailer(config: &MailConfig) -> DynMailer {
    let inner: Box<dyn Mailer> = match config.provider.as_str() {
        "http-api" => match HttpApiMailer::new(config) {
            Ok(mailer) => Box::new(mailer),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP mail provider: {}", e);
                tracing::warn!("Falling back to mock mailer");
                Box::new(MockMailer::new())
            }
        },
        "mock" => Box::new(MockMailer::new()),
        other => {
            tracing::warn!("Unknown mail provider '{}', using mock implementation", other);
            Box::new(MockMailer::new())
        }
    };

    DynMailer { inner }
}
