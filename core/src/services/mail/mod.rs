//! Outbound mail contract and message templates.
//!
//! The core only needs a fire-and-forget "deliver this templated message"
//! seam; concrete transports live in the infrastructure layer.

pub mod templates;

use async_trait::async_trait;

use crate::errors::DomainError;

/// A templated email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub text_body: String,

    /// HTML body
    pub html_body: String,
}

/// Mail delivery seam implemented by the infrastructure layer
///
/// Callers decide per operation whether a delivery failure is fatal;
/// registration swallows it, OTP sends surface it.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a single message
    async fn send(&self, message: EmailMessage) -> Result<(), DomainError>;
}
