//! Outbound email delivery configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("http-api" or "mock")
    pub provider: String,

    /// Provider API endpoint for sending messages
    pub api_url: String,

    /// Provider API key
    pub api_key: String,

    /// Sender address placed in the From header
    pub sender_email: String,

    /// Request timeout for provider calls, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            sender_email: String::from("no-reply@localhost"),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl MailConfig {
    /// Load mail settings from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: env::var("MAIL_PROVIDER").unwrap_or_else(|_| String::from("mock")),
            api_url: env::var("MAIL_API_URL").unwrap_or_default(),
            api_key: env::var("MAIL_API_KEY").unwrap_or_default(),
            sender_email: env::var("SENDER_EMAIL")
                .unwrap_or_else(|_| String::from("no-reply@localhost")),
            request_timeout_secs: env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}
