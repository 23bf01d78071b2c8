//! Account lifecycle service configuration

use crate::domain::entities::otp;

/// Configuration for the account lifecycle service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// OTP validity window in minutes
    pub otp_expiry_minutes: i64,

    /// Base URL of the web client, used in email templates
    pub client_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            otp_expiry_minutes: otp::DEFAULT_EXPIRY_MINUTES,
            client_url: String::from("http://localhost:3000"),
        }
    }
}

impl AuthServiceConfig {
    /// Set the OTP validity window
    pub fn with_otp_expiry_minutes(mut self, minutes: i64) -> Self {
        self.otp_expiry_minutes = minutes;
        self
    }

    /// Set the client base URL
    pub fn with_client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = url.into();
        self
    }
}
