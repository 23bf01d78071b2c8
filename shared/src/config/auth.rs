//! Authentication configuration: JWT signing and the session cookie

use serde::{Deserialize, Serialize};
use std::env;

use super::environment::Environment;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token validity in days
    pub token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            token_expiry_days: 7,
            issuer: String::from("mailauth"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token validity window in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.token_expiry_days = days;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-change-in-production"
    }
}

/// Session cookie configuration
///
/// The session token travels in an HTTP-only cookie. `secure` and the
/// cross-site policy depend on the environment: production serves the API
/// and the web client from different origins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Cookie max age in seconds
    pub max_age_secs: i64,

    /// Cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Allow the cookie on cross-site requests (SameSite=None)
    pub cross_site: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("token"),
            max_age_secs: 7 * 24 * 60 * 60,
            secure: false,
            cross_site: false,
        }
    }
}

impl SessionConfig {
    /// Session settings appropriate for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            secure: environment.is_production(),
            cross_site: environment.is_production(),
            ..Default::default()
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Self {
        let secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| String::from("development-secret-change-in-production"));
        let token_expiry_days = env::var("JWT_TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        Self {
            jwt: JwtConfig {
                secret,
                token_expiry_days,
                issuer: String::from("mailauth"),
            },
            session: SessionConfig::for_environment(environment),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry_days, 7);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_days(14);
        assert_eq!(config.token_expiry_days, 14);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_session_config_follows_environment() {
        let dev = SessionConfig::for_environment(Environment::Development);
        assert!(!dev.secure);
        assert!(!dev.cross_site);

        let prod = SessionConfig::for_environment(Environment::Production);
        assert!(prod.secure);
        assert!(prod.cross_site);
    }

    #[test]
    fn test_session_cookie_max_age_is_seven_days() {
        let config = SessionConfig::default();
        assert_eq!(config.max_age_secs, 604_800);
    }
}
