//! Stateless JWT session token service.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use mailauth_shared::config::JwtConfig;

use crate::domain::entities::Claims;
use crate::errors::{DomainError, DomainResult};

/// Issues and verifies signed session tokens
///
/// Tokens are stateless HS256 bearer credentials: there is no revocation
/// list, so a token stays valid until its expiry. `verify` fails closed:
/// any malformed, expired, or mis-signed token reports `Unauthorized`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    validity: Duration,
}

impl TokenService {
    /// Creates a new token service from JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            validity: Duration::days(config.token_expiry_days),
        }
    }

    /// Issues a signed session token for an account
    pub fn issue(&self, account_id: Uuid) -> DomainResult<String> {
        let claims = Claims::new(account_id, &self.issuer, self.validity);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Token signing failed: {}", e)))
    }

    /// Verifies a session token and returns its claims
    ///
    /// Fail-closed: every decode failure collapses into `Unauthorized`.
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::unauthorized("Not authorized, invalid or expired token"))
    }

    /// Verifies a token and extracts the account identity it asserts
    pub fn verify_identity(&self, token: &str) -> DomainResult<Uuid> {
        let claims = self.verify(token)?;
        claims
            .account_id()
            .map_err(|_| DomainError::unauthorized("Not authorized, invalid or expired token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig::new("test-secret"))
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = service();
        let account_id = Uuid::new_v4();

        let token = service.issue(account_id).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), account_id);
        assert_eq!(service.verify_identity(&token).unwrap(), account_id);
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let service = service();
        let err = service.verify("not.a.jwt").unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized { .. }));
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let token = service().issue(Uuid::new_v4()).unwrap();
        let other = TokenService::new(&JwtConfig::new("different-secret"));
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let config = JwtConfig::new("test-secret").with_expiry_days(-1);
        let service = TokenService::new(&config);
        let token = service.issue(Uuid::new_v4()).unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_is_unauthorized() {
        let mut config = JwtConfig::new("test-secret");
        config.issuer = "someone-else".to_string();
        let token = TokenService::new(&config).issue(Uuid::new_v4()).unwrap();
        assert!(service().verify(&token).is_err());
    }
}
