//! Account lifecycle service implementation.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use mailauth_shared::utils::validation::mask_email;

use crate::domain::entities::{Account, OtpCheck};
use crate::domain::value_objects::{AuthResponse, ProfileData};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::mail::{templates, Mailer};
use crate::services::password::{hash_password, verify_password};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Orchestrates every account state transition
///
/// Generic over its collaborators so the HTTP layer can wire real
/// implementations while tests run against in-memory doubles.
pub struct AuthService<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    /// Account repository for persistence
    accounts: Arc<R>,
    /// Mail gateway for OTP and welcome notifications
    mailer: Arc<M>,
    /// Session token issuer
    tokens: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<R, M> AuthService<R, M>
where
    R: AccountRepository,
    M: Mailer,
{
    /// Create a new account lifecycle service
    pub fn new(
        accounts: Arc<R>,
        mailer: Arc<M>,
        tokens: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            accounts,
            mailer,
            tokens,
            config,
        }
    }

    fn otp_validity(&self) -> Duration {
        Duration::minutes(self.config.otp_expiry_minutes)
    }

    /// Register a new account
    ///
    /// Creates an unverified account, issues a session token, and fires the
    /// welcome email. A welcome delivery failure is logged and swallowed:
    /// registration has already succeeded at that point.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("All inputs are required"));
        }

        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(DomainError::conflict("User already exists"));
        }

        let password_hash = hash_password(password)?;
        let account = Account::new(name.to_string(), email.to_string(), password_hash);

        // The store's uniqueness constraint closes the check-then-create
        // race; a concurrent duplicate surfaces here as Conflict.
        let account = self.accounts.create(account).await?;
        let token = self.tokens.issue(account.id)?;

        info!("registered account {}", mask_email(&account.email));

        let message = templates::welcome(&account.name, &account.email, &self.config.client_url);
        if let Err(e) = self.mailer.send(message).await {
            warn!("welcome email to {} failed: {}", mask_email(&account.email), e);
        }

        Ok(AuthResponse {
            account: (&account).into(),
            token,
        })
    }

    /// Authenticate with email and password, returning a fresh session token
    ///
    /// Unknown email and wrong password collapse into one generic message to
    /// avoid identity enumeration.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("All inputs are required"));
        }

        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::unauthorized("Invalid credentials"))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(DomainError::unauthorized("Invalid credentials"));
        }

        info!("login for account {}", mask_email(&account.email));
        self.tokens.issue(account.id)
    }

    /// Issue and deliver an account verification OTP
    pub async fn send_verify_otp(&self, account_id: Uuid) -> DomainResult<()> {
        let mut account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if account.is_verified {
            return Err(DomainError::conflict("Account already verified"));
        }

        let otp = account.issue_verify_otp(self.otp_validity());
        let account = self.accounts.update(account).await?;

        let message = templates::verify_otp(&account.name, &account.email, &otp);
        self.mailer.send(message).await?;

        info!("verification OTP sent to {}", mask_email(&account.email));
        Ok(())
    }

    /// Confirm account verification with an OTP
    ///
    /// The verified flag is monotonic: a verified account can never re-enter
    /// this flow. An expired code clears the slot before reporting failure.
    pub async fn verify_account(&self, account_id: Uuid, otp: &str) -> DomainResult<()> {
        if otp.trim().is_empty() {
            return Err(DomainError::validation("All inputs are required"));
        }

        let mut account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if account.is_verified {
            return Err(DomainError::conflict("Account already verified"));
        }

        match account.verify_otp.check(otp, Utc::now()) {
            OtpCheck::Expired => {
                account.clear_verify_otp();
                self.accounts.update(account).await?;
                Err(DomainError::OtpExpired)
            }
            OtpCheck::Mismatch | OtpCheck::Empty => Err(DomainError::OtpInvalid),
            OtpCheck::Valid => {
                // Clearing the slot and flipping the flag persist together,
                // so the code cannot be replayed.
                account.mark_verified();
                let account = self.accounts.update(account).await?;
                info!("account {} verified", mask_email(&account.email));
                Ok(())
            }
        }
    }

    /// Issue and deliver a password-reset OTP
    pub async fn send_reset_otp(&self, email: &str) -> DomainResult<()> {
        if email.trim().is_empty() {
            return Err(DomainError::validation("All inputs are required"));
        }

        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let otp = account.issue_reset_otp(self.otp_validity());
        let account = self.accounts.update(account).await?;

        let message = templates::reset_otp(&account.name, &account.email, &otp);
        self.mailer.send(message).await?;

        info!("reset OTP sent to {}", mask_email(&account.email));
        Ok(())
    }

    /// Confirm a password reset with an OTP and a new password
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if email.trim().is_empty() || otp.trim().is_empty() || new_password.is_empty() {
            return Err(DomainError::validation("All inputs are required"));
        }

        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        match account.reset_otp.check(otp, Utc::now()) {
            OtpCheck::Expired => Err(DomainError::OtpExpired),
            OtpCheck::Mismatch | OtpCheck::Empty => Err(DomainError::OtpInvalid),
            OtpCheck::Valid => {
                let password_hash = hash_password(new_password)?;
                account.replace_password(password_hash);
                let account = self.accounts.update(account).await?;
                info!("password reset for {}", mask_email(&account.email));
                Ok(())
            }
        }
    }

    /// Fetch the profile payload for an authenticated account
    pub async fn profile(&self, account_id: Uuid) -> DomainResult<ProfileData> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        Ok((&account).into())
    }
}
