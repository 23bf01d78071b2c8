//! Account entity representing a registered user.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::otp::OtpSlot;

/// A registered account
///
/// The email address is the unique lookup key and never changes after
/// registration. The password is stored only as a bcrypt hash. The two OTP
/// slots have independent lifecycles: one for account verification, one for
/// password reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: Uuid,

    /// Email address, unique per account
    pub email: String,

    /// Display name
    pub name: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Whether the email address has been verified. Monotonic: once set it
    /// never goes back to false.
    pub is_verified: bool,

    /// Outstanding account-verification OTP, if any
    pub verify_otp: OtpSlot,

    /// Outstanding password-reset OTP, if any
    pub reset_otp: OtpSlot,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified account with no outstanding OTPs
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            is_verified: false,
            verify_otp: OtpSlot::empty(),
            reset_otp: OtpSlot::empty(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as verified and clears the verification slot
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verify_otp.clear();
        self.updated_at = Utc::now();
    }

    /// Replaces the password hash and clears the reset slot
    pub fn replace_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.reset_otp.clear();
        self.updated_at = Utc::now();
    }

    /// Issues a fresh verification OTP, returning the code for delivery
    pub fn issue_verify_otp(&mut self, validity: Duration) -> String {
        let code = self.verify_otp.issue(validity);
        self.updated_at = Utc::now();
        code
    }

    /// Issues a fresh password-reset OTP, returning the code for delivery
    pub fn issue_reset_otp(&mut self, validity: Duration) -> String {
        let code = self.reset_otp.issue(validity);
        self.updated_at = Utc::now();
        code
    }

    /// Discards the outstanding verification OTP
    pub fn clear_verify_otp(&mut self) {
        self.verify_otp.clear();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::otp::OtpCheck;

    fn account() -> Account {
        Account::new(
            "Ann".to_string(),
            "ann@x.com".to_string(),
            "$2b$12$hash".to_string(),
        )
    }

    #[test]
    fn test_new_account_is_unverified_with_empty_slots() {
        let account = account();
        assert!(!account.is_verified);
        assert!(account.verify_otp.is_empty());
        assert!(account.reset_otp.is_empty());
    }

    #[test]
    fn test_mark_verified_clears_slot() {
        let mut account = account();
        account.issue_verify_otp(Duration::minutes(60));
        account.mark_verified();
        assert!(account.is_verified);
        assert!(account.verify_otp.is_empty());
    }

    #[test]
    fn test_otp_slots_are_independent() {
        let mut account = account();
        let verify_code = account.issue_verify_otp(Duration::minutes(60));
        let reset_code = account.issue_reset_otp(Duration::minutes(60));

        let now = Utc::now();
        assert_eq!(account.verify_otp.check(&verify_code, now), OtpCheck::Valid);
        assert_eq!(account.reset_otp.check(&reset_code, now), OtpCheck::Valid);

        account.clear_verify_otp();
        assert!(account.verify_otp.is_empty());
        assert!(!account.reset_otp.is_empty());
    }

    #[test]
    fn test_replace_password_clears_reset_slot() {
        let mut account = account();
        account.issue_reset_otp(Duration::minutes(60));
        account.replace_password("$2b$12$newhash".to_string());
        assert_eq!(account.password_hash, "$2b$12$newhash");
        assert!(account.reset_otp.is_empty());
    }
}
