//! One-time password slot for account verification and password reset.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a generated OTP code
pub const CODE_LENGTH: usize = 6;

/// Default OTP validity window (1 hour)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 60;

/// Outcome of checking a supplied code against a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpCheck {
    /// Code matches and has not expired
    Valid,
    /// A code was issued but its validity window has passed
    Expired,
    /// A live code exists but the supplied code does not match
    Mismatch,
    /// No code has been issued
    Empty,
}

/// OTP slot holding at most one live code and its expiry
///
/// An account carries one slot per purpose (verification, password reset).
/// Issuing into an occupied slot silently discards the previous code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSlot {
    /// The 6-digit code, if one is outstanding
    pub code: Option<String>,

    /// When the outstanding code stops being accepted
    pub expires_at: Option<DateTime<Utc>>,
}

impl OtpSlot {
    /// An empty slot with no outstanding code
    pub fn empty() -> Self {
        Self::default()
    }

    /// Restore a slot from stored fields
    pub fn from_parts(code: Option<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { code, expires_at }
    }

    /// Issue a fresh code into the slot, replacing any previous one
    ///
    /// Returns the generated code so the caller can deliver it.
    pub fn issue(&mut self, validity: Duration) -> String {
        let code = generate_code();
        self.code = Some(code.clone());
        self.expires_at = Some(Utc::now() + validity);
        code
    }

    /// Check a supplied code against the slot at the given instant
    ///
    /// Expiry wins over mismatch: a correct code past its window still
    /// reports `Expired`.
    pub fn check(&self, supplied: &str, now: DateTime<Utc>) -> OtpCheck {
        let (code, expires_at) = match (&self.code, self.expires_at) {
            (Some(code), Some(expires_at)) => (code, expires_at),
            _ => return OtpCheck::Empty,
        };

        if now > expires_at {
            return OtpCheck::Expired;
        }

        if code != supplied {
            return OtpCheck::Mismatch;
        }

        OtpCheck::Valid
    }

    /// Clear the slot
    pub fn clear(&mut self) {
        self.code = None;
        self.expires_at = None;
    }

    /// Whether the slot holds no code
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
    }
}

/// Generate a uniformly random 6-digit code in [100000, 999999]
fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    let code: u32 = rng.gen_range(100_000..=999_999);
    format!("{:06}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_format() {
        for _ in 0..100 {
            let mut slot = OtpSlot::empty();
            let code = slot.issue(Duration::minutes(DEFAULT_EXPIRY_MINUTES));
            assert_eq!(code.len(), CODE_LENGTH);
            let num: u32 = code.parse().expect("code is numeric");
            assert!((100_000..=999_999).contains(&num));
        }
    }

    #[test]
    fn test_issue_overwrites_previous_code() {
        let mut slot = OtpSlot::empty();
        let first = slot.issue(Duration::minutes(60));
        let second = slot.issue(Duration::minutes(60));
        // Only the latest code is live
        let now = Utc::now();
        assert_eq!(slot.check(&second, now), OtpCheck::Valid);
        if first != second {
            assert_eq!(slot.check(&first, now), OtpCheck::Mismatch);
        }
    }

    #[test]
    fn test_check_empty_slot() {
        let slot = OtpSlot::empty();
        assert_eq!(slot.check("123456", Utc::now()), OtpCheck::Empty);
    }

    #[test]
    fn test_check_valid_and_mismatch() {
        let mut slot = OtpSlot::empty();
        let code = slot.issue(Duration::minutes(60));
        let now = Utc::now();
        assert_eq!(slot.check(&code, now), OtpCheck::Valid);
        assert_eq!(slot.check("000000", now), OtpCheck::Mismatch);
    }

    #[test]
    fn test_expiry_beats_correct_code() {
        let mut slot = OtpSlot::empty();
        let code = slot.issue(Duration::minutes(60));
        let after_expiry = Utc::now() + Duration::minutes(61);
        assert_eq!(slot.check(&code, after_expiry), OtpCheck::Expired);
        assert_eq!(slot.check("000000", after_expiry), OtpCheck::Expired);
    }

    #[test]
    fn test_clear() {
        let mut slot = OtpSlot::empty();
        slot.issue(Duration::minutes(60));
        assert!(!slot.is_empty());
        slot.clear();
        assert!(slot.is_empty());
        assert_eq!(slot.check("123456", Utc::now()), OtpCheck::Empty);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut slot = OtpSlot::empty();
        slot.issue(Duration::minutes(60));
        let json = serde_json::to_string(&slot).unwrap();
        let restored: OtpSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(slot, restored);
    }
}
