//! Password hashing and verification.

use crate::errors::{DomainError, DomainResult};

/// bcrypt work factor
const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a raw password with bcrypt
pub fn hash_password(raw: &str) -> DomainResult<String> {
    bcrypt::hash(raw, BCRYPT_COST)
        .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// Check a raw password against a stored bcrypt hash
///
/// A malformed stored hash is an internal error, not a mismatch.
pub fn verify_password(raw: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(raw, hash)
        .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
}
