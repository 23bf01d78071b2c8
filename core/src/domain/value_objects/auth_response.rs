//! Authentication response value objects for API payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Account;

/// Public fields of an account, safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    /// Account identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}

/// Result of a successful registration or login
///
/// The token is handed to the transport layer for cookie delivery; it is
/// not part of the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Public account fields
    pub account: AccountSummary,

    /// Signed session token
    pub token: String,
}

/// Profile payload for the authenticated account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileData {
    /// Display name
    pub name: String,

    /// Whether the email address has been verified
    pub is_verified: bool,
}

impl From<&Account> for ProfileData {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            is_verified: account.is_verified,
        }
    }
}
