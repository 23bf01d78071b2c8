//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Every operation of the account lifecycle reports one of these kinds.
/// The HTTP layer maps each kind to a status code; the display string is
/// the client-facing message (except `Internal`, whose detail stays in the
/// logs).
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("OTP expired")]
    OtpExpired,

    #[error("Invalid OTP")]
    OtpInvalid,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Missing or malformed input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Bad credentials or bad/missing token
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Resource absent
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Duplicate registration or invalid state transition
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Unexpected storage, signing, or delivery failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
