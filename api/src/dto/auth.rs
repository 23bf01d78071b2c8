//! Authentication request payloads.
//!
//! Handlers reject structurally empty payloads up front with the same
//! message the service uses, so the client sees one vocabulary.

use serde::Deserialize;
use validator::Validate;

/// Request body for POST /api/auth/register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "All inputs are required"))]
    pub name: String,

    #[validate(length(min = 1, message = "All inputs are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "All inputs are required"))]
    pub password: String,
}

/// Request body for POST /api/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "All inputs are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "All inputs are required"))]
    pub password: String,
}

/// Request body for POST /api/auth/verify-account
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyAccountRequest {
    #[validate(length(min = 1, message = "All inputs are required"))]
    pub otp: String,
}

/// Request body for POST /api/auth/send-reset-otp
#[derive(Debug, Deserialize, Validate)]
pub struct SendResetOtpRequest {
    #[validate(length(min = 1, message = "All inputs are required"))]
    pub email: String,
}

/// Request body for POST /api/auth/reset-password
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "All inputs are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "All inputs are required"))]
    pub otp: String,

    #[validate(length(min = 1, message = "All inputs are required"))]
    pub new_password: String,
}
