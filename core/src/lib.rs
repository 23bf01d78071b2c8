//! # MailAuth Core
//!
//! Core business logic and domain layer for the MailAuth backend.
//! This crate contains domain entities, the account lifecycle service,
//! repository interfaces, and error types that form the foundation of
//! the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Account, Claims, OtpCheck, OtpSlot};
pub use domain::value_objects::{AccountSummary, AuthResponse, ProfileData};
pub use errors::{DomainError, DomainResult};
pub use repositories::{AccountRepository, MockAccountRepository};
pub use services::auth::{AuthService, AuthServiceConfig};
pub use services::mail::{EmailMessage, Mailer};
pub use services::token::TokenService;
