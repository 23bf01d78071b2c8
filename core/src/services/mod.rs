//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mail;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use mail::{EmailMessage, Mailer};
pub use token::TokenService;
