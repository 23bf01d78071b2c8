//! Shared utilities and common types for the MailAuth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelope
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, MailConfig, ServerConfig,
    SessionConfig,
};
pub use types::ApiResponse;
pub use utils::validation;
