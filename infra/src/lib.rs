//! # Infrastructure Layer
//!
//! Concrete implementations behind the core crate's seams:
//! - **Database**: MySQL persistence using SQLx
//! - **Mail**: outbound email delivery over an HTTP provider API,
//!   plus a console-logging mock for development

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - outbound email delivery
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider error
    #[error("Mail delivery error: {0}")]
    Mail(String),
}
