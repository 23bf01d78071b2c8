//! HTTP middleware and extractors

pub mod auth;
pub mod cors;

pub use auth::AuthenticatedUser;
