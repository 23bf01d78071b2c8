//! Account lifecycle service: registration, login, OTP verification, and
//! password reset.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
