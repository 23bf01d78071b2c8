//! HTTP response handling

pub mod error;

pub use error::error_response;
