//! User routes.

pub mod profile;
