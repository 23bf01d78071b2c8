//! Authentication routes.

pub mod is_auth;
pub mod login;
pub mod logout;
pub mod register;
pub mod reset_password;
pub mod send_reset_otp;
pub mod send_verify_otp;
pub mod verify_account;
