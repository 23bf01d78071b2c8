//! Domain entities

pub mod account;
pub mod otp;
pub mod token;

pub use account::Account;
pub use otp::{OtpCheck, OtpSlot};
pub use token::Claims;
