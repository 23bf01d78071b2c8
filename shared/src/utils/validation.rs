//! Input validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email format check: local part, one `@`, dotted domain.
/// Full RFC 5322 validation is not attempted.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Check if a string looks like a valid email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check if a string is non-empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Mask an email address for logging: keeps the first character of the
/// local part and the domain (`a***@example.com`).
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => String::from("***"),
    }
}
