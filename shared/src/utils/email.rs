//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose address shape: something, `@`, something, `.`, something; no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Check whether an address has the accepted shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Canonical store key for an address: trimmed and lower-cased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Case-insensitive address comparison, ignoring surrounding whitespace
///
/// Agrees with `normalize_email`, including non-ASCII letters.
pub fn emails_match(a: &str, b: &str) -> bool {
    normalize_email(a) == normalize_email(b)
}

/// Mask an address for logging (e.g. `user@example.com` -> `u***@example.com`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => String::from("***"),
    }
}
