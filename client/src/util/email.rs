//! Client-side email validation.
//!
//! The pattern is deliberately practical (something@something.tld, no
//! whitespace, single `@` per side) rather than RFC 5322 complete; the
//! spreadsheet endpoint does no validation of its own.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

/// Longest address accepted, per the SMTP forward-path limit.
pub const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    TooLong,
    #[error("Please enter a valid email address")]
    Malformed,
}

/// Trim and validate `raw`, returning the normalized address.
///
/// # Errors
///
/// Returns [`EmailError`] describing why the address was rejected; its
/// `Display` is the message shown under the form.
pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(EmailError::TooLong);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(email.to_owned())
}

/// `true` when `raw` would pass [`validate_email`].
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    validate_email(raw).is_ok()
}
