//! Email Value Object
//!
//! Represents a normalized email address.
//! Basic validation only - ownership is proven by the OTP flow.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;
/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Input is trimmed, NFKC-normalized and lower-cased before checking.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = Self::lenient(email)?.0;

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(AppError::bad_request("Invalid email format")
                .with_action("Please enter a valid email address"));
        }

        Ok(Self(email))
    }

    /// Normalize like [`Email::new`] but only reject blank input.
    ///
    /// For addresses the backend judges on its own (OTP verification) and
    /// for addresses read back from a persisted session.
    pub fn lenient(email: impl Into<String>) -> AppResult<Self> {
        let email: String = email.into().trim().nfkc().collect::<String>().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty")
                .with_action("Please enter your email address"));
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // Exactly one @
        if domain.contains('@') {
            return false;
        }

        if local.is_empty() || local.chars().count() > LOCAL_PART_MAX_LENGTH {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain shouldn't start or end with dot or hyphen
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return false;
        }

        true
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part of the email
    ///
    /// Log this instead of the full address.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl TryFrom<String> for Email {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Email::lenient(value)
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
