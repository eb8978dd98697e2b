//! Password Value Object
//!
//! Clear-text password as typed by the user, held only long enough to be
//! sent to the auth backend. Strength policy is enforced server-side.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Raw password from user input
///
/// `Debug` is redacted so the value never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a password. Rejects empty or whitespace-only input.
    ///
    /// The value is kept exactly as typed.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AppError::bad_request("Password cannot be empty")
                .with_action("Please enter a password"));
        }
        Ok(Self(raw))
    }

    /// Expose the clear text for the request body
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
