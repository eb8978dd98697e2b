//! Access Token Value Object
//!
//! Opaque bearer token issued by the auth backend. The client never
//! interprets it except to read an asserted role claim.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::bad_request("Access token cannot be empty"));
        }
        Ok(Self(token))
    }

    /// Raw token for storage or an `Authorization` header. Never log this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}
