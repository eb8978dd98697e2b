use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix the auth backend puts on its authority names (`ROLE_ADMIN`)
const AUTHORITY_PREFIX: &str = "role_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parse a role code.
    ///
    /// Accepts `admin` / `user` and the backend authority form
    /// `ROLE_ADMIN` / `ROLE_USER`, case-insensitively.
    pub fn from_code(code: &str) -> AppResult<Self> {
        let lowered = code.trim().to_ascii_lowercase();
        let bare = lowered.strip_prefix(AUTHORITY_PREFIX).unwrap_or(&lowered);

        match bare {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => {
                tracing::warn!(code = %code, "Unknown role code");
                Err(AppError::bad_request(format!("Unknown role: {code}")))
            }
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Role::from_code(&value)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Role::from_code(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
