//! Identity Entity
//!
//! The authenticated user as the client knows it: role plus email.
//! Persisted as `{"role":"admin","email":"admin@gmail.com"}`.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, role::Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub role: Role,
    pub email: Email,
}

impl Identity {
    pub fn new(role: Role, email: Email) -> Self {
        Self { role, email }
    }
}
