//! Gateway Traits
//!
//! Interfaces to the collaborators outside this crate: the auth backend and
//! the navigation service. Implementations live in `infra` and
//! `presentation`.

use crate::domain::value_object::{
    access_token::AccessToken, email::Email, otp_code::OtpCode, password::Password, role::Role,
};
use crate::error::AuthResult;

/// Token plus the role the backend asserted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub token: AccessToken,
    pub role: Role,
}

/// Account registration request
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: Email,
    pub password: Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterReceipt {
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpReceipt {
    pub sent: bool,
}

/// Auth backend client
#[trait_variant::make(AuthClient: Send)]
pub trait LocalAuthClient {
    /// Exchange credentials for a token
    async fn login(&self, email: &Email, password: &Password) -> AuthResult<AuthGrant>;

    /// Create an account. An OTP is mailed on success.
    async fn register(&self, registration: &Registration) -> AuthResult<RegisterReceipt>;

    /// Mail a fresh one-time code
    async fn send_otp(&self, email: &Email) -> AuthResult<OtpReceipt>;

    /// Exchange a one-time code for a token
    async fn verify_otp(&self, email: &Email, otp: &OtpCode) -> AuthResult<AuthGrant>;
}

/// Navigation target, optionally carrying the email for the next screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub email: Option<Email>,
}

impl Location {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }
}

/// Navigation service
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: Location);
}

impl<T> Navigator for std::sync::Arc<T>
where
    T: Navigator + ?Sized,
{
    fn navigate(&self, location: Location) {
        (**self).navigate(location)
    }
}
