//! In-process auth backend with canned demo accounts.
//!
//! | email             | password  | role  | token            |
//! |-------------------|-----------|-------|------------------|
//! | `admin@gmail.com` | `admin`   | admin | `mock-jwt-admin` |
//! | `user@gmail.com`  | `user123` | user  | `mock-jwt-user`  |
//!
//! Registration and OTP dispatch always succeed. OTP `123456` verifies any
//! email; the role is guessed from the address, which is only acceptable
//! for a demo backend.

use std::time::Duration;

use crate::domain::gateway::{AuthClient, AuthGrant, OtpReceipt, RegisterReceipt, Registration};
use crate::domain::value_object::{
    access_token::AccessToken, email::Email, otp_code::OtpCode, password::Password, role::Role,
};
use crate::error::{AuthError, AuthResult};

const DEMO_OTP: &str = "123456";
const VERIFIED_TOKEN: &str = "mock-jwt-verified";

struct DemoAccount {
    email: &'static str,
    password: &'static str,
    role: Role,
    token: &'static str,
}

static DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        email: "admin@gmail.com",
        password: "admin",
        role: Role::Admin,
        token: "mock-jwt-admin",
    },
    DemoAccount {
        email: "user@gmail.com",
        password: "user123",
        role: Role::User,
        token: "mock-jwt-user",
    },
];

/// Mock backend configuration
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Simulated round-trip delay per call
    pub latency: Duration,
}

impl MockConfig {
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockAuthClient {
    config: MockConfig,
}

impl MockAuthClient {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    fn grant(token: &str, role: Role) -> AuthResult<AuthGrant> {
        let token = AccessToken::new(token).map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(AuthGrant { token, role })
    }
}

impl AuthClient for MockAuthClient {
    async fn login(&self, email: &Email, password: &Password) -> AuthResult<AuthGrant> {
        self.simulate_latency().await;

        // `Email` is already lower-cased; passwords compare exactly
        let account = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.email == email.as_str() && a.password == password.expose());

        match account {
            Some(account) => Self::grant(account.token, account.role),
            None => {
                tracing::debug!("Demo accounts: admin@gmail.com/admin or user@gmail.com/user123");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn register(&self, registration: &Registration) -> AuthResult<RegisterReceipt> {
        self.simulate_latency().await;
        tracing::debug!(email_domain = %registration.email.domain(), "Mock registration accepted");
        Ok(RegisterReceipt { success: true })
    }

    async fn send_otp(&self, email: &Email) -> AuthResult<OtpReceipt> {
        self.simulate_latency().await;
        tracing::debug!(email_domain = %email.domain(), "Mock OTP dispatched");
        Ok(OtpReceipt { sent: true })
    }

    async fn verify_otp(&self, email: &Email, otp: &OtpCode) -> AuthResult<AuthGrant> {
        self.simulate_latency().await;

        if otp.as_str() != DEMO_OTP {
            tracing::debug!("Demo OTP is 123456");
            return Err(AuthError::InvalidOtp);
        }

        let role = if email.as_str().contains("admin") {
            Role::Admin
        } else {
            Role::User
        };
        Self::grant(VERIFIED_TOKEN, role)
    }
}
