//! Auth backend selected at startup.

use auth::domain::gateway::{AuthClient, AuthGrant, OtpReceipt, RegisterReceipt, Registration};
use auth::models::{Email, OtpCode, Password};
use auth::{AuthResult, HttpAuthClient, MockAuthClient, MockConfig};

use crate::config::BackendConfig;

pub enum Backend {
    Mock(MockAuthClient),
    Http(HttpAuthClient),
}

impl Backend {
    pub fn from_config(config: &BackendConfig) -> AuthResult<Self> {
        match config {
            BackendConfig::Mock { latency } => {
                tracing::info!("Using the demo auth backend");
                Ok(Backend::Mock(MockAuthClient::new(MockConfig::with_latency(
                    *latency,
                ))))
            }
            BackendConfig::Http { http, prefix } => {
                tracing::info!(base_url = %http.base_url, %prefix, "Using the HTTP auth backend");
                Ok(Backend::Http(
                    HttpAuthClient::new(http)?.with_prefix(prefix.as_str()),
                ))
            }
        }
    }
}

impl AuthClient for Backend {
    async fn login(&self, email: &Email, password: &Password) -> AuthResult<AuthGrant> {
        match self {
            Backend::Mock(client) => client.login(email, password).await,
            Backend::Http(client) => client.login(email, password).await,
        }
    }

    async fn register(&self, registration: &Registration) -> AuthResult<RegisterReceipt> {
        match self {
            Backend::Mock(client) => client.register(registration).await,
            Backend::Http(client) => client.register(registration).await,
        }
    }

    async fn send_otp(&self, email: &Email) -> AuthResult<OtpReceipt> {
        match self {
            Backend::Mock(client) => client.send_otp(email).await,
            Backend::Http(client) => client.send_otp(email).await,
        }
    }

    async fn verify_otp(&self, email: &Email, otp: &OtpCode) -> AuthResult<AuthGrant> {
        match self {
            Backend::Mock(client) => client.verify_otp(email, otp).await,
            Backend::Http(client) => client.verify_otp(email, otp).await,
        }
    }
}
