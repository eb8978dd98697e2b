//! Verify OTP Use Case
//!
//! Exchanges email + one-time code for a token and establishes the session.

use std::sync::Arc;

use platform::storage::KeyValueStorage;

use crate::application::config::AuthConfig;
use crate::application::login::establish_session;
use crate::application::session_store::SessionStore;
use crate::domain::entity::identity::Identity;
use crate::domain::gateway::{AuthClient, Location};
use crate::domain::value_object::{email::Email, otp_code::OtpCode};
use crate::error::{AuthError, AuthResult};

/// Verify OTP input
pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

/// Verify OTP output
#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub identity: Identity,
    pub destination: Location,
}

/// Verify OTP use case
pub struct VerifyOtpUseCase<C, S>
where
    C: AuthClient,
    S: KeyValueStorage,
{
    client: Arc<C>,
    store: Arc<SessionStore<S>>,
    config: Arc<AuthConfig>,
}

impl<C, S> VerifyOtpUseCase<C, S>
where
    C: AuthClient,
    S: KeyValueStorage,
{
    pub fn new(client: Arc<C>, store: Arc<SessionStore<S>>, config: Arc<AuthConfig>) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    pub async fn execute(&self, input: VerifyOtpInput) -> AuthResult<VerifyOtpOutput> {
        // The backend decides whether the address is known; only blank input is refused here
        let email = Email::lenient(input.email)
            .map_err(|e| AuthError::InvalidInput(e.message().to_string()))?;
        let otp = OtpCode::new(&input.otp).map_err(|_| AuthError::InvalidOtp)?;

        let grant = self.client.verify_otp(&email, &otp).await?;
        let identity = establish_session(&self.store, email, grant)?;

        tracing::info!(
            role = %identity.role,
            email_domain = %identity.email.domain(),
            "OTP verified, user signed in"
        );

        Ok(VerifyOtpOutput {
            destination: Location::to(self.config.home_for(identity.role)),
            identity,
        })
    }
}
