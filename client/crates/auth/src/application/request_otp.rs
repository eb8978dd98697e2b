//! Request OTP Use Case
//!
//! Asks the backend to mail a fresh one-time code.

use std::sync::Arc;

use crate::domain::gateway::AuthClient;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Request OTP input
pub struct RequestOtpInput {
    pub email: String,
}

/// Request OTP use case
pub struct RequestOtpUseCase<C>
where
    C: AuthClient,
{
    client: Arc<C>,
}

impl<C> RequestOtpUseCase<C>
where
    C: AuthClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Returns the normalized email the code was sent to
    pub async fn execute(&self, input: RequestOtpInput) -> AuthResult<Email> {
        let email =
            Email::new(input.email).map_err(|e| AuthError::InvalidInput(e.message().to_string()))?;

        let receipt = self.client.send_otp(&email).await?;
        if !receipt.sent {
            return Err(AuthError::Delivery("The code could not be sent".to_string()));
        }

        tracing::info!(email_domain = %email.domain(), "OTP sent");
        Ok(email)
    }
}
