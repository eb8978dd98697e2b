//! Register Use Case
//!
//! Creates an account. The session is untouched; the user continues to
//! OTP verification.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::gateway::{AuthClient, Location, Registration};
use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub email: Email,
    /// OTP screen, carrying the email
    pub destination: Location,
}

/// Register use case
pub struct RegisterUseCase<C>
where
    C: AuthClient,
{
    client: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> RegisterUseCase<C>
where
    C: AuthClient,
{
    pub fn new(client: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self { client, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Registration("Name cannot be empty".to_string()));
        }

        let email =
            Email::new(input.email).map_err(|e| AuthError::Registration(e.message().to_string()))?;
        let password = Password::new(input.password)
            .map_err(|e| AuthError::Registration(e.message().to_string()))?;

        let registration = Registration {
            name,
            email,
            password,
        };
        let receipt = self.client.register(&registration).await?;

        if !receipt.success {
            return Err(AuthError::Registration(
                "Registration was not accepted".to_string(),
            ));
        }

        tracing::info!(
            email_domain = %registration.email.domain(),
            "Account registered, awaiting OTP"
        );

        let email = registration.email;
        Ok(RegisterOutput {
            destination: Location::to(&self.config.otp_path).with_email(email.clone()),
            email,
        })
    }
}
