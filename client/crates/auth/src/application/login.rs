//! Login Use Case
//!
//! Exchanges email + password for a token and establishes the session.

use std::sync::Arc;

use platform::storage::KeyValueStorage;

use crate::application::config::AuthConfig;
use crate::application::session_store::SessionStore;
use crate::domain::entity::{identity::Identity, session::Session};
use crate::domain::gateway::{AuthClient, AuthGrant, Location};
use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub identity: Identity,
    /// Role landing page
    pub destination: Location,
}

/// Login use case
pub struct LoginUseCase<C, S>
where
    C: AuthClient,
    S: KeyValueStorage,
{
    client: Arc<C>,
    store: Arc<SessionStore<S>>,
    config: Arc<AuthConfig>,
}

impl<C, S> LoginUseCase<C, S>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Malformed credentials can never match; don't reveal which field failed
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = Password::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let grant = self.client.login(&email, &password).await?;
        let identity = establish_session(&self.store, email, grant)?;

        tracing::info!(
            role = %identity.role,
            email_domain = %identity.email.domain(),
            "User signed in"
        );

        Ok(LoginOutput {
            destination: Location::to(self.config.home_for(identity.role)),
            identity,
        })
    }
}

/// Store the session granted for `email`. Shared by login and OTP verification.
pub(crate) fn establish_session<S>(
    store: &SessionStore<S>,
    email: Email,
    grant: AuthGrant,
) -> AuthResult<Identity>
where
    S: KeyValueStorage,
{
    let identity = Identity::new(grant.role, email);
    store.set(Session::authenticated(identity.clone(), grant.token))?;
    Ok(identity)
}
