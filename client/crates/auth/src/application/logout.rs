//! Logout Use Case
//!
//! Drops the local session. There is no server-side session to revoke.

use std::sync::Arc;

use platform::storage::KeyValueStorage;

use crate::application::config::AuthConfig;
use crate::application::session_store::SessionStore;
use crate::domain::gateway::Location;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: KeyValueStorage,
{
    store: Arc<SessionStore<S>>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: Arc<SessionStore<S>>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    /// Clear the session and return where to go next. Never fails.
    pub fn execute(&self) -> Location {
        let was_authenticated = self.store.get().is_authenticated();
        self.store.clear();

        if was_authenticated {
            tracing::info!("User signed out");
        }

        Location::to(&self.config.public_home)
    }
}
