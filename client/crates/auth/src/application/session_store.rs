//! Session Store
//!
//! Single source of truth for the current [`Session`], mirrored to a
//! [`KeyValueStorage`] backend under two keys (identity JSON and token).
//!
//! ## Write policy
//! `set` persists before it swaps the in-memory value. If persisting fails,
//! the previous session is written back and memory is left untouched, so
//! `get` always reflects the last successful `set`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use platform::storage::{KeyValueStorage, StorageError};

use crate::application::config::AuthConfig;
use crate::domain::entity::{identity::Identity, session::Session};
use crate::domain::value_object::access_token::AccessToken;
use crate::error::{AuthError, AuthResult};

pub struct SessionStore<S>
where
    S: KeyValueStorage,
{
    storage: S,
    config: Arc<AuthConfig>,
    current: Mutex<Session>,
}

impl<S> SessionStore<S>
where
    S: KeyValueStorage,
{
    /// Load the persisted session, dropping malformed or partial leftovers.
    ///
    /// A read that fails for any reason other than corrupt data leaves
    /// storage untouched; the next successful `set` or `clear` wins.
    pub fn open(storage: S, config: Arc<AuthConfig>) -> Self {
        let store = Self {
            storage,
            config,
            current: Mutex::new(Session::anonymous()),
        };

        let session = match store.read_persisted() {
            Ok((session, discarded)) => {
                if discarded {
                    store.purge();
                }
                session
            }
            Err(err @ AuthError::PersistenceRead(StorageError::Corrupt { .. })) => {
                err.log();
                store.purge();
                Session::anonymous()
            }
            Err(err) => {
                err.log();
                Session::anonymous()
            }
        };

        tracing::debug!(
            authenticated = session.is_authenticated(),
            "Session store opened"
        );
        *store.lock() = session;
        store
    }

    /// Read the persisted session. Never fails: anything unreadable is
    /// treated as anonymous.
    pub fn load(&self) -> Session {
        match self.read_persisted() {
            Ok((session, _)) => session,
            Err(e) => {
                e.log();
                Session::anonymous()
            }
        }
    }

    /// Persisted session, and whether stored data had to be discarded
    fn read_persisted(&self) -> AuthResult<(Session, bool)> {
        let raw_identity = self
            .storage
            .get(&self.config.identity_key)
            .map_err(AuthError::PersistenceRead)?;
        let raw_token = self
            .storage
            .get(&self.config.token_key)
            .map_err(AuthError::PersistenceRead)?;
        let had_data = raw_identity.is_some() || raw_token.is_some();

        let identity = raw_identity.and_then(|raw| {
            serde_json::from_str::<Identity>(&raw)
                .inspect_err(|e| tracing::warn!(error = %e, "Discarding malformed persisted identity"))
                .ok()
        });
        let token = raw_token.and_then(|raw| AccessToken::new(raw).ok());

        if identity.is_some() != token.is_some() {
            tracing::warn!("Discarding partial persisted session");
        }

        let session = Session::from_parts(identity, token);
        let discarded = had_data && !session.is_authenticated();
        Ok((session, discarded))
    }

    fn purge(&self) {
        if let Err(e) = self.save(&Session::anonymous()) {
            tracing::warn!(error = %e, "Failed to purge stale session data");
        }
    }

    /// Write `session` to storage. Anonymous removes both keys.
    pub fn save(&self, session: &Session) -> AuthResult<()> {
        let keys = (&self.config.identity_key, &self.config.token_key);

        match (session.identity(), session.token()) {
            (Some(identity), Some(token)) => {
                let json = serde_json::to_string(identity)
                    .map_err(|e| AuthError::Internal(format!("Failed to encode identity: {e}")))?;
                self.storage
                    .set(keys.0, &json)
                    .and_then(|()| self.storage.set(keys.1, token.expose()))
                    .map_err(AuthError::PersistenceWrite)
            }
            _ => self
                .storage
                .remove(keys.0)
                .and_then(|()| self.storage.remove(keys.1))
                .map_err(AuthError::PersistenceWrite),
        }
    }

    /// Current in-memory session
    pub fn get(&self) -> Session {
        self.lock().clone()
    }

    /// Replace the session, persisting first.
    ///
    /// On a write failure the previous session is restored in storage and
    /// `PersistenceWrite` is returned.
    pub fn set(&self, session: Session) -> AuthResult<()> {
        let mut current = self.lock();

        if let Err(err) = self.save(&session) {
            if let Err(rollback) = self.save(&current) {
                tracing::error!(error = %rollback, "Failed to restore persisted session");
            }
            return Err(err);
        }

        *current = session;
        Ok(())
    }

    /// Drop the session. Always succeeds in memory; storage failures are logged.
    pub fn clear(&self) {
        let mut current = self.lock();
        *current = Session::anonymous();

        if let Err(e) = self.save(&current) {
            tracing::error!(error = %e, "Failed to remove persisted session");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
