//! Active API credential backed by a [`CredentialStore`].
//!
//! The session is the only owner of the in-memory credential. Writes go to the
//! store first, so a failed save leaves both copies untouched.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use crate::domain::ports::CredentialStore;
use crate::domain::{Credential, CredentialError};

/// Credential currently used for lookups.
pub struct CredentialSession<S> {
    store: Arc<S>,
    active: RwLock<Credential>,
}

impl<S> CredentialSession<S>
where
    S: CredentialStore,
{
    /// Load the stored credential, persisting `default` when none is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use scorecard::domain::ports::{CredentialStore, InMemoryCredentialStore};
    /// use scorecard::domain::{Credential, CredentialSession};
    ///
    /// let store = Arc::new(InMemoryCredentialStore::default());
    /// let session =
    ///     CredentialSession::load_or_initialize(store.clone(), Credential::builtin_default())?;
    /// assert_eq!(session.current(), Credential::builtin_default());
    /// assert_eq!(store.read()?, Some(Credential::builtin_default()));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_or_initialize(store: Arc<S>, default: Credential) -> Result<Self, CredentialError> {
        let active = match store.read()? {
            Some(stored) => stored,
            None => {
                info!("no stored API key; persisting the built-in default");
                store.write(&default)?;
                default
            }
        };
        Ok(Self {
            store,
            active: RwLock::new(active),
        })
    }

    /// Credential used for the next lookup.
    pub fn current(&self) -> Credential {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate, persist and activate a new credential.
    ///
    /// Blank input fails with [`CredentialError::Validation`] and leaves the
    /// stored credential unchanged.
    pub fn save(&self, raw: &str) -> Result<(), CredentialError> {
        let credential = Credential::new(raw)?;
        self.store.write(&credential)?;
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = credential;
        debug!("API key updated");
        Ok(())
    }
}
