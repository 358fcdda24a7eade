//! Driven port for persisting the API credential.
//!
//! The store holds exactly one value. Adapters report a missing or blank
//! value as `None` so first-run initialisation stays a domain decision.

use std::sync::{Mutex, PoisonError};

use super::define_port_error;
use crate::domain::Credential;

define_port_error! {
    /// Errors surfaced while reading or writing the stored credential.
    pub enum CredentialStoreError {
        /// The backing storage could not be read or written.
        Io { message: String } =>
            "credential storage failed: {message}",
        /// The stored value could not be decoded.
        Corrupt { message: String } =>
            "stored credential is unreadable: {message}",
    }
}

/// Port for the single persisted API credential.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential, returning `None` when nothing usable is
    /// stored.
    fn read(&self) -> Result<Option<Credential>, CredentialStoreError>;

    /// Replace the stored credential.
    fn write(&self, credential: &Credential) -> Result<(), CredentialStoreError>;
}

/// Process-local store, used for tests and ephemeral sessions.
///
/// # Examples
///
/// ```
/// use scorecard::domain::Credential;
/// use scorecard::domain::ports::{CredentialStore, InMemoryCredentialStore};
///
/// let store = InMemoryCredentialStore::default();
/// assert!(store.read()?.is_none());
/// store.write(&Credential::new("key-1").unwrap())?;
/// assert_eq!(store.read()?.map(|c| c.expose().to_owned()), Some("key-1".to_owned()));
/// # Ok::<(), scorecard::domain::ports::CredentialStoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    value: Mutex<Option<Credential>>,
}

impl InMemoryCredentialStore {
    /// Create a store pre-populated with a credential.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            value: Mutex::new(Some(credential)),
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn read(&self) -> Result<Option<Credential>, CredentialStoreError> {
        Ok(self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn write(&self, credential: &Credential) -> Result<(), CredentialStoreError> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(credential.clone());
        Ok(())
    }
}
