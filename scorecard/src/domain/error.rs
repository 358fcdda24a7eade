//! Domain-level error types.
//!
//! Display strings are the messages shown to the user. Inbound adapters print
//! them verbatim and may attach the machine-readable [`ErrorCode`].

use serde::Serialize;

use crate::domain::ports::{CredentialStoreError, ProfileSourceError};
use crate::domain::{CredentialValidationError, UsernameValidationError};

const TRANSPORT_FALLBACK: &str = "Failed to fetch user data. Please try again.";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// User input failed validation.
    Validation,
    /// The API rejected the credential.
    Unauthorized,
    /// The requested user does not exist.
    NotFound,
    /// The API answered with another non-success status.
    Api,
    /// The request or response could not be completed.
    Transport,
    /// Local credential storage failed.
    Storage,
}

/// Failure of a username lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Input was rejected before any request was made.
    #[error("{message}")]
    Validation {
        /// Message describing the rejected input.
        message: String,
    },
    /// The API rejected the credential.
    #[error("Invalid API key. Please check your settings.")]
    Auth,
    /// No user exists with the requested name.
    #[error("User \"{username}\" not found. Please check the username and try again.")]
    NotFound {
        /// Username that was looked up.
        username: String,
    },
    /// The API answered with another non-success status.
    #[error("API error: {status} {status_text}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// HTTP reason phrase.
        status_text: String,
    },
    /// Network or decoding failure.
    #[error("{message}")]
    Transport {
        /// Underlying failure description.
        message: String,
    },
}

impl LookupError {
    /// Build a transport error, substituting a generic message for a blank
    /// one.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Transport {
                message: TRANSPORT_FALLBACK.to_owned(),
            };
        }
        Self::Transport { message }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::Validation,
            Self::Auth => ErrorCode::Unauthorized,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Api { .. } => ErrorCode::Api,
            Self::Transport { .. } => ErrorCode::Transport,
        }
    }
}

impl From<UsernameValidationError> for LookupError {
    fn from(error: UsernameValidationError) -> Self {
        Self::Validation {
            message: error.to_string(),
        }
    }
}

impl From<ProfileSourceError> for LookupError {
    fn from(error: ProfileSourceError) -> Self {
        match error {
            ProfileSourceError::Unauthorized => Self::Auth,
            ProfileSourceError::NotFound { username } => Self::NotFound { username },
            ProfileSourceError::Status {
                status,
                status_text,
            } => Self::Api {
                status,
                status_text,
            },
            ProfileSourceError::Transport { message } => Self::transport(message),
        }
    }
}

/// Failure of a credential save or load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// The new key was blank once trimmed.
    #[error("{0}")]
    Validation(#[from] CredentialValidationError),
    /// The key could not be persisted or read back.
    #[error("Failed to save API key: {message}")]
    Storage {
        /// Underlying storage failure.
        message: String,
    },
}

impl CredentialError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::Validation,
            Self::Storage { .. } => ErrorCode::Storage,
        }
    }
}

impl From<CredentialStoreError> for CredentialError {
    fn from(error: CredentialStoreError) -> Self {
        Self::Storage {
            message: error.to_string(),
        }
    }
}
