//! Driven port for fetching one user record by username.
//!
//! The domain owns the error taxonomy so the controller can turn any adapter
//! failure into a user-facing message without knowing about HTTP.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Credential, UserRecord, Username};

define_port_error! {
    /// Errors surfaced while fetching a user record.
    pub enum ProfileSourceError {
        /// The credential was rejected (HTTP 401).
        Unauthorized =>
            "profile source rejected the credential",
        /// No user exists with the requested name (HTTP 404).
        NotFound { username: String } =>
            "profile source has no user named {username}",
        /// Any other non-success status.
        Status { status: u16, status_text: String } =>
            "profile source returned {status} {status_text}",
        /// The request failed before a response arrived, or the body could not
        /// be decoded.
        Transport { message: String } =>
            "profile source transport failed: {message}",
    }
}

/// Port for looking up a single user record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the user named `username`, authenticating with `credential`.
    ///
    /// Implementations issue exactly one request per call and never retry.
    async fn fetch_user(
        &self,
        username: &Username,
        credential: &Credential,
    ) -> Result<UserRecord, ProfileSourceError>;
}

/// Fixture implementation that reports every user as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProfileSource;

#[async_trait]
impl ProfileSource for FixtureProfileSource {
    async fn fetch_user(
        &self,
        username: &Username,
        _credential: &Credential,
    ) -> Result<UserRecord, ProfileSourceError> {
        Err(ProfileSourceError::not_found(username.to_string()))
    }
}
