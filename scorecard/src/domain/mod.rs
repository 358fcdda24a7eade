//! Domain primitives, ports and services.
//!
//! Purpose: keep lookup orchestration, credential handling and the display
//! projection independent of HTTP, files and terminals. Adapters plug in
//! through [`ports`].
//!
//! Public surface:
//! - `Credential`, `Username` — validated inputs.
//! - `UserRecord`, `ProfileView` — fetched data and its display form.
//! - `CredentialSession` — the active credential, read and written through a
//!   `CredentialStore`.
//! - `ViewController` — search and credential-editor actions.
//! - `LookupError`, `CredentialError`, `ErrorCode` — user-facing failures.

pub mod ports;

mod credential;
mod credential_session;
mod error;
mod profile_view;
mod user_record;
mod username;
mod view_controller;

pub use self::credential::{Credential, CredentialValidationError, DEFAULT_API_KEY};
pub use self::credential_session::CredentialSession;
pub use self::error::{CredentialError, ErrorCode, LookupError};
pub use self::profile_view::{MISSING_ADDRESS, MISSING_BIO, PLACEHOLDER_PFP_URL, ProfileView};
pub use self::user_record::UserRecord;
pub use self::username::{Username, UsernameValidationError};
pub use self::view_controller::{
    CredentialEditor, EditorStatus, SearchOutcome, ViewController, ViewState, Visibility,
    search_hint,
};
