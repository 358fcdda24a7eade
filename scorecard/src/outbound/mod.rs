//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **neynar**: reqwest-backed `ProfileSource` for the Neynar user lookup.
//! - **credential_file**: cap-std backed `CredentialStore` holding one key
//!   in the state directory.
//!
//! Adapters are thin translators between domain types and the outside world.
//! They contain no business logic.

pub mod credential_file;
pub mod neynar;
