//! Scorecard library modules.
//!
//! Looks up a Farcaster user through the Neynar API and presents their
//! quality score. The crate is laid out hexagonally:
//!
//! - [`domain`] holds validated inputs, the view controller and the ports it
//!   drives.
//! - [`outbound`] implements those ports over HTTP and the filesystem.
//! - [`inbound`] is the command-line surface.
//! - [`config`] loads settings from the environment and config files.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::ScorecardSettings;
