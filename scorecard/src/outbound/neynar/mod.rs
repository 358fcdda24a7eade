//! Neynar outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `ProfileSource`
//! port against the Neynar Farcaster API.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_NEYNAR_BASE_URL, NeynarHttpSource};
