//! Inbound adapters that translate user input into controller actions while
//! keeping terminal details at the edge.
//!
//! The command-line surface lives under [`cli`]; [`render`] turns display
//! states into text or JSON.

pub mod cli;
pub mod render;
