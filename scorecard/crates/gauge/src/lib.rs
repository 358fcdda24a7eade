//! Score presentation primitives shared by Scorecard front ends.
//!
//! A raw user score arrives from the API as an arbitrary real number, or not
//! at all. This crate turns it into everything a front end needs to draw it:
//! a clamped [`Score`], two-decimal display text, gauge geometry, a colour
//! [`ScoreTier`] and a natural-language [`Interpretation`]. It also carries
//! the two small formatters used for profile statistics.
//!
//! Everything here is pure and allocation-light; no I/O happens in this
//! crate.
//!
//! # Examples
//!
//! ```
//! use gauge::{Interpretation, ScoreTier, present};
//!
//! let presentation = present(Some(0.93));
//! assert_eq!(presentation.text, "0.93");
//! assert_eq!(presentation.tier, ScoreTier::High);
//! assert_eq!(presentation.interpretation, Interpretation::Excellent);
//! ```

mod format;
mod score;

pub use format::{format_address, format_count};
pub use score::{
    ARC_LENGTH, GaugeGeometry, Gradient, Interpretation, Score, ScorePresentation, ScoreTier,
    present,
};
