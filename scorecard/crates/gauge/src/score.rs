//! Score normalisation, gauge geometry, colour tiers and interpretations.

use serde::Serialize;

/// Full-scale arc length of the semicircular gauge.
///
/// Roughly the circumference of a radius-40 circle; the undrawn part of the
/// arc is expressed as a dash offset against this length.
pub const ARC_LENGTH: f64 = 251.2;

const NEEDLE_MIN_DEGREES: f64 = -90.0;
const NEEDLE_SWEEP_DEGREES: f64 = 180.0;

/// A user score clamped into `[0, 1]`.
///
/// ## Invariants
/// - The wrapped value is always within `[0, 1]`.
/// - Missing and NaN raw scores normalise to `0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Clamp a raw API score into `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gauge::Score;
    ///
    /// assert_eq!(Score::normalize(1.7).value(), 1.0);
    /// assert_eq!(Score::normalize(-0.3).value(), 0.0);
    /// assert_eq!(Score::normalize(0.42).value(), 0.42);
    /// ```
    #[must_use]
    pub fn normalize(raw: f64) -> Self {
        if raw.is_nan() || raw <= 0.0 {
            Self(0.0)
        } else if raw >= 1.0 {
            Self(1.0)
        } else {
            Self(raw)
        }
    }

    /// Normalise an optional raw score, treating absence as `0`.
    #[must_use]
    pub fn from_raw(raw: Option<f64>) -> Self {
        raw.map_or_else(Self::default, Self::normalize)
    }

    /// Return the clamped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Format the score with exactly two decimal places, rounding halves up.
    ///
    /// # Examples
    ///
    /// ```
    /// use gauge::Score;
    ///
    /// assert_eq!(Score::normalize(0.125).display_text(), "0.13");
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "hundredths are rounded before formatting"
    )]
    pub fn display_text(self) -> String {
        format!("{:.2}", (self.0 * 100.0).round() / 100.0)
    }

    /// Compute the arc offset and needle angle for this score.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "gauge geometry is a linear map over the unit interval"
    )]
    pub fn gauge(self) -> GaugeGeometry {
        GaugeGeometry {
            dash_offset: ARC_LENGTH - self.0 * ARC_LENGTH,
            needle_degrees: NEEDLE_MIN_DEGREES + self.0 * NEEDLE_SWEEP_DEGREES,
        }
    }

    /// Return the colour tier for this score.
    #[must_use]
    pub fn tier(self) -> ScoreTier {
        ScoreTier::for_score(self)
    }

    /// Return the interpretation bucket for this score.
    #[must_use]
    pub fn interpretation(self) -> Interpretation {
        Interpretation::for_score(self)
    }
}

/// Visual state of the semicircular gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeGeometry {
    /// Undrawn arc length, `ARC_LENGTH` at score 0 and `0` at score 1.
    pub dash_offset: f64,
    /// Needle rotation in degrees, from `-90` (score 0) to `90` (score 1).
    pub needle_degrees: f64,
}

/// Two-stop colour gradient used to paint the score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    /// Hex colour at the start of the gradient.
    pub start: &'static str,
    /// Hex colour at the end of the gradient.
    pub end: &'static str,
}

impl Gradient {
    /// Render the gradient as a CSS `linear-gradient` expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use gauge::ScoreTier;
    ///
    /// assert_eq!(
    ///     ScoreTier::High.gradient().css(),
    ///     "linear-gradient(135deg, #10B981 0%, #059669 100%)"
    /// );
    /// ```
    #[must_use]
    pub fn css(self) -> String {
        format!(
            "linear-gradient(135deg, {start} 0%, {end} 100%)",
            start = self.start,
            end = self.end
        )
    }
}

/// Colour tier driving the gauge badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// Score of at least `0.7`.
    High,
    /// Score in `[0.4, 0.7)`.
    Medium,
    /// Score below `0.4`.
    Low,
}

impl ScoreTier {
    /// Classify a score, evaluating tiers from high to low.
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            value if value >= 0.7 => Self::High,
            value if value >= 0.4 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Gradient colours for the tier.
    #[must_use]
    pub const fn gradient(self) -> Gradient {
        match self {
            Self::High => Gradient {
                start: "#10B981",
                end: "#059669",
            },
            Self::Medium => Gradient {
                start: "#F59E0B",
                end: "#D97706",
            },
            Self::Low => Gradient {
                start: "#EF4444",
                end: "#DC2626",
            },
        }
    }
}

/// Natural-language reading of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// Score of at least `0.8`.
    Excellent,
    /// Score in `[0.6, 0.8)`.
    Great,
    /// Score in `[0.4, 0.6)`.
    Good,
    /// Score in `[0.2, 0.4)`.
    Fair,
    /// Score below `0.2`.
    Low,
}

impl Interpretation {
    /// Classify a score, evaluating buckets from high to low.
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            value if value >= 0.8 => Self::Excellent,
            value if value >= 0.6 => Self::Great,
            value if value >= 0.4 => Self::Good,
            value if value >= 0.2 => Self::Fair,
            _ => Self::Low,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Great => "great",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Low => "low",
        }
    }

    /// Emoji shown in front of the message.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "🌟",
            Self::Great => "✨",
            Self::Good => "👍",
            Self::Fair => "⚠️",
            Self::Low => "🔍",
        }
    }

    /// Message without the emoji prefix.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! This user has exceptional quality and engagement.",
            Self::Great => "Great! This user shows strong quality and activity.",
            Self::Good => "Good! This user has moderate engagement and quality.",
            Self::Fair => "Fair. This user has limited activity or newer account.",
            Self::Low => "Low score. May indicate new account or limited engagement.",
        }
    }

    /// Message with the emoji prefix.
    #[must_use]
    pub fn text(self) -> String {
        format!("{} {}", self.emoji(), self.message())
    }
}

/// Everything a front end needs to draw one score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePresentation {
    /// Clamped score.
    pub score: Score,
    /// Score formatted to two decimal places.
    pub text: String,
    /// Gauge arc and needle geometry.
    pub gauge: GaugeGeometry,
    /// Colour tier.
    pub tier: ScoreTier,
    /// Badge gradient as CSS.
    pub gradient: String,
    /// Interpretation bucket.
    pub interpretation: Interpretation,
    /// Interpretation message including its emoji prefix.
    pub interpretation_text: String,
}

/// Build the full presentation for an optional raw score.
#[must_use]
pub fn present(raw: Option<f64>) -> ScorePresentation {
    let score = Score::from_raw(raw);
    let tier = score.tier();
    let interpretation = score.interpretation();
    ScorePresentation {
        score,
        text: score.display_text(),
        gauge: score.gauge(),
        tier,
        gradient: tier.gradient().css(),
        interpretation,
        interpretation_text: interpretation.text(),
    }
}
