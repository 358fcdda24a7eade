//! Lookup input primitive.

use std::fmt;

/// Validation error returned when a search input is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidationError {
    /// Input was missing or blank once trimmed.
    Empty,
}

impl fmt::Display for UsernameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a username"),
        }
    }
}

impl std::error::Error for UsernameValidationError {}

/// Trimmed, non-empty username to look up.
///
/// No other format rules apply; the API decides whether the name exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a username from raw input.
    pub fn new(raw: &str) -> Result<Self, UsernameValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("    ")]
    fn blank_input_is_rejected(#[case] raw: &str) {
        assert_eq!(Username::new(raw), Err(UsernameValidationError::Empty));
    }

    #[rstest]
    #[case("dwr", "dwr")]
    #[case("  vitalik.eth ", "vitalik.eth")]
    fn input_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
        let username = Username::new(raw).expect("valid username");
        assert_eq!(username.as_ref(), expected);
    }
}
