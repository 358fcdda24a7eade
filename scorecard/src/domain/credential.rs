//! API credential primitive.
//!
//! The Neynar API key is opaque: the only rule is that it is not blank once
//! trimmed. The value is zeroised on drop and never appears in `Debug`
//! output.

use std::fmt;

use zeroize::Zeroizing;

/// Credential used when nothing has been stored yet.
pub const DEFAULT_API_KEY: &str = "NEYNAR_API_DOCS";

const MASK_CHAR: char = '•';

/// Validation error returned when an API key input is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Key was missing or blank once trimmed.
    Empty,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter an API key"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Validated API key.
///
/// ## Invariants
/// - The key is trimmed and non-empty.
///
/// # Examples
/// ```
/// use scorecard::domain::Credential;
///
/// let credential = Credential::new("  secret-key ").unwrap();
/// assert_eq!(credential.expose(), "secret-key");
/// assert_eq!(format!("{credential:?}"), "Credential(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    /// Validate and construct a credential from raw input.
    pub fn new(raw: &str) -> Result<Self, CredentialValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CredentialValidationError::Empty);
        }
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Built-in credential used on first run.
    pub fn builtin_default() -> Self {
        Self(Zeroizing::new(DEFAULT_API_KEY.to_owned()))
    }

    /// Plain key value, for request headers and persistence only.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Key with every character replaced by a bullet.
    pub fn masked(&self) -> String {
        mask(self.expose())
    }
}

/// Replace every character of `raw` with a bullet.
pub(crate) fn mask(raw: &str) -> String {
    raw.chars().map(|_| MASK_CHAR).collect()
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
