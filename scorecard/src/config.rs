//! Scorecard configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::Credential;
use crate::outbound::neynar::DEFAULT_NEYNAR_BASE_URL;

const STATE_DIR_NAME: &str = "scorecard";
const FALLBACK_STATE_DIR: &str = ".scorecard";

fn default_state_dir() -> PathBuf {
    dirs::config_dir()
        .map(|base| base.join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STATE_DIR))
}

/// Configuration values for the lookup client and credential storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCORECARD")]
pub struct ScorecardSettings {
    /// Neynar API root; lookups are issued below this path.
    pub api_base_url: Option<String>,
    /// Directory holding the stored credential.
    pub state_dir: Option<PathBuf>,
    /// Credential written on first run when nothing is stored yet.
    pub default_api_key: Option<String>,
    /// Whole-request timeout in seconds. Unset or zero disables it.
    pub request_timeout_secs: Option<u64>,
}

impl ScorecardSettings {
    /// Return the configured API root, falling back to the public Neynar API.
    ///
    /// # Errors
    ///
    /// Returns a parse error when the configured value is not a URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(
            self.api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_NEYNAR_BASE_URL),
        )
    }

    /// Return the configured state directory, falling back to the platform
    /// config directory.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(default_state_dir)
    }

    /// Return the first-run credential. A blank override is ignored.
    pub fn default_api_key(&self) -> Credential {
        self.default_api_key
            .as_deref()
            .and_then(|raw| Credential::new(raw).ok())
            .unwrap_or_else(Credential::builtin_default)
    }

    /// Return the request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for scorecard configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use crate::domain::DEFAULT_API_KEY;

    const VARS: [&str; 4] = [
        "SCORECARD_API_BASE_URL",
        "SCORECARD_STATE_DIR",
        "SCORECARD_DEFAULT_API_KEY",
        "SCORECARD_REQUEST_TIMEOUT_SECS",
    ];

    fn unset() -> ScorecardSettings {
        ScorecardSettings {
            api_base_url: None,
            state_dir: None,
            default_api_key: None,
            request_timeout_secs: None,
        }
    }

    fn load_from_empty_args() -> ScorecardSettings {
        ScorecardSettings::load_from_iter([OsString::from("scorecard")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("default URL parses").as_str(),
            DEFAULT_NEYNAR_BASE_URL
        );
        assert_eq!(settings.state_dir(), default_state_dir());
        assert_eq!(settings.default_api_key().expose(), DEFAULT_API_KEY);
        assert_eq!(settings.request_timeout(), None);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SCORECARD_API_BASE_URL",
                Some("http://127.0.0.1:9000/v2/farcaster".to_owned()),
            ),
            ("SCORECARD_STATE_DIR", Some("/tmp/scorecard-state".to_owned())),
            ("SCORECARD_DEFAULT_API_KEY", Some("team-key".to_owned())),
            ("SCORECARD_REQUEST_TIMEOUT_SECS", Some("15".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("override parses").as_str(),
            "http://127.0.0.1:9000/v2/farcaster"
        );
        assert_eq!(settings.state_dir(), PathBuf::from("/tmp/scorecard-state"));
        assert_eq!(settings.default_api_key().expose(), "team-key");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[rstest]
    #[case::blank_key(Some("   "), DEFAULT_API_KEY)]
    #[case::unset_key(None, DEFAULT_API_KEY)]
    #[case::padded_key(Some("  abc  "), "abc")]
    fn default_api_key_falls_back_when_blank(#[case] raw: Option<&str>, #[case] expected: &str) {
        let settings = ScorecardSettings {
            default_api_key: raw.map(str::to_owned),
            ..unset()
        };
        assert_eq!(settings.default_api_key().expose(), expected);
    }

    #[rstest]
    fn zero_timeout_disables_the_timeout() {
        let settings = ScorecardSettings {
            request_timeout_secs: Some(0),
            ..unset()
        };
        assert_eq!(settings.request_timeout(), None);
    }

    #[rstest]
    fn invalid_base_url_is_reported() {
        let settings = ScorecardSettings {
            api_base_url: Some("not a url".to_owned()),
            ..unset()
        };
        assert!(settings.api_base_url().is_err());
    }
}
