//! Reqwest-backed Neynar profile source adapter.
//!
//! This adapter owns transport details only: request construction, HTTP
//! status mapping, and JSON decoding into the domain user record.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

use super::dto::UserResponseDto;
use crate::domain::ports::{ProfileSource, ProfileSourceError};
use crate::domain::{Credential, UserRecord, Username};

/// Production Neynar API root.
pub const DEFAULT_NEYNAR_BASE_URL: &str = "https://api.neynar.com/v2/farcaster";

const DEFAULT_USER_AGENT: &str = concat!("scorecard/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";
const EXPERIMENTAL_HEADER: &str = "x-neynar-experimental";

/// Profile source that performs one HTTP GET per lookup against Neynar.
pub struct NeynarHttpSource {
    client: Client,
    base_url: Url,
}

impl NeynarHttpSource {
    /// Build an adapter without a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, None)
    }

    /// Build an adapter with an optional whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }
}

#[async_trait]
impl ProfileSource for NeynarHttpSource {
    async fn fetch_user(
        &self,
        username: &Username,
        credential: &Credential,
    ) -> Result<UserRecord, ProfileSourceError> {
        let url = lookup_url(&self.base_url, username)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, credential.expose())
            .header(EXPERIMENTAL_HEADER, "true")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status, username));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_user(body.as_ref())
    }
}

fn lookup_url(base_url: &Url, username: &Username) -> Result<Url, ProfileSourceError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| {
            ProfileSourceError::transport(format!("base URL {base_url} cannot carry a path"))
        })?
        .pop_if_empty()
        .extend(["user", "by_username"]);
    url.query_pairs_mut()
        .clear()
        .append_pair("username", &username.to_string());
    Ok(url)
}

fn parse_user(body: &[u8]) -> Result<UserRecord, ProfileSourceError> {
    let decoded: UserResponseDto = serde_json::from_slice(body).map_err(|error| {
        ProfileSourceError::transport(format!("invalid Neynar JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain_record())
}

fn map_transport_error(error: reqwest::Error) -> ProfileSourceError {
    if error.is_timeout() {
        ProfileSourceError::transport(format!("request timed out: {error}"))
    } else {
        ProfileSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, username: &Username) -> ProfileSourceError {
    match status {
        StatusCode::UNAUTHORIZED => ProfileSourceError::unauthorized(),
        StatusCode::NOT_FOUND => ProfileSourceError::not_found(username.to_string()),
        _ => ProfileSourceError::status(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network Neynar mapping helpers.

    use super::*;
    use rstest::rstest;

    fn username(raw: &str) -> Username {
        Username::new(raw).expect("valid username")
    }

    #[rstest]
    #[case::no_trailing_slash("https://api.neynar.com/v2/farcaster")]
    #[case::trailing_slash("https://api.neynar.com/v2/farcaster/")]
    fn builds_lookup_url_under_base_path(#[case] base: &str) {
        let base = Url::parse(base).expect("valid base");
        let url = lookup_url(&base, &username("dwr")).expect("url builds");
        assert_eq!(
            url.as_str(),
            "https://api.neynar.com/v2/farcaster/user/by_username?username=dwr"
        );
    }

    #[test]
    fn encodes_username_in_query() {
        let base = Url::parse(DEFAULT_NEYNAR_BASE_URL).expect("valid base");
        let url = lookup_url(&base, &username("a&b=c d")).expect("url builds");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("username".to_owned(), "a&b=c d".to_owned())]);
    }

    #[test]
    fn rejects_base_urls_without_paths() {
        let base = Url::parse("mailto:ops@example.test").expect("valid URL");
        let error = lookup_url(&base, &username("dwr")).expect_err("cannot-be-a-base fails");
        assert!(matches!(error, ProfileSourceError::Transport { .. }));
    }

    #[rstest]
    #[case::unauthorized(StatusCode::UNAUTHORIZED, ProfileSourceError::unauthorized())]
    #[case::not_found(StatusCode::NOT_FOUND, ProfileSourceError::not_found("dwr"))]
    #[case::rate_limited(
        StatusCode::TOO_MANY_REQUESTS,
        ProfileSourceError::status(429_u16, "Too Many Requests")
    )]
    #[case::server_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        ProfileSourceError::status(500_u16, "Internal Server Error")
    )]
    fn maps_http_statuses_to_expected_domain_errors(
        #[case] status: StatusCode,
        #[case] expected: ProfileSourceError,
    ) {
        assert_eq!(map_status_error(status, &username("dwr")), expected);
    }

    #[rstest]
    #[case::experimental_wins(
        r#""score": 0.5, "experimental": {"neynar_user_score": 0.93}"#,
        Some(0.93)
    )]
    #[case::experimental_zero_wins(
        r#""score": 0.5, "experimental": {"neynar_user_score": 0.0}"#,
        Some(0.0)
    )]
    #[case::falls_back_to_score(r#""score": 0.5, "experimental": {}"#, Some(0.5))]
    #[case::score_only(r#""score": 0.42"#, Some(0.42))]
    #[case::no_score(r#""fid": 1"#, None)]
    fn resolves_score_precedence(#[case] fields: &str, #[case] expected: Option<f64>) {
        let body = format!(r#"{{"user": {{"username": "dwr", {fields}}}}}"#);
        let record = parse_user(body.as_bytes()).expect("JSON should decode");
        assert_eq!(record.score, expected);
    }

    #[test]
    fn parses_neynar_user_payload() {
        let body = r#"{
            "user": {
                "object": "user",
                "fid": 3,
                "username": "dwr",
                "display_name": "Dan Romero",
                "pfp_url": "https://example.test/dwr.png",
                "custody_address": "0x6b0bda3f2ffed5efc83fa8c024acff1dd45793f1",
                "profile": { "bio": { "text": "Working on Farcaster" } },
                "follower_count": 512000,
                "following_count": 2500,
                "verifications": [],
                "experimental": { "neynar_user_score": 0.99 }
            }
        }"#;

        let record = parse_user(body.as_bytes()).expect("JSON should decode");
        assert_eq!(record.username, "dwr");
        assert_eq!(record.display_name.as_deref(), Some("Dan Romero"));
        assert_eq!(record.fid, Some(3));
        assert_eq!(record.bio.as_deref(), Some("Working on Farcaster"));
        assert_eq!(record.follower_count, Some(512_000));
        assert_eq!(record.following_count, Some(2_500));
        assert_eq!(record.score, Some(0.99));
    }

    #[rstest]
    #[case::not_json("<html>oops</html>")]
    #[case::missing_user(r#"{"users": []}"#)]
    #[case::missing_username(r#"{"user": {"fid": 3}}"#)]
    fn rejects_undecodable_payloads(#[case] body: &str) {
        let error = parse_user(body.as_bytes()).expect_err("decode should fail");
        assert!(
            matches!(error, ProfileSourceError::Transport { .. }),
            "decode failures should map to Transport",
        );
    }
}
