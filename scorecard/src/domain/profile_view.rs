//! Display-ready projection of a [`UserRecord`].

use gauge::{ScorePresentation, format_address, format_count, present};
use serde::Serialize;

use crate::domain::UserRecord;

/// Picture shown when the user has none.
pub const PLACEHOLDER_PFP_URL: &str = "https://via.placeholder.com/80";
/// Bio shown when the user has none.
pub const MISSING_BIO: &str = "No bio available";
/// Custody address shown when the payload omits one.
pub const MISSING_ADDRESS: &str = "0x...";

/// Everything the results state displays for one user.
///
/// Every field is already formatted; renderers only lay it out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    /// Normalised score with gauge, tier and interpretation.
    pub score: ScorePresentation,
    /// Display name, falling back to the username.
    pub display_name: String,
    /// Username prefixed with `@`.
    pub handle: String,
    /// Profile picture URL.
    pub pfp_url: String,
    /// Alternative text for the profile picture.
    pub pfp_alt: String,
    /// Farcaster id, if the payload carried one.
    pub fid: Option<u64>,
    /// Bio text.
    pub bio: String,
    /// Follower count with `K`/`M` suffix.
    pub followers: String,
    /// Following count with `K`/`M` suffix.
    pub following: String,
    /// Shortened custody address.
    pub custody_address: String,
    /// Full custody address, shown on demand.
    pub custody_address_full: String,
}

impl ProfileView {
    /// Project a user record into its display form.
    pub fn from_record(record: &UserRecord) -> Self {
        let display_name = record
            .display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(record.username.as_str())
            .to_owned();
        let address = record
            .custody_address
            .as_deref()
            .filter(|address| !address.is_empty())
            .unwrap_or(MISSING_ADDRESS);

        Self {
            score: present(record.score),
            pfp_alt: format!("{display_name}'s profile picture"),
            display_name,
            handle: format!("@{}", record.username),
            pfp_url: non_empty_or(record.pfp_url.as_deref(), PLACEHOLDER_PFP_URL),
            fid: record.fid,
            bio: non_empty_or(record.bio.as_deref(), MISSING_BIO),
            followers: format_count(record.follower_count.unwrap_or_default()),
            following: format_count(record.following_count.unwrap_or_default()),
            custody_address: format_address(address),
            custody_address_full: address.to_owned(),
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}
