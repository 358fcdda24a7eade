//! User record returned by the profile source.

/// Read-only view of one Farcaster user as returned by the API.
///
/// Only `username` is guaranteed; every other field may be absent from the
/// payload and is filled in by [`crate::domain::ProfileView`] fallbacks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserRecord {
    /// Farcaster username.
    pub username: String,
    /// Display name chosen by the user.
    pub display_name: Option<String>,
    /// Profile picture URL.
    pub pfp_url: Option<String>,
    /// Farcaster id.
    pub fid: Option<u64>,
    /// Profile bio text.
    pub bio: Option<String>,
    /// Number of followers.
    pub follower_count: Option<u64>,
    /// Number of accounts followed.
    pub following_count: Option<u64>,
    /// Custody address of the account.
    pub custody_address: Option<String>,
    /// Raw quality score, already resolved from the payload's score fields.
    pub score: Option<f64>,
}
