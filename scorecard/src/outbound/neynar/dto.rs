//! DTOs for decoding Neynar user lookup responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain `UserRecord` in one pass. Unknown fields are ignored.

use serde::Deserialize;

use crate::domain::UserRecord;

#[derive(Debug, Deserialize)]
pub(super) struct UserResponseDto {
    pub(super) user: UserDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) username: String,
    pub(super) display_name: Option<String>,
    pub(super) pfp_url: Option<String>,
    pub(super) fid: Option<u64>,
    pub(super) profile: Option<ProfileDto>,
    pub(super) follower_count: Option<u64>,
    pub(super) following_count: Option<u64>,
    pub(super) custody_address: Option<String>,
    pub(super) score: Option<f64>,
    pub(super) experimental: Option<ExperimentalDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileDto {
    pub(super) bio: Option<BioDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BioDto {
    pub(super) text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ExperimentalDto {
    pub(super) neynar_user_score: Option<f64>,
}

impl UserResponseDto {
    pub(super) fn into_domain_record(self) -> UserRecord {
        self.user.into_domain_record()
    }
}

impl UserDto {
    fn into_domain_record(self) -> UserRecord {
        // The experimental score takes precedence whenever the payload carries
        // it, including an explicit zero: presence decides, not truthiness, so
        // `{"score": 0.5, "experimental": {"neynar_user_score": 0.0}}` yields 0.0
        // where a falsy-fallback reader would show 0.5.
        let score = self
            .experimental
            .and_then(|experimental| experimental.neynar_user_score)
            .or(self.score);
        let bio = self
            .profile
            .and_then(|profile| profile.bio)
            .and_then(|bio| bio.text);

        UserRecord {
            username: self.username,
            display_name: self.display_name,
            pfp_url: self.pfp_url,
            fid: self.fid,
            bio,
            follower_count: self.follower_count,
            following_count: self.following_count,
            custody_address: self.custody_address,
            score,
        }
    }
}
