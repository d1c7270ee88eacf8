//! Profile models and DTOs (PRD-07).

use linkify_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_profiles` table.
///
/// One per user, created lazily when the user claims a slug during
/// onboarding. `slug` is unique across profiles when set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub slug: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the caller's profile info.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInfo {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

/// DTO for claiming a slug during onboarding.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimSlug {
    pub slug: String,
}
