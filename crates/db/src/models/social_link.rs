//! Social link models and DTOs (PRD-09).

use linkify_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `social_links` table. Unique per (profile, platform).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialLink {
    pub id: DbId,
    pub profile_id: DbId,
    pub platform: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a social link to the caller's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocialLink {
    pub platform: String,
    pub url: String,
}
