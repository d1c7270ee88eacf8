//! Repository for the `user_profiles` table (PRD-07).

use linkify_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{UpdateProfileInfo, UserProfile};

/// Column list for `user_profiles` queries.
const PROFILE_COLUMNS: &str = "\
    id, user_id, slug, display_name, bio, image, \
    created_at, updated_at";

/// Provides data access for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by its owning user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by its public slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE slug = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Owning user of a slug, if anyone holds it. Used for availability
    /// checks and claim-conflict detection.
    pub async fn slug_owner(pool: &PgPool, slug: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT user_id FROM user_profiles WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Claim a slug for a user, creating the profile row on first claim.
    ///
    /// Callers must have already rejected slugs held by other users; a
    /// concurrent claim still trips the unique index on `slug`.
    pub async fn claim_slug(
        pool: &PgPool,
        user_id: DbId,
        slug: &str,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id, slug) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id) \
             DO UPDATE SET slug = EXCLUDED.slug, updated_at = NOW() \
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Partially update a user's profile info.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// when the user has no profile row yet.
    pub async fn update_info(
        pool: &PgPool,
        user_id: DbId,
        dto: &UpdateProfileInfo,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET \
                 display_name = COALESCE($2, display_name), \
                 bio          = COALESCE($3, bio), \
                 updated_at   = NOW() \
             WHERE user_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(&dto.display_name)
            .bind(&dto.bio)
            .fetch_optional(pool)
            .await
    }
}
