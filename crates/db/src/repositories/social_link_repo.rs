//! Repository for the `social_links` table (PRD-09).

use linkify_core::types::DbId;
use sqlx::PgPool;

use crate::models::social_link::SocialLink;

/// Column list for `social_links` queries.
const SOCIAL_LINK_COLUMNS: &str = "\
    id, profile_id, platform, url, created_at, updated_at";

/// Provides data access for social links.
pub struct SocialLinkRepo;

impl SocialLinkRepo {
    /// List all social links on a profile.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<SocialLink>, sqlx::Error> {
        let query = format!(
            "SELECT {SOCIAL_LINK_COLUMNS} FROM social_links \
             WHERE profile_id = $1 ORDER BY platform"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Find a profile's link for one platform.
    pub async fn find_by_profile_and_platform(
        pool: &PgPool,
        profile_id: DbId,
        platform: &str,
    ) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!(
            "SELECT {SOCIAL_LINK_COLUMNS} FROM social_links \
             WHERE profile_id = $1 AND platform = $2"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(profile_id)
            .bind(platform)
            .fetch_optional(pool)
            .await
    }

    /// Attach a link to a profile.
    ///
    /// A second link for the same platform trips the unique index
    /// `uq_social_links_profile_platform`.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        platform: &str,
        url: &str,
    ) -> Result<SocialLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_links (profile_id, platform, url) \
             VALUES ($1, $2, $3) \
             RETURNING {SOCIAL_LINK_COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(profile_id)
            .bind(platform)
            .bind(url)
            .fetch_one(pool)
            .await
    }

    /// Delete a link, scoped to its owning profile.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, profile_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1 AND profile_id = $2")
            .bind(id)
            .bind(profile_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
