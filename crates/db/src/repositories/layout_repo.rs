//! Repository for the `widget_layouts` table (PRD-12).
//!
//! Also hosts [`PgLayoutStore`], the PostgreSQL implementation of the
//! storage port consumed by `linkify_core::layout_update`.

use std::collections::HashSet;

use async_trait::async_trait;
use linkify_core::error::CoreError;
use linkify_core::layout_update::{LayoutItem, LayoutStore};
use linkify_core::types::{DbId, WidgetId};
use linkify_core::widget::WidgetSize;
use sqlx::PgPool;

use crate::models::widget::WidgetLayout;
use crate::DbPool;

/// Column list for `widget_layouts` queries.
const LAYOUT_COLUMNS: &str = "\
    widget_id, x, y, w, h, created_at, updated_at";

/// Provides data access for widget layout rectangles.
pub struct LayoutRepo;

impl LayoutRepo {
    /// Find the saved rectangle for one widget.
    pub async fn find_by_widget_id(
        pool: &PgPool,
        widget_id: &str,
    ) -> Result<Option<WidgetLayout>, sqlx::Error> {
        let query = format!("SELECT {LAYOUT_COLUMNS} FROM widget_layouts WHERE widget_id = $1");
        sqlx::query_as::<_, WidgetLayout>(&query)
            .bind(widget_id)
            .fetch_optional(pool)
            .await
    }

    /// List every saved rectangle for widgets on a profile.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<WidgetLayout>, sqlx::Error> {
        sqlx::query_as::<_, WidgetLayout>(
            "SELECT l.widget_id, l.x, l.y, l.w, l.h, l.created_at, l.updated_at \
             FROM widget_layouts l \
             JOIN widgets w ON w.id = l.widget_id \
             WHERE w.profile_id = $1",
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await
    }

}

// --- Storage port implementation ---

/// PostgreSQL-backed [`LayoutStore`].
pub struct PgLayoutStore {
    pool: DbPool,
}

impl PgLayoutStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LayoutStore for PgLayoutStore {
    async fn widget_ids_for_user(
        &self,
        user_id: DbId,
    ) -> Result<Option<HashSet<WidgetId>>, CoreError> {
        let profile_id: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(user_id, error = %e, "Failed to load profile for layout update");
                    CoreError::Internal(format!("Failed to load profile: {e}"))
                })?;

        let Some(profile_id) = profile_id else {
            return Ok(None);
        };

        let ids: Vec<WidgetId> =
            sqlx::query_scalar("SELECT id FROM widgets WHERE profile_id = $1")
                .bind(profile_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(profile_id, error = %e, "Failed to list widget ids");
                    CoreError::Internal(format!("Failed to list widgets: {e}"))
                })?;

        Ok(Some(ids.into_iter().collect()))
    }

    async fn widget_exists(&self, widget_id: &str) -> Result<bool, CoreError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM widgets WHERE id = $1)")
            .bind(widget_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(widget_id, error = %e, "Failed to check widget existence");
                CoreError::Internal(format!("Failed to check widget: {e}"))
            })
    }

    async fn upsert_layouts(&self, items: &[LayoutItem]) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to begin layout transaction");
            CoreError::Internal(format!("Failed to begin transaction: {e}"))
        })?;

        for item in items {
            sqlx::query(
                "INSERT INTO widget_layouts (widget_id, x, y, w, h) \
                 VALUES ($1, $2, $3, $4, $5) \
                 ON CONFLICT (widget_id) DO UPDATE SET \
                     x = EXCLUDED.x, y = EXCLUDED.y, w = EXCLUDED.w, h = EXCLUDED.h, \
                     updated_at = NOW()",
            )
            .bind(&item.id)
            .bind(item.x)
            .bind(item.y)
            .bind(item.w)
            .bind(item.h)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(widget_id = %item.id, error = %e, "Failed to upsert layout");
                CoreError::Internal(format!("Failed to save layout for widget {}: {e}", item.id))
            })?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to commit layout transaction");
            CoreError::Internal(format!("Failed to commit transaction: {e}"))
        })
    }

    async fn apply_size(
        &self,
        widget_id: &str,
        size: WidgetSize,
        w: i32,
        h: i32,
    ) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!(widget_id, error = %e, "Failed to begin resize transaction");
            CoreError::Internal(format!("Failed to begin transaction: {e}"))
        })?;

        let updated = sqlx::query("UPDATE widgets SET size = $2, updated_at = NOW() WHERE id = $1")
            .bind(widget_id)
            .bind(size.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(widget_id, error = %e, "Failed to update widget size");
                CoreError::Internal(format!("Failed to update widget {widget_id}: {e}"))
            })?;

        // The controller checked ownership already; losing the row to a
        // concurrent delete surfaces as not-found rather than a silent no-op.
        if updated.rows_affected() == 0 {
            return Err(CoreError::not_found("Widget", widget_id));
        }

        sqlx::query(
            "INSERT INTO widget_layouts (widget_id, x, y, w, h) \
             VALUES ($1, 0, 0, $2, $3) \
             ON CONFLICT (widget_id) DO UPDATE SET \
                 w = EXCLUDED.w, h = EXCLUDED.h, updated_at = NOW()",
        )
        .bind(widget_id)
        .bind(w)
        .bind(h)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!(widget_id, error = %e, "Failed to update layout footprint");
            CoreError::Internal(format!("Failed to update layout for widget {widget_id}: {e}"))
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!(widget_id, error = %e, "Failed to commit resize transaction");
            CoreError::Internal(format!("Failed to commit transaction: {e}"))
        })
    }
}
