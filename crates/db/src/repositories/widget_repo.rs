//! Repository for the `widgets` table (PRD-02).

use linkify_core::types::DbId;
use sqlx::PgPool;

use crate::models::widget::Widget;

/// Column list for `widgets` queries.
const WIDGET_COLUMNS: &str = "\
    id, profile_id, widget_type, size, position, content, \
    created_at, updated_at";

/// Provides data access for widgets.
pub struct WidgetRepo;

impl WidgetRepo {
    /// List a profile's widgets in display order.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<Widget>, sqlx::Error> {
        let query = format!(
            "SELECT {WIDGET_COLUMNS} FROM widgets \
             WHERE profile_id = $1 ORDER BY position"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Find a single widget by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!("SELECT {WIDGET_COLUMNS} FROM widgets WHERE id = $1");
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a widget at the end of the profile's display order.
    ///
    /// Mints a UUIDv7 id and computes `position` as one past the profile's
    /// current maximum in the same statement, so the first widget lands at
    /// position 0.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        widget_type: &str,
        size: &str,
        content: Option<&serde_json::Value>,
    ) -> Result<Widget, sqlx::Error> {
        let id = uuid::Uuid::now_v7().to_string();
        let query = format!(
            "INSERT INTO widgets (id, profile_id, widget_type, size, position, content) \
             SELECT $1, $2, $3, $4, COALESCE(MAX(position) + 1, 0), $5 \
             FROM widgets WHERE profile_id = $2 \
             RETURNING {WIDGET_COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(&id)
            .bind(profile_id)
            .bind(widget_type)
            .bind(size)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Replace a widget's stored content JSON.
    ///
    /// Returns the updated row, or `None` when the widget is gone.
    pub async fn update_content(
        pool: &PgPool,
        id: &str,
        content: Option<&serde_json::Value>,
    ) -> Result<Option<Widget>, sqlx::Error> {
        let query = format!(
            "UPDATE widgets SET content = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {WIDGET_COLUMNS}"
        );
        sqlx::query_as::<_, Widget>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a widget. Its layout row goes with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM widgets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
