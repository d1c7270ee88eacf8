//! Widget and widget layout models and DTOs (PRD-02, PRD-12).

use linkify_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `widgets` table.
///
/// `widget_type`, `size` and `content` are stored as written;
/// `linkify_core::content::WidgetContent::from_parts` rebuilds the typed
/// content at the boundary, which is also what guarantees the stored JSON
/// matches the stored type. GITHUB widgets store `content` as SQL NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Widget {
    pub id: String,
    pub profile_id: DbId,
    pub widget_type: String,
    pub size: String,
    pub position: i32,
    pub content: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `widget_layouts` table, one-to-one with `widgets` and
/// dropped in cascade with its widget. Absence means the widget has never
/// been placed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WidgetLayout {
    pub widget_id: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a widget. `content` is the raw JSON for the declared
/// type; validation happens against the typed content enum before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWidget {
    #[serde(rename = "type")]
    pub widget_type: String,
    pub size: String,
    pub content: Option<serde_json::Value>,
}

/// DTO for appending an item to a LIST widget.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListItem {
    pub content: String,
    pub order: Option<i32>,
}
