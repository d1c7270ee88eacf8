//! Layout persistence controller (PRD-12).
//!
//! Validates and ownership-checks drag/resize batches before handing them to
//! a [`LayoutStore`]. The store is passed in explicitly so the controller can
//! be driven by the PostgreSQL implementation in production and an in-memory
//! double in tests. Ordering of the checks is part of the contract: nothing
//! reaches the store until the whole batch is validated, and nothing is
//! written unless every referenced widget belongs to the caller.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::layout::resize_dims;
use crate::types::{DbId, WidgetId};
use crate::widget::WidgetSize;

/// Error message for a batch referencing widgets outside the caller's
/// profile. Part of the wire contract; the editor matches on it.
pub const UNAUTHORIZED_WIDGETS_MSG: &str = "Unauthorized to modify these widgets";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One element of a layout batch. The widget id travels under `i`, the field
/// name the editor's grid library emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    #[serde(rename = "i")]
    pub id: WidgetId,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// ---------------------------------------------------------------------------
// Storage port
// ---------------------------------------------------------------------------

/// Storage operations the layout controllers need.
#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// Ids of every widget on the user's profile, or `None` when the user
    /// has no profile row yet.
    async fn widget_ids_for_user(
        &self,
        user_id: DbId,
    ) -> Result<Option<HashSet<WidgetId>>, CoreError>;

    /// Whether a widget row exists at all, regardless of owner.
    async fn widget_exists(&self, widget_id: &str) -> Result<bool, CoreError>;

    /// Upsert every rectangle in one transaction. A failure must leave no
    /// rows written.
    async fn upsert_layouts(&self, items: &[LayoutItem]) -> Result<(), CoreError>;

    /// Update a widget's size and its layout footprint in one transaction.
    /// Creates the layout row at (0, 0) when missing; an existing row keeps
    /// its position.
    async fn apply_size(
        &self,
        widget_id: &str,
        size: WidgetSize,
        w: i32,
        h: i32,
    ) -> Result<(), CoreError>;
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a layout batch before any I/O: non-empty, non-blank ids,
/// non-negative positions, footprints of at least one cell.
pub fn validate_layout_items(items: &[LayoutItem]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation("Invalid layout data".to_string()));
    }
    for item in items {
        if item.id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Invalid layout format: widget id must be a non-empty string".to_string(),
            ));
        }
        if item.x < 0 || item.y < 0 {
            return Err(CoreError::Validation(format!(
                "Invalid layout format: widget {} has a negative position",
                item.id
            )));
        }
        if item.w < 1 || item.h < 1 {
            return Err(CoreError::Validation(format!(
                "Invalid layout format: widget {} must span at least one cell",
                item.id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Controllers
// ---------------------------------------------------------------------------

/// Persist a drag batch for the caller's widgets.
///
/// Validation and ownership failures return before any write; the write
/// itself is a single transaction, so re-sending the same batch after any
/// error is safe.
pub async fn update_layouts<S: LayoutStore + ?Sized>(
    store: &S,
    user_id: DbId,
    items: &[LayoutItem],
) -> Result<(), CoreError> {
    validate_layout_items(items)?;

    let owned = store
        .widget_ids_for_user(user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user_id))?;

    if items.iter().any(|item| !owned.contains(&item.id)) {
        return Err(CoreError::Forbidden(UNAUTHORIZED_WIDGETS_MSG.to_string()));
    }

    store.upsert_layouts(items).await
}

/// Change a widget's size category and write the matching footprint.
///
/// The stored rectangle's position is never touched; a widget resized before
/// ever being placed gets a layout row at the origin. Returns the `(w, h)`
/// written.
pub async fn update_widget_size<S: LayoutStore + ?Sized>(
    store: &S,
    user_id: DbId,
    widget_id: &str,
    size: WidgetSize,
) -> Result<(i32, i32), CoreError> {
    if widget_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Invalid widget ID".to_string(),
        ));
    }

    let owned = store
        .widget_ids_for_user(user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user_id))?;

    if !owned.contains(widget_id) {
        if store.widget_exists(widget_id).await? {
            return Err(CoreError::Forbidden(UNAUTHORIZED_WIDGETS_MSG.to_string()));
        }
        return Err(CoreError::not_found("Widget", widget_id));
    }

    let (w, h) = resize_dims(size);
    store.apply_size(widget_id, size, w, h).await?;
    Ok((w, h))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory store honoring the all-or-nothing contract of the port.
    #[derive(Default)]
    struct MemStore {
        profiles: HashMap<DbId, HashSet<WidgetId>>,
        rects: Mutex<HashMap<WidgetId, (i32, i32, i32, i32)>>,
        sizes: Mutex<HashMap<WidgetId, WidgetSize>>,
        fail_upserts: bool,
    }

    impl MemStore {
        fn with_user(user_id: DbId, widget_ids: &[&str]) -> Self {
            let mut profiles = HashMap::new();
            profiles.insert(
                user_id,
                widget_ids.iter().map(|id| id.to_string()).collect(),
            );
            Self {
                profiles,
                ..Default::default()
            }
        }

        fn rect(&self, widget_id: &str) -> Option<(i32, i32, i32, i32)> {
            self.rects.lock().unwrap().get(widget_id).copied()
        }

        fn seed_rect(&self, widget_id: &str, rect: (i32, i32, i32, i32)) {
            self.rects.lock().unwrap().insert(widget_id.to_string(), rect);
        }
    }

    #[async_trait]
    impl LayoutStore for MemStore {
        async fn widget_ids_for_user(
            &self,
            user_id: DbId,
        ) -> Result<Option<HashSet<WidgetId>>, CoreError> {
            Ok(self.profiles.get(&user_id).cloned())
        }

        async fn widget_exists(&self, widget_id: &str) -> Result<bool, CoreError> {
            Ok(self
                .profiles
                .values()
                .any(|ids| ids.contains(widget_id)))
        }

        async fn upsert_layouts(&self, items: &[LayoutItem]) -> Result<(), CoreError> {
            if self.fail_upserts {
                return Err(CoreError::Internal("connection reset".to_string()));
            }
            let mut rects = self.rects.lock().unwrap();
            for item in items {
                rects.insert(item.id.clone(), (item.x, item.y, item.w, item.h));
            }
            Ok(())
        }

        async fn apply_size(
            &self,
            widget_id: &str,
            size: WidgetSize,
            w: i32,
            h: i32,
        ) -> Result<(), CoreError> {
            self.sizes
                .lock()
                .unwrap()
                .insert(widget_id.to_string(), size);
            let mut rects = self.rects.lock().unwrap();
            match rects.get_mut(widget_id) {
                Some(rect) => {
                    rect.2 = w;
                    rect.3 = h;
                }
                None => {
                    rects.insert(widget_id.to_string(), (0, 0, w, h));
                }
            }
            Ok(())
        }
    }

    fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> LayoutItem {
        LayoutItem {
            id: id.to_string(),
            x,
            y,
            w,
            h,
        }
    }

    // -- Validation ---------------------------------------------------------

    #[test]
    fn empty_batch_rejected() {
        let result = validate_layout_items(&[]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn blank_id_rejected() {
        let result = validate_layout_items(&[item("  ", 0, 0, 1, 1)]);
        assert!(result.is_err());
    }

    #[test]
    fn negative_position_rejected() {
        assert!(validate_layout_items(&[item("w1", -1, 0, 1, 1)]).is_err());
        assert!(validate_layout_items(&[item("w1", 0, -2, 1, 1)]).is_err());
    }

    #[test]
    fn zero_footprint_rejected() {
        assert!(validate_layout_items(&[item("w1", 0, 0, 0, 1)]).is_err());
        assert!(validate_layout_items(&[item("w1", 0, 0, 1, 0)]).is_err());
    }

    #[test]
    fn well_formed_batch_accepted() {
        let items = vec![item("w1", 0, 0, 1, 1), item("w2", 2, 5, 3, 2)];
        assert!(validate_layout_items(&items).is_ok());
    }

    // -- update_layouts -------------------------------------------------------

    #[tokio::test]
    async fn batch_is_persisted() {
        let store = MemStore::with_user(1, &["w1", "w2"]);
        let items = vec![item("w1", 0, 0, 2, 1), item("w2", 0, 1, 1, 2)];
        update_layouts(&store, 1, &items).await.unwrap();
        assert_eq!(store.rect("w1"), Some((0, 0, 2, 1)));
        assert_eq!(store.rect("w2"), Some((0, 1, 1, 2)));
    }

    #[tokio::test]
    async fn resend_is_idempotent() {
        let store = MemStore::with_user(1, &["w1"]);
        let items = vec![item("w1", 3, 2, 1, 1)];
        update_layouts(&store, 1, &items).await.unwrap();
        let after_first = store.rect("w1");
        update_layouts(&store, 1, &items).await.unwrap();
        assert_eq!(store.rect("w1"), after_first);
    }

    #[tokio::test]
    async fn foreign_widget_forbids_whole_batch() {
        let store = MemStore::with_user(1, &["w1"]);
        // "w9" is not on user 1's profile; the valid "w1" item must not be
        // written either.
        let items = vec![item("w1", 0, 0, 1, 1), item("w9", 1, 0, 1, 1)];
        let result = update_layouts(&store, 1, &items).await;
        match result {
            Err(CoreError::Forbidden(msg)) => {
                assert_eq!(msg, UNAUTHORIZED_WIDGETS_MSG);
            }
            other => panic!("expected Forbidden, got {other:?}"),
        }
        assert_eq!(store.rect("w1"), None);
        assert_eq!(store.rect("w9"), None);
    }

    #[tokio::test]
    async fn unknown_widget_id_is_forbidden_not_missing() {
        // Ownership is checked against the caller's widget set, so an id
        // that exists nowhere still reads as "not yours".
        let store = MemStore::with_user(1, &["w1"]);
        let items = vec![item("ghost", 0, 0, 1, 1)];
        let result = update_layouts(&store, 1, &items).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let store = MemStore::default();
        let items = vec![item("w1", 0, 0, 1, 1)];
        let result = update_layouts(&store, 7, &items).await;
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn invalid_batch_never_reaches_the_store() {
        let store = MemStore::with_user(1, &["w1"]);
        let items = vec![item("w1", 0, 0, 1, 1), item("", 0, 1, 1, 1)];
        let result = update_layouts(&store, 1, &items).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert_eq!(store.rect("w1"), None);
    }

    #[tokio::test]
    async fn store_failure_propagates_with_nothing_written() {
        let store = MemStore {
            fail_upserts: true,
            ..MemStore::with_user(1, &["w1", "w2"])
        };
        let items = vec![item("w1", 0, 0, 1, 1), item("w2", 1, 0, 1, 1)];
        let result = update_layouts(&store, 1, &items).await;
        assert!(matches!(result, Err(CoreError::Internal(_))));
        assert_eq!(store.rect("w1"), None);
        assert_eq!(store.rect("w2"), None);
    }

    // -- update_widget_size ----------------------------------------------------

    #[tokio::test]
    async fn resize_writes_footprint_and_keeps_position() {
        let store = MemStore::with_user(1, &["w1"]);
        store.seed_rect("w1", (1, 2, 3, 1));
        let (w, h) = update_widget_size(&store, 1, "w1", WidgetSize::Wide)
            .await
            .unwrap();
        assert_eq!((w, h), (2, 1));
        assert_eq!(store.rect("w1"), Some((1, 2, 2, 1)));
        assert_eq!(
            store.sizes.lock().unwrap().get("w1"),
            Some(&WidgetSize::Wide)
        );
    }

    #[tokio::test]
    async fn resize_creates_missing_layout_row_at_origin() {
        let store = MemStore::with_user(1, &["w1"]);
        update_widget_size(&store, 1, "w1", WidgetSize::Long)
            .await
            .unwrap();
        assert_eq!(store.rect("w1"), Some((0, 0, 1, 2)));
    }

    #[tokio::test]
    async fn resize_to_large_square() {
        let store = MemStore::with_user(1, &["w1"]);
        store.seed_rect("w1", (2, 0, 1, 1));
        let (w, h) = update_widget_size(&store, 1, "w1", WidgetSize::LargeSquare)
            .await
            .unwrap();
        assert_eq!((w, h), (2, 2));
        assert_eq!(store.rect("w1"), Some((2, 0, 2, 2)));
    }

    #[tokio::test]
    async fn resize_foreign_widget_forbidden() {
        let mut store = MemStore::with_user(1, &["w1"]);
        store
            .profiles
            .insert(2, ["other".to_string()].into_iter().collect());
        let result = update_widget_size(&store, 1, "other", WidgetSize::Wide).await;
        match result {
            Err(CoreError::Forbidden(msg)) => assert_eq!(msg, UNAUTHORIZED_WIDGETS_MSG),
            other => panic!("expected Forbidden, got {other:?}"),
        }
        assert_eq!(store.rect("other"), None);
    }

    #[tokio::test]
    async fn resize_unknown_widget_not_found() {
        let store = MemStore::with_user(1, &["w1"]);
        let result = update_widget_size(&store, 1, "ghost", WidgetSize::Wide).await;
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn resize_without_profile_not_found() {
        let store = MemStore::default();
        let result = update_widget_size(&store, 9, "w1", WidgetSize::Wide).await;
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn resize_blank_widget_id_rejected() {
        let store = MemStore::with_user(1, &["w1"]);
        let result = update_widget_size(&store, 1, " ", WidgetSize::Wide).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn layout_item_wire_shape() {
        let json = r#"{"i":"w1","x":0,"y":2,"w":3,"h":1}"#;
        let item: LayoutItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "w1");
        assert_eq!(item.w, 3);
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["i"], "w1");
        assert!(back.get("id").is_none());
    }
}
