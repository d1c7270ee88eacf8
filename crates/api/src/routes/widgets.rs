//! Route definitions for widgets (PRD-02, PRD-03, PRD-11, PRD-12).
//!
//! Two routers are provided:
//! - `user_router()` for widget CRUD, mounted at `/user/widgets`
//! - `widget_router()` for widget-scoped operations (layout batch, resize,
//!   list items), mounted at `/widgets`

use axum::routing::{delete, patch, post, put};
use axum::Router;

use crate::handlers::{layouts, list_items, widgets};
use crate::state::AppState;

/// Widget CRUD routes mounted at `/user/widgets`.
///
/// ```text
/// POST   /      -> create_widget
/// DELETE /{id}  -> delete_widget
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(widgets::create_widget))
        .route("/{id}", delete(widgets::delete_widget))
}

/// Widget-scoped operation routes mounted at `/widgets`.
///
/// ```text
/// PUT    /layout                        -> update_layout
/// PATCH  /{id}/size                     -> update_widget_size
/// POST   /{id}/list/items               -> add_list_item
/// PATCH  /{id}/list/items/{item_id}     -> update_list_item
/// DELETE /{id}/list/items/{item_id}     -> remove_list_item
/// ```
pub fn widget_router() -> Router<AppState> {
    Router::new()
        .route("/layout", put(layouts::update_layout))
        .route("/{id}/size", patch(layouts::update_widget_size))
        .route("/{id}/list/items", post(list_items::add_list_item))
        .route(
            "/{id}/list/items/{item_id}",
            patch(list_items::update_list_item).delete(list_items::remove_list_item),
        )
}
