//! Handlers for editing the items of LIST widgets (PRD-03).
//!
//! Items live inside the widget's content JSON, so every mutation is a
//! read-modify-write of that one column. Concurrent edits of the same list
//! are last-write-wins.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use linkify_core::content::{ListContent, ListItemPatch, WidgetContent};
use linkify_core::error::CoreError;
use linkify_core::types::DbId;
use linkify_core::widget::WidgetType;
use linkify_db::models::widget::{CreateListItem, Widget};
use linkify_db::repositories::profile_repo::ProfileRepo;
use linkify_db::repositories::widget_repo::WidgetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load one of the caller's widgets and its typed list content.
///
/// Rejects widgets the caller does not own and widgets of any other type.
async fn load_owned_list(
    state: &AppState,
    user_id: DbId,
    widget_id: &str,
) -> AppResult<(Widget, ListContent)> {
    let widget = WidgetRepo::find_by_id(&state.pool, widget_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", widget_id))?;

    let profile = ProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user_id))?;

    if widget.profile_id != profile.id {
        return Err(CoreError::Forbidden("You do not own this widget".into()).into());
    }

    let widget_type =
        WidgetType::from_str_value(&widget.widget_type).map_err(AppError::InternalError)?;
    if widget_type != WidgetType::List {
        return Err(AppError::BadRequest("Widget is not a list widget".into()));
    }

    let list = match WidgetContent::from_parts(widget_type, widget.content.clone())? {
        WidgetContent::List(list) => list,
        _ => unreachable!("LIST content parses to the list variant"),
    };

    Ok((widget, list))
}

/// Write the modified list back to the widget's content column.
async fn persist_list(state: &AppState, widget_id: &str, list: ListContent) -> AppResult<()> {
    let value = WidgetContent::List(list).to_value()?;
    WidgetRepo::update_content(&state.pool, widget_id, value.as_ref())
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", widget_id))?;
    Ok(())
}

/// POST /api/v1/widgets/:id/list/items
///
/// Append an item to a LIST widget. Without an explicit `order` the item
/// goes to the end.
pub async fn add_list_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    Json(input): Json<CreateListItem>,
) -> AppResult<impl IntoResponse> {
    let (widget, mut list) = load_owned_list(&state, user.user_id, &widget_id).await?;

    let item = list.add_item(input.content, input.order);
    persist_list(&state, &widget.id, list).await?;

    tracing::info!(
        widget_id = %widget.id,
        item_id = %item.id,
        user_id = user.user_id,
        "List item added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PATCH /api/v1/widgets/:id/list/items/:item_id
///
/// Apply a partial update to one list item.
pub async fn update_list_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path((widget_id, item_id)): Path<(String, String)>,
    Json(patch): Json<ListItemPatch>,
) -> AppResult<impl IntoResponse> {
    let (widget, mut list) = load_owned_list(&state, user.user_id, &widget_id).await?;

    let item = list.update_item(&item_id, patch)?;
    persist_list(&state, &widget.id, list).await?;

    tracing::info!(
        widget_id = %widget.id,
        item_id = %item.id,
        user_id = user.user_id,
        "List item updated",
    );

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/widgets/:id/list/items/:item_id
///
/// Remove one list item.
pub async fn remove_list_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path((widget_id, item_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let (widget, mut list) = load_owned_list(&state, user.user_id, &widget_id).await?;

    list.remove_item(&item_id)?;
    persist_list(&state, &widget.id, list).await?;

    tracing::info!(
        widget_id = %widget.id,
        item_id = %item_id,
        user_id = user.user_id,
        "List item removed",
    );

    Ok(StatusCode::NO_CONTENT)
}
