//! Handlers for widget creation and deletion (PRD-02).
//!
//! Widget content arrives as raw JSON next to a `type` discriminator and is
//! validated through `WidgetContent::from_parts` before anything is written.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use linkify_core::content::WidgetContent;
use linkify_core::error::CoreError;
use linkify_core::widget::{WidgetSize, WidgetType};
use linkify_db::models::widget::{CreateWidget, Widget, WidgetLayout};
use linkify_db::repositories::profile_repo::ProfileRepo;
use linkify_db::repositories::widget_repo::WidgetRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A widget together with its stored layout rectangle, if it has one.
///
/// `layout` is `null` for widgets that have never been placed; the grid
/// generator positions those client-side until the first explicit save.
#[derive(Debug, Serialize)]
pub struct WidgetWithLayout {
    #[serde(flatten)]
    pub widget: Widget,
    pub layout: Option<WidgetLayout>,
}

/// POST /api/v1/user/widgets
///
/// Create a widget on the caller's profile, appended to the display order.
pub async fn create_widget(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWidget>,
) -> AppResult<impl IntoResponse> {
    let widget_type =
        WidgetType::from_str_value(&input.widget_type).map_err(AppError::BadRequest)?;
    let size = WidgetSize::from_str_value(&input.size).map_err(AppError::BadRequest)?;

    // Reject content that does not parse as the declared type before
    // touching the database.
    let content = WidgetContent::from_parts(widget_type, input.content)?;
    let content_value = content.to_value()?;

    let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user.user_id))?;

    let widget = WidgetRepo::create(
        &state.pool,
        profile.id,
        widget_type.as_str(),
        size.as_str(),
        content_value.as_ref(),
    )
    .await?;

    tracing::info!(
        widget_id = %widget.id,
        user_id = user.user_id,
        widget_type = widget_type.as_str(),
        "Widget created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: widget })))
}

/// DELETE /api/v1/user/widgets/:id
///
/// Delete one of the caller's widgets. The layout row cascades with it.
pub async fn delete_widget(
    user: AuthUser,
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let widget = WidgetRepo::find_by_id(&state.pool, &widget_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", &widget_id))?;

    let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user.user_id))?;

    if widget.profile_id != profile.id {
        return Err(CoreError::Forbidden("You do not own this widget".into()).into());
    }

    let deleted = WidgetRepo::delete(&state.pool, &widget_id).await?;
    if !deleted {
        return Err(CoreError::not_found("Widget", &widget_id).into());
    }

    tracing::info!(widget_id = %widget_id, user_id = user.user_id, "Widget deleted");

    Ok(StatusCode::NO_CONTENT)
}
