//! Handlers for the grid layout engine endpoints (PRD-11, PRD-12).
//!
//! The pure placement generator serves public layout reads; writes go
//! through the ownership-checked update controller in `linkify_core`,
//! backed here by the PostgreSQL store.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use linkify_core::error::CoreError;
use linkify_core::layout::{compute_layout, GridRect, LayoutSlot, DEFAULT_COLUMN_COUNT};
use linkify_core::layout_update::{self, LayoutItem};
use linkify_core::widget::WidgetSize;
use linkify_db::repositories::layout_repo::{LayoutRepo, PgLayoutStore};
use linkify_db::repositories::profile_repo::ProfileRepo;
use linkify_db::repositories::widget_repo::WidgetRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::handlers::widgets::WidgetWithLayout;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, StatusResponse};
use crate::state::AppState;

/// Query parameters for the public layout read.
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    pub columns: Option<i64>,
}

/// GET /api/v1/profiles/:slug/layout?columns=3
///
/// Run the placement generator over the profile's widgets in display order.
/// Saved rectangles are kept verbatim; unplaced widgets are assigned the
/// first free rectangle. Pure read; nothing is persisted.
pub async fn get_profile_layout(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LayoutQuery>,
) -> AppResult<impl IntoResponse> {
    let columns = match query.columns {
        Some(c) if c < 1 => {
            return Err(AppError::BadRequest("columns must be at least 1".into()));
        }
        Some(c) => c as usize,
        None => DEFAULT_COLUMN_COUNT,
    };

    let profile = ProfileRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", &slug))?;

    let widgets = WidgetRepo::list_for_profile(&state.pool, profile.id).await?;
    let saved: HashMap<String, GridRect> = LayoutRepo::list_for_profile(&state.pool, profile.id)
        .await?
        .into_iter()
        .map(|l| {
            (
                l.widget_id,
                GridRect {
                    x: l.x,
                    y: l.y,
                    w: l.w,
                    h: l.h,
                },
            )
        })
        .collect();

    let slots: Vec<LayoutSlot> = widgets
        .into_iter()
        .map(|widget| {
            let size =
                WidgetSize::from_str_value(&widget.size).map_err(AppError::InternalError)?;
            Ok(LayoutSlot {
                saved: saved.get(&widget.id).copied(),
                id: widget.id,
                size,
            })
        })
        .collect::<AppResult<_>>()?;

    let items = compute_layout(&slots, columns);

    Ok(Json(DataResponse { data: items }))
}

/// Request body for the layout batch save.
#[derive(Debug, Deserialize)]
pub struct UpdateLayoutRequest {
    pub layouts: Vec<LayoutItem>,
}

/// PUT /api/v1/widgets/layout
///
/// Persist a batch of layout rectangles for the caller's widgets. The
/// controller validates the batch, checks ownership of every widget, and
/// writes all rows in one transaction.
pub async fn update_layout(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateLayoutRequest>,
) -> AppResult<impl IntoResponse> {
    let store = PgLayoutStore::new(state.pool.clone());
    layout_update::update_layouts(&store, user.user_id, &input.layouts).await?;

    tracing::info!(
        user_id = user.user_id,
        count = input.layouts.len(),
        "Widget layout updated",
    );

    Ok(Json(StatusResponse::ok("Layout updated successfully")))
}

/// Request body for a widget resize.
#[derive(Debug, Deserialize)]
pub struct UpdateSizeRequest {
    pub size: String,
}

/// PATCH /api/v1/widgets/:id/size
///
/// Change a widget's size and its layout footprint in one transaction,
/// then echo the widget with its updated layout.
pub async fn update_widget_size(
    user: AuthUser,
    State(state): State<AppState>,
    Path(widget_id): Path<String>,
    Json(input): Json<UpdateSizeRequest>,
) -> AppResult<impl IntoResponse> {
    let size = WidgetSize::from_str_value(&input.size).map_err(AppError::BadRequest)?;

    let store = PgLayoutStore::new(state.pool.clone());
    layout_update::update_widget_size(&store, user.user_id, &widget_id, size).await?;

    let widget = WidgetRepo::find_by_id(&state.pool, &widget_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Widget", &widget_id))?;
    let layout = LayoutRepo::find_by_widget_id(&state.pool, &widget_id).await?;

    tracing::info!(
        widget_id = %widget_id,
        user_id = user.user_id,
        size = size.as_str(),
        "Widget size updated",
    );

    Ok(Json(DataResponse {
        data: WidgetWithLayout { widget, layout },
    }))
}
