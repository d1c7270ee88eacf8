//! Handlers for public profile reads, profile info updates, and slug
//! availability checks (PRD-07).

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use linkify_core::error::CoreError;
use linkify_core::slug::validate_slug;
use linkify_db::models::profile::{UpdateProfileInfo, UserProfile};
use linkify_db::models::social_link::SocialLink;
use linkify_db::repositories::layout_repo::LayoutRepo;
use linkify_db::repositories::profile_repo::ProfileRepo;
use linkify_db::repositories::social_link_repo::SocialLinkRepo;
use linkify_db::repositories::widget_repo::WidgetRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::Json;
use crate::handlers::widgets::WidgetWithLayout;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything a public profile page needs in one payload.
#[derive(Debug, Serialize)]
pub struct PublicProfile {
    pub profile: UserProfile,
    pub social_links: Vec<SocialLink>,
    pub widgets: Vec<WidgetWithLayout>,
}

/// GET /api/v1/profiles/:slug
///
/// Public profile lookup by slug: the profile row, its social links, and
/// its widgets in display order with their stored layout (or `null`).
pub async fn get_profile_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Profile", &slug))?;

    let social_links = SocialLinkRepo::list_for_profile(&state.pool, profile.id).await?;
    let widgets = WidgetRepo::list_for_profile(&state.pool, profile.id).await?;

    let mut layouts: HashMap<String, _> = LayoutRepo::list_for_profile(&state.pool, profile.id)
        .await?
        .into_iter()
        .map(|l| (l.widget_id.clone(), l))
        .collect();

    let widgets = widgets
        .into_iter()
        .map(|widget| {
            let layout = layouts.remove(&widget.id);
            WidgetWithLayout { widget, layout }
        })
        .collect();

    Ok(Json(DataResponse {
        data: PublicProfile {
            profile,
            social_links,
            widgets,
        },
    }))
}

/// PUT /api/v1/user/profile
///
/// Partially update the caller's display name and bio.
pub async fn update_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileInfo>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::update_info(&state.pool, user.user_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user.user_id))?;

    tracing::info!(user_id = user.user_id, "Profile info updated");

    Ok(Json(DataResponse { data: profile }))
}

/// Query parameters for the slug availability check.
#[derive(Debug, Deserialize)]
pub struct CheckSlugQuery {
    pub slug: String,
}

/// Availability verdict for one candidate slug.
#[derive(Debug, Serialize)]
pub struct SlugAvailability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// GET /api/v1/slugs/check?slug=...
///
/// Format-invalid slugs report as unavailable with the validation message;
/// valid ones are checked against existing profiles.
pub async fn check_slug(
    State(state): State<AppState>,
    Query(query): Query<CheckSlugQuery>,
) -> AppResult<impl IntoResponse> {
    if let Err(CoreError::Validation(reason)) = validate_slug(&query.slug) {
        return Ok(Json(SlugAvailability {
            available: false,
            reason: Some(reason),
        }));
    }

    let taken = ProfileRepo::slug_owner(&state.pool, &query.slug)
        .await?
        .is_some();

    Ok(Json(SlugAvailability {
        available: !taken,
        reason: taken.then(|| "This username is already taken".to_string()),
    }))
}
