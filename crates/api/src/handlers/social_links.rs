//! Handlers for social links (PRD-09).
//!
//! Public reads are keyed by user id; writes are scoped to the caller's own
//! profile. GITHUB link reads also surface the username parsed from the
//! stored URL, which is what the contributions calendar renders from.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkify_core::error::CoreError;
use linkify_core::social::{username_from_url, Platform};
use linkify_core::types::DbId;
use linkify_db::models::social_link::{CreateSocialLink, SocialLink};
use linkify_db::repositories::profile_repo::ProfileRepo;
use linkify_db::repositories::social_link_repo::SocialLinkRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public social link read.
#[derive(Debug, Deserialize)]
pub struct PlatformQuery {
    pub platform: Option<String>,
}

/// A social link plus the username parsed from its URL (GITHUB only).
#[derive(Debug, Serialize)]
pub struct SocialLinkWithUsername {
    #[serde(flatten)]
    pub link: SocialLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// GET /api/v1/users/:user_id/social-links?platform=...
///
/// Without `platform`, list every link on the user's profile. With it,
/// return that single link (404 when the user has none for the platform).
pub async fn list_social_links(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(query): Query<PlatformQuery>,
) -> AppResult<Response> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user_id))?;

    let Some(platform_param) = query.platform else {
        let links = SocialLinkRepo::list_for_profile(&state.pool, profile.id).await?;
        return Ok(Json(DataResponse { data: links }).into_response());
    };

    let platform = Platform::from_str_value(&platform_param).map_err(AppError::BadRequest)?;

    let link = SocialLinkRepo::find_by_profile_and_platform(&state.pool, profile.id, platform.as_str())
        .await?
        .ok_or_else(|| CoreError::not_found("Social link", platform.as_str()))?;

    let username = (platform == Platform::Github)
        .then(|| username_from_url(&link.url).map(str::to_string))
        .flatten();

    Ok(Json(DataResponse {
        data: SocialLinkWithUsername { link, username },
    })
    .into_response())
}

/// POST /api/v1/user/social-links
///
/// Attach a link to the caller's profile. One link per platform.
pub async fn create_social_link(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSocialLink>,
) -> AppResult<impl IntoResponse> {
    let platform = Platform::from_str_value(&input.platform).map_err(AppError::BadRequest)?;

    if input.url.trim().is_empty() {
        return Err(AppError::BadRequest("URL must not be empty".into()));
    }

    let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user.user_id))?;

    // A concurrent insert still trips the unique index and maps to the
    // same 409.
    let existing =
        SocialLinkRepo::find_by_profile_and_platform(&state.pool, profile.id, platform.as_str())
            .await?;
    if existing.is_some() {
        return Err(CoreError::Conflict("A link for this platform already exists".into()).into());
    }

    let link =
        SocialLinkRepo::create(&state.pool, profile.id, platform.as_str(), &input.url).await?;

    tracing::info!(
        user_id = user.user_id,
        platform = platform.as_str(),
        "Social link added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// DELETE /api/v1/user/social-links/:id
///
/// Remove one of the caller's social links.
pub async fn delete_social_link(
    user: AuthUser,
    State(state): State<AppState>,
    Path(link_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User profile", user.user_id))?;

    let deleted = SocialLinkRepo::delete(&state.pool, link_id, profile.id).await?;
    if !deleted {
        return Err(CoreError::not_found("Social link", link_id).into());
    }

    tracing::info!(user_id = user.user_id, link_id, "Social link removed");

    Ok(StatusCode::NO_CONTENT)
}
