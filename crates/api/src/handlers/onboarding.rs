//! Handlers for the onboarding slug-claim flow (PRD-07).

use axum::extract::State;
use axum::response::IntoResponse;
use linkify_core::error::CoreError;
use linkify_core::slug::validate_slug;
use linkify_db::models::profile::ClaimSlug;
use linkify_db::repositories::profile_repo::ProfileRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, StatusResponse};
use crate::state::AppState;

/// Whether the caller has completed onboarding.
#[derive(Debug, Serialize)]
pub struct OnboardingStatus {
    pub claimed: bool,
}

/// GET /api/v1/user/onboarding
///
/// Reports whether the caller has claimed a slug yet.
pub async fn onboarding_status(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id).await?;
    let claimed = profile.is_some_and(|p| p.slug.is_some());

    Ok(Json(DataResponse {
        data: OnboardingStatus { claimed },
    }))
}

/// POST /api/v1/user/onboarding/claim
///
/// Claim a slug for the caller, creating the profile row on first claim.
/// Re-claiming one's own slug is a no-op; a slug held by someone else is a
/// conflict.
pub async fn claim_slug(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ClaimSlug>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;

    if let Some(owner) = ProfileRepo::slug_owner(&state.pool, &input.slug).await? {
        if owner != user.user_id {
            return Err(CoreError::Conflict(
                "Slug is already claimed by another user".to_string(),
            )
            .into());
        }
    }

    ProfileRepo::claim_slug(&state.pool, user.user_id, &input.slug).await?;

    tracing::info!(user_id = user.user_id, slug = %input.slug, "Slug claimed");

    Ok(Json(StatusResponse::ok("Slug claimed successfully")))
}
