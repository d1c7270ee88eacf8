//! Handler for the GitHub contributions proxy (PRD-10).
//!
//! The browser cannot call the contributions API directly (CORS), so this
//! endpoint forwards the upstream JSON unchanged.

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::AppResult;
use crate::extract::Json;
use crate::state::AppState;

/// GET /api/v1/github/:username/contributions
///
/// Fetch the user's contribution calendar from the upstream API and pass
/// the payload through as-is. Any upstream failure surfaces as a 500.
pub async fn get_contributions(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let url = format!("{}/{}", state.config.github_contributions_url, username);

    let data: serde_json::Value = state
        .http
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(Json(data))
}
