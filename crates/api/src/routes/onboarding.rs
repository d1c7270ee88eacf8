//! Route definitions for the onboarding flow (PRD-07).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Onboarding routes mounted at `/user/onboarding`.
///
/// ```text
/// GET  /       -> onboarding_status
/// POST /claim  -> claim_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(onboarding::onboarding_status))
        .route("/claim", post(onboarding::claim_slug))
}
