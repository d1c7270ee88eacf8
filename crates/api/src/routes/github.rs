//! Route definitions for the GitHub contributions proxy (PRD-10).

use axum::routing::get;
use axum::Router;

use crate::handlers::github;
use crate::state::AppState;

/// Contribution proxy routes mounted at `/github`.
///
/// ```text
/// GET /{username}/contributions  -> get_contributions
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{username}/contributions", get(github::get_contributions))
}
