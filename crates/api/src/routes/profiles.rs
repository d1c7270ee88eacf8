//! Route definitions for profiles and slugs (PRD-07).
//!
//! Three routers are provided:
//! - `public_router()` for profile pages, mounted at `/profiles`
//! - `slug_router()` for availability checks, mounted at `/slugs`
//! - `user_router()` for the caller's own profile, mounted at `/user/profile`

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{layouts, profiles};
use crate::state::AppState;

/// Public profile routes mounted at `/profiles`.
///
/// ```text
/// GET /{slug}         -> get_profile_by_slug
/// GET /{slug}/layout  -> get_profile_layout
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(profiles::get_profile_by_slug))
        .route("/{slug}/layout", get(layouts::get_profile_layout))
}

/// Slug availability routes mounted at `/slugs`.
///
/// ```text
/// GET /check  -> check_slug (?slug=)
/// ```
pub fn slug_router() -> Router<AppState> {
    Router::new().route("/check", get(profiles::check_slug))
}

/// Own-profile routes mounted at `/user/profile`.
///
/// ```text
/// PUT /  -> update_profile
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/", put(profiles::update_profile))
}
