//! Route definitions for social links (PRD-09).
//!
//! Two routers are provided:
//! - `public_router()` for reads by user id, mounted at `/users`
//! - `user_router()` for the caller's own links, mounted at `/user/social-links`

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::social_links;
use crate::state::AppState;

/// Public social link routes mounted at `/users`.
///
/// ```text
/// GET /{user_id}/social-links  -> list_social_links (?platform=)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route(
        "/{user_id}/social-links",
        get(social_links::list_social_links),
    )
}

/// Own social link routes mounted at `/user/social-links`.
///
/// ```text
/// POST   /      -> create_social_link
/// DELETE /{id}  -> delete_social_link
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(social_links::create_social_link))
        .route("/{id}", delete(social_links::delete_social_link))
}
