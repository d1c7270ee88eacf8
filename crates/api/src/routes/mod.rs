pub mod github;
pub mod health;
pub mod onboarding;
pub mod profiles;
pub mod social_links;
pub mod widgets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profiles/{slug}                      public profile (GET)
/// /profiles/{slug}/layout               generated grid layout (GET, ?columns=)
/// /slugs/check                          slug availability (GET, ?slug=)
/// /users/{user_id}/social-links         public links, one by ?platform= (GET)
/// /github/{username}/contributions      contributions proxy (GET)
///
/// /user/onboarding                      claim status (GET)
/// /user/onboarding/claim                claim a slug (POST)
/// /user/profile                         update display name / bio (PUT)
/// /user/widgets                         create widget (POST)
/// /user/widgets/{id}                    delete widget (DELETE)
/// /user/social-links                    add link (POST)
/// /user/social-links/{id}               remove link (DELETE)
///
/// /widgets/layout                       save layout batch (PUT)
/// /widgets/{id}/size                    resize widget (PATCH)
/// /widgets/{id}/list/items              append list item (POST)
/// /widgets/{id}/list/items/{item_id}    update, remove list item (PATCH, DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public profile pages and slug availability (PRD-07).
        .nest("/profiles", profiles::public_router())
        .nest("/slugs", profiles::slug_router())
        // Public social links (PRD-09).
        .nest("/users", social_links::public_router())
        // GitHub contributions proxy (PRD-10).
        .nest("/github", github::router())
        // Onboarding and profile info for the authenticated user (PRD-07).
        .nest("/user/onboarding", onboarding::router())
        .nest("/user/profile", profiles::user_router())
        // Widget CRUD for the authenticated user (PRD-02).
        .nest("/user/widgets", widgets::user_router())
        // Social link management for the authenticated user (PRD-09).
        .nest("/user/social-links", social_links::user_router())
        // Widget-scoped layout, size, and list item operations (PRD-03/11/12).
        .nest("/widgets", widgets::widget_router())
}
