//! Request handlers.
//!
//! Each submodule provides async handler functions for one slice of the API.
//! Handlers delegate to `linkify_core` for domain logic and to the
//! repositories in `linkify_db` for data access, mapping errors via
//! [`AppError`](crate::error::AppError).

pub mod github;
pub mod layouts;
pub mod list_items;
pub mod onboarding;
pub mod profiles;
pub mod social_links;
pub mod widgets;
