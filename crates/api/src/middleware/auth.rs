//! Request authentication for protected routes.
//!
//! Token issuance (login, OAuth exchange) happens outside this service; the
//! extractor only verifies the HS256 signature and expiry of what the client
//! presents.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use linkify_core::error::CoreError;
use linkify_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller, resolved from the `Authorization` header.
///
/// Listing this extractor in a handler's parameters is what marks the route
/// as protected; a failed extraction short-circuits into a 401 before the
/// handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Internal database id of the caller (the token's `sub` claim).
    pub user_id: DbId,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let Some(token) = header.strip_prefix("Bearer ") else {
            return Err(unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>",
            ));
        };

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
