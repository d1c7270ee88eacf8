//! HTTP error type and its JSON wire mapping.
//!
//! Every failure leaving a handler funnels through [`AppError`], which
//! renders the `{ "success": false, "error": ..., "code": ... }` envelope
//! the SPA expects. Server-side causes are logged here and sanitized before
//! they reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkify_core::error::CoreError;
use serde_json::json;

/// Message sent to clients whenever the real cause must stay server-side.
const SANITIZED_MSG: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error; carries its own HTTP semantics.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Query or pool failure from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request-shape problem outside core validation (body parse failures,
    /// unknown enum values).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream contributions API failed or was unreachable.
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Anything else that should read as a 500.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map the error onto `(status, machine code, client message)`.
    ///
    /// 5xx causes are logged at ERROR here, then replaced with
    /// [`SANITIZED_MSG`] so internals never leak into a response body.
    fn envelope_parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_FORMAT", msg.clone()),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Failed to fetch contributions".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    SANITIZED_MSG.to_string(),
                )
            }
        }
    }
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "INVALID_FORMAT", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                SANITIZED_MSG.to_string(),
            )
        }
    }
}

/// `RowNotFound` reads as 404. A PostgreSQL unique violation (code 23505) on
/// one of our `uq_*` constraints reads as 409 and names the constraint.
/// Everything else is a sanitized 500.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        SANITIZED_MSG.to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.envelope_parts();

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
