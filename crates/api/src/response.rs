//! Shared response envelope types for API handlers.
//!
//! Read endpoints use a `{ "data": ... }` envelope; imperative endpoints
//! (layout saves, slug claims) use `{ "success": true, "message": ... }`.
//! Use these instead of ad-hoc `serde_json::json!` values to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// `{ "data": T }` envelope for reads and resource-returning writes.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "success": true, "message": ... }` acknowledgement envelope.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    /// Build a success acknowledgement with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
