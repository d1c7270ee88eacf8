//! Integration tests for the Bearer-token auth extractor.
//!
//! Protected routes must reject missing, malformed, invalid, and expired
//! tokens with a 401 envelope, and must admit a freshly minted token.
//! None of these paths touch the database.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{auth_token, body_json, get_auth, lazy_pool, put_json, put_json_auth};
use jsonwebtoken::{encode, EncodingKey, Header};
use linkify_api::auth::jwt::{validate_token, Claims};

// ---------------------------------------------------------------------------
// Test: missing Authorization header returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_authorization_header_returns_401() {
    let app = common::build_test_app(lazy_pool());

    let body = serde_json::json!({ "layouts": [] });
    let response = put_json(app, "/api/v1/widgets/layout", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

// ---------------------------------------------------------------------------
// Test: non-Bearer Authorization header returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_bearer_authorization_returns_401() {
    let app = common::build_test_app(lazy_pool());

    let response =
        common::get_raw_authorization(app, "/api/v1/user/onboarding", "Basic dXNlcjpwYXNz").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}

// ---------------------------------------------------------------------------
// Test: garbage token returns 401 with the standard message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_token_returns_401() {
    let app = common::build_test_app(lazy_pool());

    let response = get_auth(app, "/api/v1/user/onboarding", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Test: expired token returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expired_token_returns_401() {
    let app = common::build_test_app(lazy_pool());

    // Mint a token that expired well past the validation leeway.
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: 7,
        exp: now - 300,
        iat: now - 600,
        jti: "test-expired".to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .expect("encoding should succeed");

    let response = get_auth(app, "/api/v1/user/onboarding", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: a valid token clears the extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_token_passes_the_extractor() {
    let app = common::build_test_app(lazy_pool());
    let token = auth_token(7);

    // An empty batch is rejected by request validation, which runs after
    // authentication. Seeing that 400 (not 401) proves the token was
    // accepted.
    let body = serde_json::json!({ "layouts": [] });
    let response = put_json_auth(app, "/api/v1/widgets/layout", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid layout data");
}

// ---------------------------------------------------------------------------
// Test: minted tokens round-trip through validation with their claims
// ---------------------------------------------------------------------------

#[test]
fn minted_token_roundtrips_claims() {
    let config = common::test_config();
    let token = auth_token(42);

    let result = validate_token(&token, &config.jwt);
    assert_matches!(result, Ok(Claims { sub: 42, .. }));
}
