mod common;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use blogr::api::handlers::{login_handler, me_handler, profile_image_handler, register_handler};
use blogr::api::middleware::auth;
use serde_json::json;

fn make_server(ctx: &common::TestContext) -> TestServer {
    let protected = Router::new()
        .route("/api/auth/me", get(me_handler))
        .route("/api/auth/me/profile-image", put(profile_image_handler))
        .route_layer(middleware::from_fn_with_state(
            ctx.state.clone(),
            auth::layer,
        ));

    let app = Router::new()
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .merge(protected)
        .with_state(ctx.state.clone());

    TestServer::new(app).unwrap()
}

// ─── REGISTER ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_success() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123",
            "confirm": "secret123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_register_sets_session_cookie() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123",
            "confirm": "secret123"
        }))
        .await;

    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();

    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_register_never_leaks_password_hash() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123",
            "confirm": "secret123"
        }))
        .await;

    let body = response.text();
    assert!(!body.contains("password"));
    assert!(!body.contains("$2")); // bcrypt hashes start with $2
}

#[tokio::test]
async fn test_register_duplicate_conflict() {
    let ctx = common::create_test_context();
    common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "secret123",
            "confirm": "secret123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_password_mismatch_rejected() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123",
            "confirm": "different"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_short_password_rejected() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "abc",
            "confirm": "abc"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

// ─── LOGIN ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let ctx = common::create_test_context();
    common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "secret123"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let ctx = common::create_test_context();
    common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "wrong"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_indistinguishable() {
    let ctx = common::create_test_context();
    common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "wrong" }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "wrong" }))
        .await;

    assert_eq!(
        wrong_password.json::<serde_json::Value>()["error"]["message"],
        unknown_email.json::<serde_json::Value>()["error"]["message"]
    );
}

// ─── SESSION ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_me_with_valid_session() {
    let ctx = common::create_test_context();
    let user = common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let response = server
        .get("/api/auth/me")
        .add_header(
            axum::http::header::COOKIE,
            common::session_cookie(&ctx, user.id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["username"], "alice");
}

#[tokio::test]
async fn test_me_without_session() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server.get("/api/auth/me").await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let ctx = common::create_test_context();
    let user = common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let mut cookie = common::session_cookie(&ctx, user.id);
    cookie.push('0');

    let response = server
        .get("/api/auth/me")
        .add_header(axum::http::header::COOKIE, cookie)
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

// ─── PROFILE IMAGE ───────────────────────────────────────────────────────────

fn avatar_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
            .file_name("avatar.png")
            .mime_type("image/png"),
    )
}

#[tokio::test]
async fn test_profile_image_upload() {
    let ctx = common::create_test_context();
    let user = common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let response = server
        .put("/api/auth/me/profile-image")
        .add_header(
            axum::http::header::COOKIE,
            common::session_cookie(&ctx, user.id),
        )
        .multipart(avatar_form())
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["profile_image"],
        "stored-avatar.png"
    );

    let saved = ctx.images.saved.lock().unwrap();
    assert_eq!(
        saved.as_slice(),
        [(
            blogr::infrastructure::storage::ImageKind::Profile,
            "stored-avatar.png".to_string()
        )]
    );
}

#[tokio::test]
async fn test_profile_image_without_file_part() {
    let ctx = common::create_test_context();
    let user = common::seed_user(&ctx, "alice", "alice@example.com", "secret123").await;
    let server = make_server(&ctx);

    let response = server
        .put("/api/auth/me/profile-image")
        .add_header(
            axum::http::header::COOKIE,
            common::session_cookie(&ctx, user.id),
        )
        .multipart(MultipartForm::new().add_text("caption", "not a file"))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    assert!(ctx.images.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_profile_image_without_session() {
    let ctx = common::create_test_context();
    let server = make_server(&ctx);

    let response = server
        .put("/api/auth/me/profile-image")
        .multipart(avatar_form())
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}
