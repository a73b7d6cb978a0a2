#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use soundvault_api::auth::jwt::{generate_access_token, JwtConfig};
use soundvault_api::auth::password::hash_password;
use soundvault_api::config::ServerConfig;
use soundvault_api::routes;
use soundvault_api::state::AppState;
use soundvault_db::models::user::{CreateUser, UpdateUser, User};
use soundvault_db::repositories::UserRepo;

/// Plaintext password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

const MULTIPART_BOUNDARY: &str = "soundvault-test-boundary";

/// Token settings shared by the test app and [`token_for`].
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
        access_token_expiry_mins: 30,
    }
}

/// Build a test `ServerConfig` with safe defaults and the given storage root.
pub fn test_config(storage_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_root,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router for tests that never touch image
/// storage.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_storage(pool, &std::env::temp_dir().join("soundvault-api-tests"))
}

/// Build the full application router with all middleware layers, storing
/// images below `storage_root`.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app_with_storage(pool: PgPool, storage_root: &Path) -> Router {
    let state = AppState::new(pool, test_config(storage_root.to_path_buf()));

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PATCH])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Insert a user directly with [`TEST_PASSWORD`], promoting it when
/// `is_admin` is set.
pub async fn create_user(pool: &PgPool, username: &str, is_admin: bool) -> User {
    let input = CreateUser {
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{username}@test.com"),
        gender_id: 1,
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");

    if !is_admin {
        return user;
    }

    let promote = UpdateUser {
        is_admin: Some(true),
        ..Default::default()
    };
    UserRepo::update(pool, user.id, &promote)
        .await
        .expect("promotion should succeed")
        .expect("user should exist")
}

/// Mint a bearer token for `user` with the test secret.
pub fn token_for(user: &User) -> String {
    let config = test_jwt_config();
    generate_access_token(
        &user.username,
        user.id,
        user.is_admin,
        config.access_token_ttl(),
        &config,
    )
    .expect("token generation should succeed")
}

/// Create a user and return it together with a valid token.
pub async fn user_with_token(pool: &PgPool, username: &str, is_admin: bool) -> (User, String) {
    let user = create_user(pool, username, is_admin).await;
    let token = token_for(&user);
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, &body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), &body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, Some(token), &body)).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a multipart form with a single `file` field.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    token: &str,
    filename: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
