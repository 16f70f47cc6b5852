#![allow(dead_code)]


use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fyyur_api::config::{LogFormat, ServerConfig};
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:5000";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

/// POST an `application/x-www-form-urlencoded` body. Repeat a key to send
/// a multi-value field such as `genres`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    send(
        app,
        Method::POST,
        uri,
        Body::from(body),
        Some("application/x-www-form-urlencoded"),
    )
    .await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/venues/create",
        &[
            ("name", name),
            ("city", city),
            ("state", state),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("seeking_talent", "y"),
        ],
    )
    .await;
    assert_eq!(response.status(), 303, "venue fixture should be created");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/artists/create",
        &[
            ("name", name),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
        ],
    )
    .await;
    assert_eq!(response.status(), 303, "artist fixture should be created");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Book a show through the API.
pub async fn create_show(pool: &PgPool, venue_id: i64, artist_id: i64, start_time: &str) {
    let app = build_test_app(pool.clone());
    let venue_id = venue_id.to_string();
    let artist_id = artist_id.to_string();
    let response = post_form(
        app,
        "/shows/create",
        &[
            ("venue_id", venue_id.as_str()),
            ("artist_id", artist_id.as_str()),
            ("start_time", start_time),
        ],
    )
    .await;
    assert_eq!(response.status(), 303, "show fixture should be created");
}
