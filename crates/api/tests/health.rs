//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, TEST_ORIGIN};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_degraded_when_pool_closed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "No route for /this-route-does-not-exist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn closed_pool_maps_to_503(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/venues").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/venues/create")
        .header("Origin", TEST_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, TEST_ORIGIN);

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
