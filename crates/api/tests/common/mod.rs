#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use skybook_api::config::ServerConfig;
use skybook_api::router::build_app_router;
use skybook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a request with an arbitrary raw body and optional content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a body and return the parsed JSON, asserting 201.
pub async fn create(pool: &SqlitePool, uri: &str, body: Value) -> Value {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

pub async fn create_airline(pool: &SqlitePool) -> i64 {
    let json = create(
        pool,
        "/airlines",
        serde_json::json!({"name": "Kenya Airways", "country": "Kenya"}),
    )
    .await;
    json["id"].as_i64().unwrap()
}

pub async fn create_flight(pool: &SqlitePool, airline_id: i64) -> i64 {
    let json = create(
        pool,
        "/flights",
        serde_json::json!({
            "airline_id": airline_id,
            "departure_time": "2030-05-01T08:00:00",
            "arrival_time": "2030-05-01T13:00:00",
            "origin": "Nairobi",
            "destination": "London",
        }),
    )
    .await;
    json["id"].as_i64().unwrap()
}

pub async fn create_passenger(pool: &SqlitePool, email: &str) -> i64 {
    let json = create(
        pool,
        "/passengers",
        serde_json::json!({"name": "Rome Otieno", "email": email}),
    )
    .await;
    json["id"].as_i64().unwrap()
}

pub async fn create_booking(pool: &SqlitePool, passenger_id: i64) -> i64 {
    let json = create(
        pool,
        "/bookings",
        serde_json::json!({"passenger_id": passenger_id, "booking_date": "2030-04-01T12:00:00"}),
    )
    .await;
    json["id"].as_i64().unwrap()
}
