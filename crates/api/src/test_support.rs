//! Router test helpers backed by an in-memory SQLite database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use caixa_db::migration::{Migrator, MigratorTrait};
use caixa_shared::{DatabaseConfig, LedgerConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::{AppState, create_router};

pub async fn test_state() -> AppState {
    // Every in-memory SQLite connection is its own database
    let mut config = DatabaseConfig::new("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;

    let db = caixa_db::connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    AppState::new(db, LedgerConfig::default())
}

pub async fn test_app() -> Router {
    create_router(test_state().await)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("body should be JSON")
    }

    pub fn assert_redirect_home(&self) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some("/"));
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let header_text = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let location = header_text(header::LOCATION);
    let content_type = header_text(header::CONTENT_TYPE);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        location,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
