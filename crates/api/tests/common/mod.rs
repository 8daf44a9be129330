#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use roster_db::models::student::{CreateStudent, Student};
use roster_db::store::{MemoryStudentStore, StudentStore};
use tower::ServiceExt;

use roster_api::app::build_app;
use roster_api::config::{ServerConfig, StoreBackend};
use roster_api::service::StudentService;
use roster_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same middleware stack as the binary.
pub fn build_test_app(store: Arc<dyn StudentStore>) -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        students: StudentService::new(store),
    };
    build_app(state).unwrap()
}

/// A fresh in-memory store pre-loaded with `students`.
pub async fn seeded_store(students: &[CreateStudent]) -> Arc<MemoryStudentStore> {
    let store = Arc::new(MemoryStudentStore::new());
    for s in students {
        store.create(s).await.unwrap();
    }
    store
}

pub fn student(id: i64, name: &str, email: &str, dob: &str) -> CreateStudent {
    CreateStudent {
        id: Some(id),
        name: name.to_string(),
        email: email.to_string(),
        date_of_birth: dob.parse().unwrap(),
    }
}

/// The three students every suite starts from.
pub fn three_students() -> Vec<CreateStudent> {
    vec![
        student(1, "name1", "email1@gmail.com", "2001-01-01"),
        student(2, "name2", "email2@gmail.com", "2002-02-02"),
        student(3, "name3", "email3@gmail.com", "2003-03-03"),
    ]
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_student(response: Response<Body>) -> Student {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
