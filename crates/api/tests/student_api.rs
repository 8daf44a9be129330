//! HTTP-level tests for the `/api/v1/student` endpoints.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`; the
//! store is in-memory so each test controls exactly which students exist.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, body_student, delete, get, post_json, put_json, seeded_store,
    three_students,
};
use roster_db::store::{MemoryStudentStore, StudentStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_all_students_returns_every_student() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = get(app, "/api/v1/student/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[2]["name"], "name3");
}

#[tokio::test]
async fn get_all_students_without_trailing_slash() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = get(app, "/api/v1/student").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn get_all_students_empty_returns_204() {
    let app = common::build_test_app(Arc::new(MemoryStudentStore::new()));
    let response = get(app, "/api/v1/student/").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_student_by_id_returns_student() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = get(app, "/api/v1/student/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "name1");
    assert_eq!(json["email"], "email1@gmail.com");
    assert_eq!(json["date_of_birth"], "2001-01-01");
}

#[tokio::test]
async fn get_student_by_unknown_id_returns_404() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = get(app, "/api/v1/student/100").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Student with id 100 not found");
}

#[tokio::test]
async fn get_student_by_non_numeric_id_returns_400() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = get(app, "/api/v1/student/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_student_returns_201() {
    let store = Arc::new(MemoryStudentStore::new());
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "id": 1,
            "name": "name1",
            "email": "email1@gmail.com",
            "date_of_birth": "2001-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_student(response).await;
    assert_eq!(created.id, 1);
    assert_eq!(store.find_by_id(1).await.unwrap(), Some(created));
}

#[tokio::test]
async fn create_student_assigns_id_when_omitted() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = post_json(
        app,
        "/api/v1/student",
        json!({
            "name": "name100",
            "email": "email100@gmail.com",
            "date_of_birth": "2004-04-04"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 4);
    assert_eq!(json["name"], "name100");
}

#[tokio::test]
async fn create_student_with_taken_email_returns_409() {
    let store = seeded_store(&three_students()).await;
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "name": "name4",
            "email": "email3@gmail.com",
            "date_of_birth": "2004-04-04"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
    assert_eq!(store.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn create_student_with_taken_email_in_other_case_returns_409() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "name": "name4",
            "email": "  Email3@Gmail.com ",
            "date_of_birth": "2004-04-04"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_student_with_taken_email_and_blank_name_returns_409() {
    let store = seeded_store(&three_students()).await;
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "name": "   ",
            "email": "email3@gmail.com",
            "date_of_birth": "2004-04-04"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(store.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn create_student_with_taken_email_and_future_birth_date_returns_409() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "name": "name4",
            "email": "email3@gmail.com",
            "date_of_birth": "2999-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn create_student_with_taken_id_returns_409() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "id": 2,
            "name": "name4",
            "email": "email4@gmail.com",
            "date_of_birth": "2004-04-04"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_student_with_invalid_email_returns_400() {
    let app = common::build_test_app(Arc::new(MemoryStudentStore::new()));
    let response = post_json(
        app,
        "/api/v1/student/",
        json!({
            "name": "name4",
            "email": "email4",
            "date_of_birth": "2004-04-04"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_student_missing_field_is_rejected() {
    let store = Arc::new(MemoryStudentStore::new());
    let app = common::build_test_app(store.clone());
    let response = post_json(app, "/api/v1/student/", json!({ "name": "name4" })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.list().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_student_returns_200() {
    let store = seeded_store(&three_students()).await;
    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        "/api/v1/student/1",
        json!({
            "name": "name1.1",
            "email": "email1.1@gmail.com",
            "date_of_birth": "2001-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_student(response).await;
    assert_eq!(updated.name, "name1.1");
    assert_eq!(updated.email, "email1.1@gmail.com");

    let stored = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.email, "email1.1@gmail.com");
}

#[tokio::test]
async fn update_student_partial_body_keeps_other_fields() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = put_json(app, "/api/v1/student/2", json!({ "name": "renamed" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "renamed");
    assert_eq!(json["email"], "email2@gmail.com");
    assert_eq!(json["date_of_birth"], "2002-02-02");
}

#[tokio::test]
async fn update_student_ignores_id_in_body() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = put_json(
        app,
        "/api/v1/student/1",
        json!({ "id": 3, "name": "name1.1" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 1);
}

#[tokio::test]
async fn update_student_with_taken_email_returns_409() {
    let store = seeded_store(&three_students()).await;
    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        "/api/v1/student/1",
        json!({
            "name": "name1.1",
            "email": "email2@gmail.com",
            "date_of_birth": "2001-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let stored = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.name, "name1");
    assert_eq!(stored.email, "email1@gmail.com");
}

#[tokio::test]
async fn update_student_with_malformed_email_returns_400() {
    let store = seeded_store(&three_students()).await;
    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        "/api/v1/student/1",
        json!({
            "name": "name1.1",
            "email": "email1",
            "date_of_birth": "2001-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(store.find_by_id(1).await.unwrap().unwrap().name, "name1");
}

#[tokio::test]
async fn update_student_with_own_email_returns_200() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = put_json(
        app,
        "/api/v1/student/1",
        json!({ "name": "name1.1", "email": "email1@gmail.com" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_unknown_student_returns_404() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = put_json(
        app,
        "/api/v1/student/100",
        json!({
            "id": 100,
            "name": "name1.1",
            "email": "email1.1@gmail.com",
            "date_of_birth": "2001-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_student_returns_204() {
    let store = seeded_store(&three_students()).await;
    let app = common::build_test_app(store.clone());

    let response = delete(app.clone(), "/api/v1/student/2").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let response = get(app, "/api/v1/student/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_unknown_student_returns_404() {
    let app = common::build_test_app(seeded_store(&three_students()).await);
    let response = delete(app, "/api/v1/student/100").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_last_student_makes_list_return_204() {
    let store = seeded_store(&three_students()[..1]).await;
    let app = common::build_test_app(store);

    let response = delete(app.clone(), "/api/v1/student/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/student/").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
