//! Handlers for the `/student` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::student::{CreateStudent, Student, UpdateStudent};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/student/
///
/// An empty roster answers 204 with no body rather than `[]`; existing
/// clients depend on that.
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let students = state.students.list().await?;
    if students.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(students).into_response())
}

/// GET /api/v1/student/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = state.students.get(id).await?;
    Ok(Json(student))
}

/// POST /api/v1/student/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = state.students.create(&input).await?;
    tracing::info!(
        student_id = student.id,
        email = %student.email,
        "Student created",
    );
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/v1/student/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = state.students.update(id, &input).await?;
    tracing::info!(
        student_id = student.id,
        email = %student.email,
        "Student updated",
    );
    Ok(Json(student))
}

/// DELETE /api/v1/student/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.students.delete(id).await?;
    tracing::info!(student_id = id, "Student deleted");
    Ok(StatusCode::NO_CONTENT)
}
