//! Route definitions for the `/student` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Student routes, relative to `/api/v1`.
///
/// The collection answers with and without a trailing slash.
///
/// ```text
/// GET    /student/        -> list
/// POST   /student/        -> create
/// GET    /student/{id}    -> get_by_id
/// PUT    /student/{id}    -> update
/// DELETE /student/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/student", get(student::list).post(student::create))
        .route("/student/", get(student::list).post(student::create))
        .route(
            "/student/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
}
