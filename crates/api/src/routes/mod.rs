pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /student, /student/          list, create
/// /student/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(student::router())
}
