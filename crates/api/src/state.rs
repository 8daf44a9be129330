use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::StudentService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub students: StudentService,
}
