use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health probe.
    pub pool: cinedex_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Movie record service.
    pub movies: MovieService,
}
