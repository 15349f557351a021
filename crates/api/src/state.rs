use std::sync::Arc;

use crate::config::ServerConfig;

/// Application state handed to every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: brewhouse_db::DbPool,
    /// Server configuration (read by the auth extractors and CORS setup).
    pub config: Arc<ServerConfig>,
}
