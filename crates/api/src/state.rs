use std::sync::Arc;

use crate::config::ServerConfig;

/// State shared across all handlers. Cloned per request; both fields are
/// cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: tourcraft_db::DbPool,
    pub config: Arc<ServerConfig>,
}
