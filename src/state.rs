use crate::config::Config;
use crate::db::DbPool;
use std::sync::Arc;

/// Shared per-request state: connection pool plus startup configuration.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<Config>,
}
