use std::sync::Arc;

use variations_core::config::StoreEnv;
use variations_core::error::CoreError;
use variations_db::BatchStatementExecutor;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Result of the environment gate, evaluated once at startup and
    /// re-checked on every request.
    pub store_env: Result<Arc<StoreEnv>, CoreError>,
    /// Batch statement executor for the variations table.
    pub executor: Arc<dyn BatchStatementExecutor>,
}

impl AppState {
    /// The environment gate: the store configuration, or the error that
    /// rejects every batch request until it is fixed.
    pub fn store_env(&self) -> Result<&StoreEnv, CoreError> {
        self.store_env.as_deref().map_err(Clone::clone)
    }
}
