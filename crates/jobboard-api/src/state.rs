//! Application state.

use std::sync::Arc;

use jobboard_config::ServerConfig;
use jobboard_core::QueryLimits;
use jobboard_store::InMemoryJobRepo;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub job_repo: Arc<InMemoryJobRepo>,
    pub limits: QueryLimits,
}

impl AppState {
    pub fn new(job_repo: Arc<InMemoryJobRepo>, config: &ServerConfig) -> Self {
        Self {
            job_repo,
            limits: config.query_limits(),
        }
    }
}
