use std::sync::Arc;

use sqlx::PgPool;

use crate::jobs::orchestrator::JobSearchService;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Search orchestrator; owns the job cache and the prefetch supervisor.
    pub jobs: Arc<JobSearchService>,
}
