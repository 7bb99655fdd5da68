//! Axum route handlers for the job search API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::classifier::WOMEN_FRIENDLY_COMPANIES;
use crate::models::job::{JobDetail, SearchQuery, SearchResponse};
use crate::state::AppState;

/// Stand-in for `://` in job URLs passed as a path segment.
const SCHEME_SEPARATOR_ESCAPE: &str = "___";

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub cache_size: usize,
    pub api_version: &'static str,
    pub women_friendly_companies_count: usize,
    pub status: &'static str,
}

/// POST /api/search
///
/// Always answers 200 once the query validates; upstream failures yield an empty result set.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    query.validate().map_err(AppError::Validation)?;
    Ok(Json(state.jobs.search(&query).await))
}

/// GET /api/job/*job_url
///
/// `job_url` carries the posting URL with `___` in place of `://`.
pub async fn handle_job_detail(
    State(state): State<AppState>,
    Path(job_url): Path<String>,
) -> Result<Json<JobDetail>, AppError> {
    let url = decode_job_url(&job_url);
    let detail = state
        .jobs
        .job_detail(&url)
        .await
        .map_err(|e| AppError::NotFound(format!("Job not found or error processing: {e}")))?;
    Ok(Json(detail))
}

/// GET /api/statistics
pub async fn handle_statistics(State(state): State<AppState>) -> Json<StatisticsResponse> {
    Json(StatisticsResponse {
        cache_size: state.jobs.cache().len(),
        api_version: env!("CARGO_PKG_VERSION"),
        women_friendly_companies_count: WOMEN_FRIENDLY_COMPANIES.len(),
        status: "healthy",
    })
}

fn decode_job_url(raw: &str) -> String {
    raw.trim_start_matches('/')
        .replace(SCHEME_SEPARATOR_ESCAPE, "://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_job_url() {
        assert_eq!(
            decode_job_url("https___www.indeed.com/viewjob"),
            "https://www.indeed.com/viewjob"
        );
        assert_eq!(
            decode_job_url("/http___jobs.example.com/a/b"),
            "http://jobs.example.com/a/b"
        );
    }

    #[test]
    fn test_decode_leaves_plain_urls_alone() {
        assert_eq!(
            decode_job_url("https://jobs.example.com/1"),
            "https://jobs.example.com/1"
        );
    }
}
