//! Search orchestrator: query construction → search API → bounded parallel enrichment →
//! aggregation → background prefetch.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use tracing::{error, info, warn};

use crate::jobs::cache::JobCache;
use crate::jobs::enrichment::{DetailError, EnrichmentClient};
use crate::jobs::prefetch::Prefetcher;
use crate::jobs::search_provider::SearchProvider;
use crate::models::job::{JobBasic, JobDetail, SearchQuery, SearchResponse};

/// Upper bound on concurrent enrichment fetches per search.
pub const MAX_CONCURRENT_FETCHES: usize = 10;

const QUERY_PREFIX: &str = "Tech job openings";
const QUERY_SUFFIX: &str = "(Women in Tech) (female-friendly workplace) (diversity inclusion)";

pub struct JobSearchService {
    search: Arc<dyn SearchProvider>,
    enrichment: EnrichmentClient,
    prefetcher: Prefetcher,
}

impl JobSearchService {
    /// Must be called inside a tokio runtime; starts the prefetch supervisor.
    pub fn new(search: Arc<dyn SearchProvider>, enrichment: EnrichmentClient) -> Self {
        let prefetcher = Prefetcher::spawn(enrichment.clone());
        Self {
            search,
            enrichment,
            prefetcher,
        }
    }

    pub fn cache(&self) -> &Arc<JobCache> {
        self.enrichment.cache()
    }

    pub fn prefetcher(&self) -> &Prefetcher {
        &self.prefetcher
    }

    pub async fn job_detail(&self, url: &str) -> Result<JobDetail, DetailError> {
        self.enrichment.fetch_detail(url).await
    }

    /// Runs a search. Never fails: any internal error yields an empty response.
    pub async fn search(&self, query: &SearchQuery) -> SearchResponse {
        let started = Instant::now();

        match self.run_search(query, started).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error in job search: {e:?}");
                SearchResponse::empty(elapsed_ms(started))
            }
        }
    }

    async fn run_search(&self, query: &SearchQuery, started: Instant) -> Result<SearchResponse> {
        let search_text = build_search_query(query);
        info!("Searching for: {search_text}");

        let hits = self.search.search(&search_text).await?;
        if hits.is_empty() {
            warn!("No search results found for query: {search_text}");
            return Ok(SearchResponse::empty(elapsed_ms(started)));
        }
        info!("Found {} search results", hits.len());

        let urls: Vec<String> = hits
            .into_iter()
            .map(|hit| hit.url)
            .take(query.max_results())
            .collect();

        let fetched = self.enrich_all(urls).await;

        let women_friendly_count = fetched
            .iter()
            .filter(|job| job.is_women_friendly == Some(true))
            .count();

        let results: Vec<_> = if query.women_friendly_only() {
            fetched
                .into_iter()
                .filter(|job| job.is_women_friendly == Some(true))
                .collect()
        } else {
            fetched
        };

        let uncached: Vec<String> = results
            .iter()
            .map(|job| job.application_url.clone())
            .filter(|url| !self.cache().contains(url))
            .collect();
        self.prefetcher.schedule(uncached);

        Ok(SearchResponse {
            total_results: results.len(),
            results,
            query_time_ms: elapsed_ms(started),
            women_friendly_count,
        })
    }

    /// Fetches every URL with at most `min(10, urls.len())` in flight. Results come back in
    /// completion order; a fetch task that panics is logged and omitted.
    async fn enrich_all(&self, urls: Vec<String>) -> Vec<JobBasic> {
        let pool_size = MAX_CONCURRENT_FETCHES.min(urls.len()).max(1);

        stream::iter(urls)
            .map(|url| {
                let enrichment = self.enrichment.clone();
                let task_url = url.clone();
                let handle =
                    tokio::spawn(async move { enrichment.fetch_basic(&task_url).await });
                async move { (url, handle.await) }
            })
            .buffer_unordered(pool_size)
            .filter_map(|(url, result)| async move {
                match result {
                    Ok(job) => Some(job),
                    Err(e) => {
                        error!("Error processing {url}: {e}");
                        None
                    }
                }
            })
            .collect()
            .await
    }
}

/// Builds the free-text search string. Segment order matters for relevance ranking.
pub fn build_search_query(query: &SearchQuery) -> String {
    let mut text = format!("{QUERY_PREFIX} {}", query.effective_query());

    if let Some(job_type) = non_blank(&query.job_type) {
        text.push_str(&format!(" {job_type} positions"));
    }
    if let Some(company) = non_blank(&query.company) {
        text.push_str(&format!(" at {company}"));
    }
    if let Some(location) = non_blank(&query.location) {
        text.push_str(&format!(" in {location}"));
    }

    text.push(' ');
    text.push_str(QUERY_SUFFIX);
    text
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
