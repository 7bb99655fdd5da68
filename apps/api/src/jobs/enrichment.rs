//! Enrichment client: turns a posting URL into a `JobBasic` (cached) or a `JobDetail`
//! (recomputed every call). Upstream failures degrade to placeholder records.

use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::jobs::cache::JobCache;
use crate::jobs::classifier::is_women_friendly;
use crate::jobs::extractor::{ContentExtractor, ExtractError, ExtractedPage};
use crate::jobs::sections::{split_sections, women_friendly_reasons};
use crate::jobs::skills::extract_skills;
use crate::models::job::{JobBasic, JobDetail, UNKNOWN_COMPANY, UNKNOWN_TITLE};

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("'{0}' is not an absolute http(s) URL")]
    InvalidUrl(String),
}

/// How `EnrichmentClient::fetch` produced its record.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Cached(JobBasic),
    Fetched(JobBasic),
    /// Upstream failed or returned nothing. Not cached, so the next call retries.
    Placeholder(JobBasic),
}

impl FetchOutcome {
    pub fn into_job(self) -> JobBasic {
        match self {
            FetchOutcome::Cached(job) | FetchOutcome::Fetched(job) | FetchOutcome::Placeholder(job) => {
                job
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, FetchOutcome::Placeholder(_))
    }
}

#[derive(Clone)]
pub struct EnrichmentClient {
    extractor: Arc<dyn ContentExtractor>,
    cache: Arc<JobCache>,
}

impl EnrichmentClient {
    pub fn new(extractor: Arc<dyn ContentExtractor>, cache: Arc<JobCache>) -> Self {
        Self { extractor, cache }
    }

    pub fn cache(&self) -> &Arc<JobCache> {
        &self.cache
    }

    /// Cache lookup, then the extraction API on a miss. Only real records are cached.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        if let Some(job) = self.cache.get(url) {
            debug!("Job cache hit for {url}");
            return FetchOutcome::Cached(job);
        }

        match self.extractor.extract(url).await {
            Ok(Some(page)) => {
                let job = build_job_basic(url, &page);
                self.cache.insert(job.clone());
                FetchOutcome::Fetched(job)
            }
            Ok(None) => {
                warn!("No objects found in extraction response for {url}");
                FetchOutcome::Placeholder(JobBasic::placeholder(url))
            }
            Err(ExtractError::Status(status)) => {
                warn!("Non-success response from extraction API: {status} for {url}");
                FetchOutcome::Placeholder(JobBasic::placeholder(url))
            }
            Err(e) => {
                error!("Error fetching job info for {url}: {e}");
                FetchOutcome::Placeholder(JobBasic::placeholder(url))
            }
        }
    }

    pub async fn fetch_basic(&self, url: &str) -> JobBasic {
        self.fetch(url).await.into_job()
    }

    /// Builds the full view of a posting.
    ///
    /// The raw text is fetched again on every call. Any failure at that stage falls back to
    /// the basic record with empty detail fields; only a URL that cannot be requested at
    /// all is an error.
    pub async fn fetch_detail(&self, url: &str) -> Result<JobDetail, DetailError> {
        validate_job_url(url)?;

        let outcome = self.fetch(url).await;
        if outcome.is_placeholder() {
            return Ok(JobDetail::from(outcome.into_job()));
        }
        let basic = outcome.into_job();

        let page = match self.extractor.extract(url).await {
            Ok(Some(page)) => page,
            Ok(None) => {
                warn!("No objects found in extraction response for detail of {url}");
                return Ok(JobDetail::from(basic));
            }
            Err(e) => {
                error!("Error fetching job details for {url}: {e}");
                return Ok(JobDetail::from(basic));
            }
        };

        Ok(build_job_detail(basic, page.text))
    }
}

fn validate_job_url(url: &str) -> Result<(), DetailError> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
        _ => Err(DetailError::InvalidUrl(url.to_string())),
    }
}

/// Maps an extracted page to a `JobBasic`, classifying it and extracting skills from its text.
pub fn build_job_basic(url: &str, page: &ExtractedPage) -> JobBasic {
    let title = page.title.as_deref().unwrap_or(UNKNOWN_TITLE);
    let company = page.publisher.as_deref().unwrap_or(UNKNOWN_COMPANY);
    let text = page.text.as_deref().unwrap_or_default();

    JobBasic {
        title: title.to_string(),
        company: company.to_string(),
        location: page.location.clone(),
        job_type: page.job_type.clone(),
        posting_date: page.date.clone(),
        salary_range: page.salary_range.clone(),
        application_url: url.to_string(),
        is_women_friendly: Some(is_women_friendly(title, company, text)),
        skills: extract_skills(text),
    }
}

fn build_job_detail(basic: JobBasic, text: Option<String>) -> JobDetail {
    let mut detail = JobDetail::from(basic);

    let Some(text) = text else {
        return detail;
    };
    if text.is_empty() {
        detail.description = Some(text);
        return detail;
    }

    let sections = split_sections(&text);
    if detail.basic.is_women_friendly == Some(true) {
        detail.why_women_friendly = women_friendly_reasons(&sections.description);
    }
    detail.description = Some(sections.description);
    detail.qualifications = sections.qualifications;
    detail.benefits = sections.benefits;
    detail
}
