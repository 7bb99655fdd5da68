//! Content-extraction API seam. `DiffbotClient` is the production implementation;
//! tests substitute in-memory extractors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Per-request timeout for the extraction API.
pub const EXTRACT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fields pulled from the first object the extraction API recognized on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPage {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub text: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub date: Option<String>,
    pub salary_range: Option<String>,
}

impl ExtractedPage {
    /// Maps one entry of the `objects` array. Non-string values count as absent.
    pub fn from_object(object: &Value) -> Self {
        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            title: field("title"),
            publisher: field("publisher"),
            text: field("text"),
            location: field("location"),
            job_type: field("jobType"),
            date: field("date"),
            salary_range: field("salaryRange"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    objects: Vec<Value>,
}

/// Parses an analyze response body. `Ok(None)` when it carries no objects.
pub fn parse_analyze_response(body: &str) -> Result<Option<ExtractedPage>, ExtractError> {
    let response: AnalyzeResponse = serde_json::from_str(body)?;
    Ok(response.objects.first().map(ExtractedPage::from_object))
}

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetches and extracts `url`. `Ok(None)` means the API answered but found nothing.
    async fn extract(&self, url: &str) -> Result<Option<ExtractedPage>, ExtractError>;
}

/// Diffbot Analyze API client.
#[derive(Clone)]
pub struct DiffbotClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl DiffbotClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(EXTRACT_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl ContentExtractor for DiffbotClient {
    async fn extract(&self, url: &str) -> Result<Option<ExtractedPage>, ExtractError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("token", self.api_key.as_str()), ("url", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Diffbot returned {} bytes for {url}", body.len());
        parse_analyze_response(&body)
    }
}
