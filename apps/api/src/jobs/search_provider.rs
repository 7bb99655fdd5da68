//! Web search API seam. `TavilyClient` is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Results requested from the search API per query.
const SEARCH_MAX_RESULTS: u32 = 15;

/// Job boards and women-in-tech communities the search is restricted to.
const INCLUDE_DOMAINS: [&str; 19] = [
    "linkedin.com/jobs/",
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "levels.fyi",
    "internships.com",
    "dice.com",
    "techmothers.co",
    "techcareers.com",
    "angellist.com",
    "naukri.com",
    "powertofly.com",
    "womenwhocode.com",
    "girlgeek.io",
    "remote.co",
    "womenintech.co.uk",
    "remotewoman.com",
    "elpha.com",
    "fairygodboss.com",
];

const EXCLUDE_DOMAINS: [&str; 11] = [
    "reddit.com",
    "quora.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "youtube.com",
    "pinterest.com",
    "wikipedia.org",
    "blogspot.com",
    "medium.com",
    "wordpress.com",
];

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    search_depth: &'a str,
    include_answer: bool,
    include_raw_content: bool,
    include_images: bool,
    include_domains: &'a [&'a str],
    exclude_domains: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Parses a Tavily response body, dropping hits with an empty URL.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchHit>, SearchError> {
    let response: TavilyResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .filter(|hit| !hit.url.trim().is_empty())
        .collect())
}

/// Tavily Search API client.
#[derive(Clone)]
pub struct TavilyClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl TavilyClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let request_body = TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results: SEARCH_MAX_RESULTS,
            search_depth: "advanced",
            include_answer: false,
            include_raw_content: true,
            include_images: false,
            include_domains: &INCLUDE_DOMAINS,
            exclude_domains: &EXCLUDE_DOMAINS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_hits_with_urls() {
        let body = r#"{
            "query": "Tech job openings",
            "results": [
                {"url": "https://www.indeed.com/viewjob?jk=1", "title": "Dev", "content": "...", "score": 0.9},
                {"url": "", "title": "Empty"},
                {"title": "Missing url"},
                {"url": "https://powertofly.com/jobs/2"}
            ]
        }"#;

        let hits = parse_search_response(body).unwrap();
        let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.indeed.com/viewjob?jk=1",
                "https://powertofly.com/jobs/2"
            ]
        );
        assert_eq!(hits[0].title.as_deref(), Some("Dev"));
    }

    #[test]
    fn test_parse_missing_results_is_empty() {
        assert!(parse_search_response("{}").unwrap().is_empty());
    }

    #[test]
    fn test_request_serializes_domain_filters() {
        let request = TavilyRequest {
            api_key: "key",
            query: "q",
            max_results: SEARCH_MAX_RESULTS,
            search_depth: "advanced",
            include_answer: false,
            include_raw_content: true,
            include_images: false,
            include_domains: &INCLUDE_DOMAINS,
            exclude_domains: &EXCLUDE_DOMAINS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_results"], 15);
        assert_eq!(value["include_domains"][0], "linkedin.com/jobs/");
        assert_eq!(value["exclude_domains"].as_array().unwrap().len(), 11);
    }
}
