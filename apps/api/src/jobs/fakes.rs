//! In-memory upstream APIs for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::jobs::extractor::{ContentExtractor, ExtractError, ExtractedPage};
use crate::jobs::search_provider::{SearchError, SearchHit, SearchProvider};

type Responder = dyn Fn(&str) -> Result<Option<ExtractedPage>, ExtractError> + Send + Sync;

pub fn page(title: &str, publisher: &str, text: &str) -> ExtractedPage {
    ExtractedPage {
        title: Some(title.to_string()),
        publisher: Some(publisher.to_string()),
        text: Some(text.to_string()),
        ..Default::default()
    }
}

/// Extractor that answers from a closure and records every URL it is asked for.
pub struct FakeExtractor {
    respond: Box<Responder>,
    calls: Mutex<Vec<String>>,
}

impl FakeExtractor {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Result<Option<ExtractedPage>, ExtractError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(page: ExtractedPage) -> Self {
        Self::new(move |_| Ok(Some(page.clone())))
    }

    pub fn empty() -> Self {
        Self::new(|_| Ok(None))
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::new(move |_| Err(ExtractError::Status(status)))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentExtractor for FakeExtractor {
    async fn extract(&self, url: &str) -> Result<Option<ExtractedPage>, ExtractError> {
        self.calls.lock().unwrap().push(url.to_string());
        (self.respond)(url)
    }
}

/// Search API returning a fixed result list (or a failure).
pub struct FakeSearch {
    hits: Option<Vec<SearchHit>>,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn with_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hits = urls
            .into_iter()
            .map(|url| SearchHit {
                url: url.into(),
                title: None,
                content: None,
            })
            .collect();
        Self {
            hits: Some(hits),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            hits: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.hits.clone().ok_or_else(|| SearchError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        })
    }
}

/// Pages keyed by URL; unknown URLs get no objects.
pub fn pages_by_url(pages: HashMap<String, ExtractedPage>) -> FakeExtractor {
    FakeExtractor::new(move |url| Ok(pages.get(url).cloned()))
}
