use dashmap::DashMap;
use tracing::debug;

use crate::models::job::JobBasic;

/// Process-lifetime store of enriched jobs keyed by application URL.
///
/// Entries are never evicted or expired. With a capacity set, new URLs are refused once
/// the cache is full so every present key keeps mapping to the same record.
/// Concurrent first-time inserts of one URL are not deduplicated; the last write wins.
#[derive(Debug, Default)]
pub struct JobCache {
    entries: DashMap<String, JobBasic>,
    capacity: Option<usize>,
}

impl JobCache {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
        }
    }

    pub fn get(&self, url: &str) -> Option<JobBasic> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Stores `job` under its application URL. Returns false if the cache is full.
    pub fn insert(&self, job: JobBasic) -> bool {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity && !self.entries.contains_key(&job.application_url) {
                debug!(
                    "Job cache full ({capacity} entries), not caching {}",
                    job.application_url
                );
                return false;
            }
        }
        debug!("Caching job {}", job.application_url);
        self.entries.insert(job.application_url.clone(), job);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
