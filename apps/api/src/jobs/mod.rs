// Job search pipeline: search API -> per-URL enrichment (classification, skills) -> cache.
// Upstream failures degrade to placeholder or empty results; only job detail lookups error.

pub mod cache;
pub mod classifier;
pub mod enrichment;
pub mod extractor;
pub mod handlers;
pub mod orchestrator;
pub mod prefetch;
pub mod search_provider;
pub mod sections;
pub mod skills;

#[cfg(test)]
pub mod fakes;
