use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query used when the caller leaves `query` blank.
pub const DEFAULT_QUERY: &str = "tech jobs for women";
pub const DEFAULT_MAX_RESULTS: usize = 15;
pub const MAX_RESULTS_RANGE: RangeInclusive<i64> = 1..=50;

pub const PLACEHOLDER_TITLE: &str = "Job Listing";
pub const UNKNOWN_TITLE: &str = "Unknown Job";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Summary of a single job posting. Identity is `application_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobBasic {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub posting_date: Option<String>,
    pub salary_range: Option<String>,
    pub application_url: String,
    pub is_women_friendly: Option<bool>,
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

impl JobBasic {
    /// Record returned when the content-extraction API gave us nothing usable.
    /// Never cached.
    pub fn placeholder(url: &str) -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            company: UNKNOWN_COMPANY.to_string(),
            location: None,
            job_type: None,
            posting_date: None,
            salary_range: None,
            application_url: url.to_string(),
            is_women_friendly: None,
            skills: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    /// beginner | intermediate | expert
    pub level: Option<String>,
}

/// Full view of a posting, derived on demand from a `JobBasic` plus the raw posting text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub basic: JobBasic,
    pub description: Option<String>,
    pub qualifications: Vec<String>,
    pub skills_required: Vec<SkillInfo>,
    pub benefits: Vec<String>,
    pub why_women_friendly: Vec<String>,
    pub additional_info: Map<String, Value>,
}

impl From<JobBasic> for JobDetail {
    fn from(basic: JobBasic) -> Self {
        Self {
            basic,
            description: None,
            qualifications: Vec::new(),
            skills_required: Vec::new(),
            benefits: Vec::new(),
            why_women_friendly: Vec::new(),
            additional_info: Map::new(),
        }
    }
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Signed so that negative values reach `validate` instead of failing deserialization.
    #[serde(default)]
    pub max_results: Option<i64>,
    #[serde(default)]
    pub women_friendly_only: Option<bool>,
}

impl SearchQuery {
    /// The user query, falling back to `DEFAULT_QUERY` when blank.
    pub fn effective_query(&self) -> &str {
        if self.query.trim().is_empty() {
            DEFAULT_QUERY
        } else {
            &self.query
        }
    }

    /// Requested result count, clamped into `MAX_RESULTS_RANGE`. Call `validate` first to
    /// reject out-of-range values instead of clamping them.
    pub fn max_results(&self) -> usize {
        self.max_results
            .map(|n| n.clamp(*MAX_RESULTS_RANGE.start(), *MAX_RESULTS_RANGE.end()) as usize)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }

    pub fn women_friendly_only(&self) -> bool {
        self.women_friendly_only.unwrap_or(false)
    }

    /// Rejects a `max_results` outside `MAX_RESULTS_RANGE`.
    pub fn validate(&self) -> Result<(), String> {
        let Some(max) = self.max_results else {
            return Ok(());
        };
        if !MAX_RESULTS_RANGE.contains(&max) {
            return Err(format!(
                "max_results must be between {} and {}, got {max}",
                MAX_RESULTS_RANGE.start(),
                MAX_RESULTS_RANGE.end()
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<JobBasic>,
    pub total_results: usize,
    pub query_time_ms: u64,
    /// Women-friendly jobs among everything fetched, before `women_friendly_only` filtering.
    pub women_friendly_count: usize,
}

impl SearchResponse {
    pub fn empty(query_time_ms: u64) -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
            query_time_ms,
            women_friendly_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_falls_back_to_default() {
        let query = SearchQuery {
            query: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(query.effective_query(), DEFAULT_QUERY);
        assert_eq!(SearchQuery::default().effective_query(), DEFAULT_QUERY);
    }

    #[test]
    fn test_non_blank_query_is_kept_verbatim() {
        let query = SearchQuery {
            query: "rust engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(query.effective_query(), "rust engineer");
    }

    #[test]
    fn test_search_query_defaults_from_empty_body() {
        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.max_results(), 15);
        assert!(!query.women_friendly_only());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_null_max_results_uses_default() {
        let query: SearchQuery = serde_json::from_str(r#"{"max_results": null}"#).unwrap();
        assert_eq!(query.max_results(), 15);
    }

    #[test]
    fn test_max_results_bounds() {
        for (value, ok) in [(-1, false), (0, false), (1, true), (50, true), (51, false)] {
            let query = SearchQuery {
                max_results: Some(value),
                ..Default::default()
            };
            assert_eq!(query.validate().is_ok(), ok, "max_results={value}");
        }
    }

    #[test]
    fn test_negative_max_results_deserializes_then_fails_validation() {
        let query: SearchQuery = serde_json::from_str(r#"{"max_results": -1}"#).unwrap();
        assert_eq!(query.max_results, Some(-1));
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_job_detail_serializes_flat() {
        let detail = JobDetail::from(JobBasic::placeholder("https://jobs.example.com/1"));
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["title"], "Job Listing");
        assert_eq!(value["application_url"], "https://jobs.example.com/1");
        assert_eq!(value["qualifications"], serde_json::json!([]));
        assert_eq!(value["additional_info"], serde_json::json!({}));
    }

    #[test]
    fn test_placeholder_has_no_classification() {
        let job = JobBasic::placeholder("https://jobs.example.com/2");
        assert_eq!(job.company, UNKNOWN_COMPANY);
        assert!(job.is_women_friendly.is_none());
        assert!(job.skills.is_empty());
    }
}
