use std::num::NonZeroUsize;

use anyhow::{Context, Result};

const DEFAULT_TAVILY_API_URL: &str = "https://api.tavily.com/search";
const DEFAULT_DIFFBOT_API_URL: &str = "https://api.diffbot.com/v3/analyze";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub tavily_api_key: String,
    pub tavily_api_url: String,
    pub diffbot_api_key: String,
    pub diffbot_api_url: String,
    pub groq_api_key: String,
    pub cors_allowed_origin: String,
    /// Upper bound on cached jobs. `None` keeps every fetched job for the process lifetime.
    pub job_cache_capacity: Option<usize>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            tavily_api_key: require_env("TAVILY_API_KEY")?,
            tavily_api_url: optional_env("TAVILY_API_URL", DEFAULT_TAVILY_API_URL),
            diffbot_api_key: require_env("DIFFBOT_API_KEY")?,
            diffbot_api_url: optional_env("DIFFBOT_API_URL", DEFAULT_DIFFBOT_API_URL),
            groq_api_key: require_env("GROQ_API_KEY")?,
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
            job_cache_capacity: parse_cache_capacity(
                std::env::var("JOB_CACHE_CAPACITY").ok().as_deref(),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_cache_capacity(raw: Option<&str>) -> Result<Option<usize>> {
    let capacity = raw
        .map(|v| v.trim().parse::<NonZeroUsize>())
        .transpose()
        .context("JOB_CACHE_CAPACITY must be a positive integer")?;
    Ok(capacity.map(NonZeroUsize::get))
}
