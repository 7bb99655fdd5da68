mod chat;
mod config;
mod db;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::cache::JobCache;
use crate::jobs::enrichment::EnrichmentClient;
use crate::jobs::extractor::DiffbotClient;
use crate::jobs::orchestrator::JobSearchService;
use crate::jobs::search_provider::TavilyClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Women's Tech Job Search API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (chat sessions)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Job pipeline: extraction API + cache -> enrichment, search API -> orchestrator
    let cache = Arc::new(JobCache::new(config.job_cache_capacity));
    match config.job_cache_capacity {
        Some(capacity) => info!("Job cache bounded at {capacity} entries"),
        None => info!("Job cache unbounded"),
    }
    let extractor = Arc::new(DiffbotClient::new(
        config.diffbot_api_key.clone(),
        config.diffbot_api_url.clone(),
    ));
    let search = Arc::new(TavilyClient::new(
        config.tavily_api_key.clone(),
        config.tavily_api_url.clone(),
    ));
    let enrichment = EnrichmentClient::new(extractor, cache);
    let jobs = Arc::new(JobSearchService::new(search, enrichment));

    // Build app state
    let state = AppState {
        db,
        llm,
        jobs: jobs.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_allowed_origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN must be a valid header value")?,
        )
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Let in-flight cache warming finish before exiting
    jobs.prefetcher().flush().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, initiating graceful shutdown..."),
        Err(err) => error!("Failed to listen for Ctrl-C signal: {err}"),
    }
}
