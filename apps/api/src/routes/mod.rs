pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Job search
        .route("/api/search", post(jobs::handle_search))
        .route("/api/job/*job_url", get(jobs::handle_job_detail))
        .route("/api/statistics", get(jobs::handle_statistics))
        // Chat
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/chat/session", post(chat::handle_create_session))
        .route(
            "/api/chat/sessions/:user_id",
            get(chat::handle_list_sessions),
        )
        .route("/api/chat/analyze", post(chat::handle_analyze))
        .route("/api/chat/suggest", post(chat::handle_suggest))
        .with_state(state)
}
