//! Axum route handlers for the chat API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::chat::prompts::{analyze_prompt, career_assistant_prompt, suggest_prompt};
use crate::chat::sessions::{create_session, list_sessions};
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ChatSession};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub messages: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: String,
}

/// POST /api/chat?message=...
pub async fn handle_chat(
    State(state): State<AppState>,
    Query(params): Query<ChatQuery>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = state
        .llm
        .complete(&career_assistant_prompt(&params.message))
        .await
        .map_err(|e| AppError::Llm(format!("chat failed: {e}")))?;

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// POST /api/chat/session
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(session): Json<ChatSession>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session_id = create_session(&state.db, &session).await?;
    Ok(Json(CreateSessionResponse {
        session_id,
        status: "success",
    }))
}

/// GET /api/chat/sessions/:user_id
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SessionSummary>>, AppError> {
    let rows = list_sessions(&state.db, &user_id).await?;
    let sessions = rows
        .into_iter()
        .map(|row| SessionSummary {
            session_id: row.id,
            messages: row.messages,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .collect();
    Ok(Json(sessions))
}

/// POST /api/chat/analyze
///
/// Asks the LLM for skills, interests, matches and next steps found in a conversation.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(history): Json<Vec<ChatMessage>>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let analysis = state
        .llm
        .complete(&analyze_prompt(&history))
        .await
        .map_err(|e| AppError::Llm(format!("conversation analysis failed: {e}")))?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /api/chat/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(history): Json<Vec<ChatMessage>>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let suggestions = state
        .llm
        .complete(&suggest_prompt(&history))
        .await
        .map_err(|e| AppError::Llm(format!("resource suggestion failed: {e}")))?;
    Ok(Json(SuggestionsResponse { suggestions }))
}
