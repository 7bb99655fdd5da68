use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::chat::{ChatHistoryRow, ChatSession};

/// Persists a chat session as one `chat_history` row and returns its id.
pub async fn create_session(pool: &PgPool, session: &ChatSession) -> Result<Uuid, AppError> {
    let id = Uuid::new_v4();
    let messages = serde_json::to_value(&session.messages)
        .map_err(|e| AppError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO chat_history (id, user_id, messages, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(&session.user_id)
    .bind(messages)
    .bind(session.created_at)
    .bind(session.updated_at)
    .execute(pool)
    .await?;

    info!(
        "Stored chat session {id} for user {} ({} messages)",
        session.user_id,
        session.messages.len()
    );
    Ok(id)
}

/// Returns every stored session for a user, oldest first.
pub async fn list_sessions(pool: &PgPool, user_id: &str) -> Result<Vec<ChatHistoryRow>, AppError> {
    let rows = sqlx::query_as::<_, ChatHistoryRow>(
        "SELECT * FROM chat_history WHERE user_id = $1 ORDER BY created_at",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
