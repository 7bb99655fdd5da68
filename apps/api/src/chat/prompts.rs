// Prompt templates for the career-assistant chat features.

use serde::Serialize;

use crate::models::chat::ChatMessage;

/// Career assistant prompt. Replace `{message}` before sending.
pub const CAREER_ASSISTANT_TEMPLATE: &str = r#"
You are a career assistant focused on helping women in tech.
Provide helpful, supportive, and actionable advice.

User message: {message}

Consider:
1. Career development
2. Skill building
3. Job search strategies
4. Work-life balance
5. Networking opportunities
6. Industry trends
7. Salary negotiation
8. Professional growth

Keep responses concise, practical, and encouraging.
"#;

/// Conversation analysis prompt. Replace `{conversation}` before sending.
pub const ANALYZE_TEMPLATE: &str = r#"
Analyze the following conversation and provide:
1. Key skills mentioned
2. Career interests
3. Potential job matches
4. Recommended next steps
5. Areas for improvement

Conversation:
{conversation}
"#;

/// Resource suggestion prompt. Replace `{conversation}` before sending.
pub const SUGGEST_TEMPLATE: &str = r#"
Based on this conversation, suggest:
1. Relevant online courses
2. Books to read
3. Communities to join
4. Skills to develop
5. Networking opportunities

Conversation:
{conversation}
"#;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    role: &'a str,
    content: &'a str,
}

pub fn career_assistant_prompt(message: &str) -> String {
    CAREER_ASSISTANT_TEMPLATE.replace("{message}", message)
}

pub fn analyze_prompt(history: &[ChatMessage]) -> String {
    ANALYZE_TEMPLATE.replace("{conversation}", &render_transcript(history))
}

pub fn suggest_prompt(history: &[ChatMessage]) -> String {
    SUGGEST_TEMPLATE.replace("{conversation}", &render_transcript(history))
}

/// Pretty-printed JSON array of `{role, content}`; timestamps are left out.
fn render_transcript(history: &[ChatMessage]) -> String {
    let lines: Vec<TranscriptLine<'_>> = history
        .iter()
        .map(|m| TranscriptLine {
            role: &m.role,
            content: &m.content,
        })
        .collect();
    serde_json::to_string_pretty(&lines).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn message(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_career_prompt_embeds_message() {
        let prompt = career_assistant_prompt("How do I ask for a raise?");
        assert!(prompt.contains("User message: How do I ask for a raise?"));
        assert!(prompt.contains("women in tech"));
        assert!(!prompt.contains("{message}"));
    }

    #[test]
    fn test_analyze_prompt_renders_transcript_without_timestamps() {
        let history = vec![
            message("user", "I know Python"),
            message("assistant", "Great, try data roles"),
        ];
        let prompt = analyze_prompt(&history);
        assert!(prompt.contains("Key skills mentioned"));
        assert!(prompt.contains("\"role\": \"user\""));
        assert!(prompt.contains("\"content\": \"Great, try data roles\""));
        assert!(!prompt.contains("timestamp"));
    }

    #[test]
    fn test_suggest_prompt_with_empty_history() {
        let prompt = suggest_prompt(&[]);
        assert!(prompt.contains("Relevant online courses"));
        assert!(prompt.contains("Conversation:\n[]"));
    }
}
