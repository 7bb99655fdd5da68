// Career-assistant chat: LLM proxy endpoints and stored chat sessions.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod sessions;
