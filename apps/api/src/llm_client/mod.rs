/// LLM Client — the single point of entry for all hosted-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the AI provider directly.
/// All LLM interactions MUST go through this module.
///
/// The provider speaks the OpenAI-compatible chat-completions wire format.
/// A failed call is terminal for the request — there is no retry here; the
/// caller surfaces the provider's error text to the user once.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all LLM calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "google/gemini-3-flash-preview";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// The single LLM client shared across all handlers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }

    /// Sends one chat-completion request and returns the textual completion.
    ///
    /// A missing or empty completion is returned as an empty string, not an
    /// error — the parsing layer decides what to do with degenerate output.
    pub async fn call(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        debug!("LLM call succeeded, completion length: {}", content.len());

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are an expert resume writer.",
                },
                ChatMessage {
                    role: "user",
                    content: "Tailor my resume.",
                },
            ],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Tailor my resume.");
    }

    #[test]
    fn test_completion_extraction_from_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "hello"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_missing_choices_defaults_to_empty_completion() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        assert_eq!(content, "");
    }
}
