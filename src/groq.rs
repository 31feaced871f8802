//! Client for the Groq chat-completions API (OpenAI-compatible wire format).

use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// A single conversation turn sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Groq API {status}: {body}")]
    Api { status: StatusCode, body: String },
}

pub struct GroqClient {
    http: HttpClient,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> Result<Self, GroqError> {
        let http = HttpClient::builder().build()?;
        Ok(Self {
            http,
            api_key: config.groq_api_key.clone(),
            model: config.groq_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request one completion for `messages` and return the first candidate's
    /// text, or `None` when the API answered without any content. Failures
    /// are returned as-is; the caller decides what the user gets to see.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, GroqError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Api { status, body });
        }

        let completion: ChatResponse = response.json().await?;
        Ok(first_choice_content(completion))
    }
}

fn first_choice_content(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hello!"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "Hi there"}, "finish_reason": "stop"}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_choice_content(response), Some("Hello!".to_owned()));
    }

    #[test]
    fn empty_choice_list_yields_none() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(first_choice_content(response), None);
    }

    #[test]
    fn null_content_yields_none() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_choice_content(response), None);
    }

    #[test]
    fn request_serializes_model_and_messages() {
        let messages = [ChatMessage::user("ping")];
        let request = ChatRequest {
            model: "llama-3.1-8b-instant",
            messages: &messages,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "ping");
    }
}
