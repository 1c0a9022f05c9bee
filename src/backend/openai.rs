//! Chat backend for the hosted OpenAI API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::{ChatExchange, ChatRole};

use super::error::BackendError;
use super::{ChatBackend, ChatFragment};

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const PROVIDER: &str = "openai";

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatReply {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiReplyMessage {
    content: Option<String>,
}

/// Chat backend that proxies requests to OpenAI's chat completions API.
pub struct OpenAiBackend {
    client: reqwest::Client,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_key intentionally omitted
        f.debug_struct("OpenAiBackend")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiBackend {
    /// Creates a backend for `model`.
    ///
    /// The key is taken from `api_key` when given, otherwise from the
    /// `OPENAI_API_KEY` environment variable. Fails with
    /// [`BackendError::MissingApiKey`] when neither is available.
    pub fn new(model: impl Into<String>, api_key: Option<String>) -> Result<Self, BackendError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(BackendError::MissingModel { provider: PROVIDER });
        }

        let api_key = match api_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or(BackendError::MissingApiKey {
                    env_var: API_KEY_ENV_VAR,
                })?,
        };

        let client = reqwest::Client::builder()
            .build()
            .map_err(|source| BackendError::Http {
                provider: PROVIDER,
                source,
            })?;

        Ok(Self {
            client,
            model,
            api_key,
        })
    }

    /// Configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(&'a self, exchange: &'a ChatExchange) -> OpenAiChatRequest<'a> {
        OpenAiChatRequest {
            model: &self.model,
            messages: exchange
                .messages()
                .iter()
                .map(|message| OpenAiMessage {
                    role: message.role.as_str(),
                    content: &message.content,
                })
                .collect(),
            temperature: exchange.temperature(),
            max_tokens: exchange.max_tokens(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn chat(&self, exchange: &ChatExchange) -> Result<Vec<ChatFragment>, BackendError> {
        let request = self.request_body(exchange);

        debug!(model = %self.model, "dispatching openai chat request");

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| BackendError::Http {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::UnexpectedStatus {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        let reply: OpenAiChatReply =
            response
                .json()
                .await
                .map_err(|source| BackendError::MalformedReply {
                    provider: PROVIDER,
                    reason: source.to_string(),
                })?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::MalformedReply {
                provider: PROVIDER,
                reason: "reply contained no choices".to_string(),
            })?;

        Ok(vec![ChatFragment {
            role: ChatRole::Assistant,
            content: choice.message.content.unwrap_or_default(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatMessage;

    fn exchange(max_tokens: Option<u32>) -> ChatExchange {
        ChatExchange::with_params(
            vec![
                ChatMessage::system("judge relevance").unwrap(),
                ChatMessage::user("score this paper").unwrap(),
            ],
            0.2,
            max_tokens,
        )
        .unwrap()
    }

    #[test]
    fn test_request_wire_shape() {
        let backend = OpenAiBackend::new("gpt-4o-mini", Some("sk-test".to_string())).unwrap();

        let body = serde_json::to_value(backend.request_body(&exchange(Some(64)))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "judge relevance"},
                    {"role": "user", "content": "score this paper"}
                ],
                "temperature": 0.2,
                "max_tokens": 64
            })
        );
    }

    #[test]
    fn test_request_omits_max_tokens_when_unset() {
        let backend = OpenAiBackend::new("gpt-4o-mini", Some("sk-test".to_string())).unwrap();

        let body = serde_json::to_value(backend.request_body(&exchange(None))).unwrap();
        assert!(body.get("max_tokens").is_none());
        assert_eq!(body["temperature"], serde_json::json!(0.2));
    }
}
