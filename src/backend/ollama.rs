//! Chat backend for a locally hosted Ollama server.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::{ChatExchange, ChatRole};

use super::error::BackendError;
use super::{ChatBackend, ChatFragment};

/// Default Ollama endpoint when no host is configured.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const PROVIDER: &str = "ollama";

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Deserialize)]
struct OllamaChatReply {
    message: OllamaReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaReplyMessage {
    content: String,
}

/// Chat backend that talks to a locally hosted Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: reqwest::Client,
    model: String,
    host: String,
}

impl OllamaBackend {
    /// Creates a backend for `model`, served at `host` (default
    /// [`DEFAULT_OLLAMA_URL`]) with `timeout` (default
    /// [`DEFAULT_TIMEOUT_SECS`]).
    pub fn new(
        model: impl Into<String>,
        host: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(BackendError::MissingModel { provider: PROVIDER });
        }

        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| BackendError::Http {
                provider: PROVIDER,
                source,
            })?;

        let host = host
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            model,
            host,
        })
    }

    /// Configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Configured host endpoint (no trailing slash).
    pub fn host(&self) -> &str {
        &self.host
    }

    fn request_body<'a>(&'a self, exchange: &'a ChatExchange) -> OllamaChatRequest<'a> {
        OllamaChatRequest {
            model: &self.model,
            messages: exchange
                .messages()
                .iter()
                .map(|message| OllamaMessage {
                    role: message.role.as_str(),
                    content: &message.content,
                })
                .collect(),
            stream: false,
            options: OllamaOptions {
                temperature: exchange.temperature(),
                num_predict: exchange.max_tokens(),
            },
        }
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    async fn chat(&self, exchange: &ChatExchange) -> Result<Vec<ChatFragment>, BackendError> {
        let request = self.request_body(exchange);

        let url = format!("{}/api/chat", self.host);
        debug!(model = %self.model, url = %url, "dispatching ollama chat request");

        let response = self
            .client
            .post(&url)
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

        let reply: OllamaChatReply =
            response
                .json()
                .await
                .map_err(|source| BackendError::MalformedReply {
                    provider: PROVIDER,
                    reason: source.to_string(),
                })?;

        Ok(vec![ChatFragment {
            role: ChatRole::Assistant,
            content: reply.message.content,
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
        let backend = OllamaBackend::new("llama3", None, None).unwrap();

        let body = serde_json::to_value(backend.request_body(&exchange(Some(64)))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "llama3",
                "messages": [
                    {"role": "system", "content": "judge relevance"},
                    {"role": "user", "content": "score this paper"}
                ],
                "stream": false,
                "options": {"temperature": 0.2, "num_predict": 64}
            })
        );
    }

    #[test]
    fn test_request_omits_num_predict_without_token_bound() {
        let backend = OllamaBackend::new("llama3", None, None).unwrap();

        let body = serde_json::to_value(backend.request_body(&exchange(None))).unwrap();
        assert_eq!(body["stream"], serde_json::json!(false));
        assert!(body["options"].get("num_predict").is_none());
        assert_eq!(body["options"]["temperature"], serde_json::json!(0.2));
    }
}
