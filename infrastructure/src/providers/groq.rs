//! Groq adapter for the LLM gateway port
//!
//! Talks to the OpenAI-compatible chat-completions endpoint with a shared
//! reqwest client. One request per invocation: no retry, no streaming; the
//! caller sees every fault as a [`GatewayError`].

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use consulta_application::ports::llm_gateway::{GatewayError, LlmGateway};
use consulta_domain::truncate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// LLM gateway backed by the Groq chat-completions API.
///
/// The reqwest client is process-wide and holds no per-request state, so a
/// single instance can be shared across concurrent requests.
pub struct GroqLlmGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GroqLlmGateway {
    /// Build the adapter from provider configuration.
    ///
    /// Fails when no API key can be resolved from the config or the
    /// configured environment variable.
    pub fn new(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::AuthFailed(format!(
                "no API key: set {} or [provider].api_key",
                config.api_key_env
            ))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Map an HTTP status to the gateway error taxonomy.
fn status_error(status: reqwest::StatusCode, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status.as_u16(), truncate(body.trim(), 200));
    match status.as_u16() {
        401 | 403 => GatewayError::AuthFailed(detail),
        429 => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

#[async_trait]
impl LlmGateway for GroqLlmGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "POST {}/chat/completions (model {})",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                GatewayError::InvalidResponse("response carried no choices".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chat_response() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "mixtral-8x7b-32768",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "legal"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 52, "completion_tokens": 2, "total_tokens": 54}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "legal");
    }

    #[test]
    fn test_serialize_chat_request_shape() {
        let request = ChatRequest {
            model: "mixtral-8x7b-32768",
            temperature: 0.8,
            messages: vec![ChatMessage {
                role: "user",
                content: "hola",
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "mixtral-8x7b-32768");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hola");
    }

    #[test]
    fn test_status_mapping() {
        use reqwest::StatusCode;
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "bad key"),
            GatewayError::AuthFailed(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, ""),
            GatewayError::AuthFailed(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited(_)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GatewayError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = FileProviderConfig {
            api_key_env: "CONSULTA_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..FileProviderConfig::default()
        };
        assert!(matches!(
            GroqLlmGateway::new(&config),
            Err(GatewayError::AuthFailed(_))
        ));
    }

    #[test]
    fn test_new_with_inline_key_strips_trailing_slash() {
        let config = FileProviderConfig {
            api_key: Some("test-key".to_string()),
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            ..FileProviderConfig::default()
        };
        let gateway = GroqLlmGateway::new(&config).unwrap();
        assert_eq!(gateway.base_url, "https://api.groq.com/openai/v1");
    }
}
