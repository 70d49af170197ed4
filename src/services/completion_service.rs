use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// One round trip to the chat-completion provider: a system instruction
/// plus a user prompt in, the first choice's text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_instruction: &str, user_prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Reqwest-backed client for a DeepSeek-compatible chat-completion API.
/// Built once at startup and shared across requests; the inner
/// `reqwest::Client` pools connections and carries the request deadline.
pub struct HttpCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.completion_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.completion_base_url.trim_end_matches('/').to_string(),
            api_key: config.completion_api_key.clone(),
            model: config.completion_model.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, system_instruction: &str, user_prompt: &str) -> AppResult<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::CompletionTimeout
                } else {
                    AppError::Completion(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Completion(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Completion(format!("malformed provider response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Completion("provider response contained no choices".into()))
    }
}
