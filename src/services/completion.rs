// src/services/completion.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{ChatSettings, GatewayConfig};
use crate::message::{ChatTurn, CompletionRequest, CompletionResponse};

const DEFAULT_BACKOFF: Duration = Duration::from_millis(250);
const MAX_BACKOFF: Duration = Duration::from_secs(10);
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no completion returned")]
    EmptyCompletion,
}

impl UpstreamError {
    /// Whether another attempt may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            UpstreamError::Timeout | UpstreamError::Transport(_) => true,
            UpstreamError::Status { status, .. } => *status == 429 || *status >= 500,
            UpstreamError::InvalidResponse(_) | UpstreamError::EmptyCompletion => false,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

/// A chat-completion backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError>;
}

/// The two-turn payload sent for a single user message.
pub fn build_request(settings: &ChatSettings, user_message: &str) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatTurn::system(settings.system_prompt.clone()),
            ChatTurn::user(user_message),
        ],
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    }
}

/// OpenAI-compatible `chat/completions` client.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    backoff: Duration,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().connect_timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            max_retries,
            backoff: DEFAULT_BACKOFF,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.api_key, &config.base_url, config.timeout, config.max_retries)
    }

    /// Initial delay between retries; doubled after each failed attempt, up to ten seconds.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        let resp = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let parsed: CompletionResponse = serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;
        parsed.into_first_content().ok_or(UpstreamError::EmptyCompletion)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        let mut delay = self.backoff;
        let mut attempt = 0;
        loop {
            match self.attempt(request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(error = %e, attempt, "upstream call failed, retrying");
                    tokio::time::sleep(delay).await;
                    delay = next_backoff(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn next_backoff(delay: Duration) -> Duration {
    delay.saturating_mul(2).min(MAX_BACKOFF)
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// Prefers the `{"error":{"message":..}}` envelope, falls back to a clipped body.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(env) = serde_json::from_slice::<ErrorEnvelope>(body) {
        return env.error.message;
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return status.canonical_reason().unwrap_or("unknown error").to_string();
    }
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
