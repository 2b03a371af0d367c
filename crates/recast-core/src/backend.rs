//! Generative text backends.
//!
//! [`GenerativeBackend`] is the seam between prompt assembly and whatever
//! model produces the final text. [`ChatCompletionsBackend`] speaks the
//! OpenAI-compatible `/chat/completions` wire format; the same request and
//! response types serve the hashtag suggester.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::{BackendError, BackendResult};

/// Longest response body quoted back in a status error.
const MAX_ERROR_BODY: usize = 300;

/// Sampling settings passed with each generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature, 0–1.
    pub temperature: f64,
    /// Completion token limit.
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

/// A model that turns a system message and a user prompt into text.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Generate a single completion.
    async fn generate(
        &self,
        system: &str,
        user: &str,
        options: GenerationOptions,
    ) -> BackendResult<String>;
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub(crate) const fn system(content: &'a str) -> Self {
        Self {
            role: "system",
            content,
        }
    }

    pub(crate) const fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Build an HTTP client with a whole-request timeout.
pub(crate) fn http_client(timeout: Duration) -> BackendResult<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Read an API key from the named environment variable.
pub(crate) fn api_key_from_env(env_var: &str) -> BackendResult<String> {
    std::env::var(env_var)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| BackendError::MissingApiKey {
            env_var: env_var.to_string(),
        })
}

/// POST a chat request and return the first choice's content.
pub(crate) async fn send_chat(
    client: &reqwest::Client,
    endpoint: &str,
    api_key: &str,
    request: &ChatRequest<'_>,
) -> BackendResult<String> {
    let response = client
        .post(endpoint)
        .header(AUTHORIZATION, format!("Bearer {api_key}"))
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let body: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
        return Err(BackendError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: ChatResponse = response.json().await?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or(BackendError::EmptyResponse)
}

/// Backend for any OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsBackend {
    /// Create a backend for an explicit endpoint, model and key.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> BackendResult<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a backend from configuration, reading the key from the environment.
    ///
    /// Fails with [`BackendError::MissingApiKey`] when the variable is unset or empty.
    pub fn from_config(config: &GenerationConfig) -> BackendResult<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerativeBackend for ChatCompletionsBackend {
    fn name(&self) -> &str {
        "chat-completions"
    }

    #[tracing::instrument(skip_all, fields(model = %self.model, temperature = options.temperature))]
    async fn generate(
        &self,
        system: &str,
        user: &str,
        options: GenerationOptions,
    ) -> BackendResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };
        let content = send_chat(&self.client, &self.endpoint, &self.api_key, &request).await?;
        tracing::debug!(chars = content.len(), "generation complete");
        Ok(content)
    }
}
