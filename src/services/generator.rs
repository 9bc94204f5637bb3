// src/services/generator.rs
use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeneratorConfig;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("request to chat API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chat API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("chat API returned no answer")]
    EmptyResponse,
}

/// Turns a prompt into an answer. Implementations are shared across requests.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate_answer(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// Always answers with the same text.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    reply: String,
}

impl StaticGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }
}

impl Default for StaticGenerator {
    fn default() -> Self {
        Self::new("The chat service is not configured. Set MISTRAL_API_KEY to enable answers.")
    }
}

#[async_trait]
impl AnswerGenerator for StaticGenerator {
    async fn generate_answer(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Ok(self.reply.clone())
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint (Mistral by default).
#[derive(Clone)]
pub struct MistralGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl Debug for MistralGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}

impl MistralGenerator {
    pub fn new(config: &GeneratorConfig, api_key: impl Into<String>) -> Result<Self, GeneratorError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerGenerator for MistralGenerator {
    async fn generate_answer(&self, prompt: &str) -> Result<String, GeneratorError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![CompletionMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GeneratorError::EmptyResponse)
    }
}

/// Picks the HTTP-backed generator when an API key is configured, otherwise
/// falls back to static replies.
pub fn from_config(config: &GeneratorConfig) -> Result<Box<dyn AnswerGenerator>, GeneratorError> {
    match &config.api_key {
        Some(key) => {
            let generator = MistralGenerator::new(config, key.clone())?;
            tracing::info!(endpoint = generator.endpoint(), model = %config.model, "using chat API generator");
            Ok(Box::new(generator))
        }
        None => {
            tracing::warn!("MISTRAL_API_KEY not set, /chat_gen will return a static reply");
            Ok(Box::new(StaticGenerator::default()))
        }
    }
}
