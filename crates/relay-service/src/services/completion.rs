//! Completion backend client and service
//!
//! Sends one single-turn, user-role chat-completion request per call to
//! an OpenAI-compatible backend and returns the first choice's text
//! content. No conversation state is retained between calls and no
//! retry is attempted; the caller decides what a failure means.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;
use validator::Validate;

use crate::dto::{PromptRequest, ReplyResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Completion failure taxonomy
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Completion API key is not configured")]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion API error {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(&'static str),
}

/// Seam for the completion backend, so the relay pipeline and the API
/// handlers can be exercised against a stub.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one user-role message to the named model and return the
    /// reply text.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;
}

// ============================================================================
// Wire types (OpenAI-compatible chat completions)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    fn single_turn(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Extract the first choice's text content.
    fn into_first_content(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .ok_or(CompletionError::MalformedResponse("response has no choices"))?
            .message
            .content
            .ok_or(CompletionError::MalformedResponse(
                "first choice has no text content",
            ))
    }
}

// ============================================================================
// HTTP client
// ============================================================================

/// Groq chat-completions client
pub struct GroqCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GroqCompletionClient {
    /// Create a new client with a per-request timeout.
    ///
    /// The API key is optional at construction; requests fail with
    /// [`CompletionError::MissingApiKey`] while it is absent.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionBackend for GroqCompletionClient {
    #[instrument(skip(self, prompt))]
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatCompletionRequest::single_turn(model, prompt);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                CompletionError::MalformedResponse("response body is not valid JSON")
            } else {
                CompletionError::Transport(e)
            }
        })?;

        body.into_first_content()
    }
}

// ============================================================================
// Service
// ============================================================================

/// Completion service for the direct reply endpoints
pub struct CompletionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CompletionService<'a> {
    /// Create a new CompletionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run one single-turn completion against the given model.
    #[instrument(skip(self, request))]
    pub async fn reply(&self, model: &str, request: PromptRequest) -> ServiceResult<ReplyResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let prompt = request.q.trim();
        if prompt.is_empty() {
            return Err(ServiceError::validation("Prompt is required"));
        }

        let reply = self.ctx.completion().complete(model, prompt).await?;

        Ok(ReplyResponse {
            model: model.to_string(),
            reply,
        })
    }
}
