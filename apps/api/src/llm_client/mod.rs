/// LLM Client — the single point of entry for all completion-service calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Callers depend on the `CompletionService` trait so the normalizer can be
/// exercised against a stub.
///
/// One attempt per call: no retry, no timeout, no caching.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;
#[cfg(test)]
pub mod stub;

/// `finishReason` value Gemini uses when a candidate was withheld by its safety filters.
pub const FINISH_REASON_SAFETY: &str = "SAFETY";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("Unexpected response format: {0}")]
    Format(String),

    #[error("Completion blocked by safety filters")]
    SafetyBlocked,

    #[error("Completion service credential is not configured")]
    MissingCredential,
}

impl From<serde_json::Error> for LlmError {
    fn from(e: serde_json::Error) -> Self {
        LlmError::Format(format!("invalid JSON: {e}"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub role: &'a str,
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn carrying the whole prompt.
    pub fn single_turn(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.trim().is_empty())
    }

    /// True when upstream explicitly withheld the completion for safety reasons,
    /// either on the first candidate or on the prompt itself.
    pub fn safety_blocked(&self) -> bool {
        let candidate_blocked = self
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            == Some(FINISH_REASON_SAFETY);
        let prompt_blocked = self
            .prompt_feedback
            .as_ref()
            .is_some_and(|f| f.block_reason.is_some());
        candidate_blocked || prompt_blocked
    }

    /// Extracts the completion text, checking for a safety block first so a
    /// filtered completion is never reported as a generic format error.
    pub fn completion_text(&self) -> Result<&str, LlmError> {
        if self.safety_blocked() {
            return Err(LlmError::SafetyBlocked);
        }
        self.text().ok_or_else(|| {
            LlmError::Format("response contains no completion text".to_string())
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Service seam
// ────────────────────────────────────────────────────────────────────────────

/// A text-completion backend. Carried in `AppState` as `Arc<dyn CompletionService>`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError>;
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, api_base: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client from config; fails when no credential is configured.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or(LlmError::MissingCredential)?;
        Self::new(
            api_key,
            config.gemini_model.clone(),
            config.gemini_api_base.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest::single_turn(prompt);

        let response = self
            .client
            .post(self.endpoint())
            // Credential goes in a header, never in the URL.
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Completion API returned {}: {}", status, body);
            return Err(LlmError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Completion call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let unfenced = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```JSON"))
        .or_else(|| text.strip_prefix("```"));
    match unfenced {
        Some(stripped) => {
            let stripped = stripped.trim();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text.strip_suffix("```").map(|s| s.trim()).unwrap_or(text),
    }
}
