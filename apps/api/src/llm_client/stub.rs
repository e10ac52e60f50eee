//! In-process `CompletionService` for tests. Records every prompt it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::llm_client::{
    Candidate, CandidateContent, CompletionService, ContentPart, GenerateContentResponse,
    LlmError,
};

enum Reply {
    Text(String),
    Safety,
    Service { status: u16, body: String },
}

pub struct StubCompletion {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answers every call with `text` as the first candidate's completion.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(text.into()))
    }

    /// Answers every call with a safety-blocked candidate and no content.
    pub fn safety() -> Self {
        Self::with_reply(Reply::Safety)
    }

    pub fn service_error(status: u16, body: &str) -> Self {
        Self::with_reply(Reply::Service {
            status,
            body: body.to_string(),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(GenerateContentResponse {
                candidates: vec![Candidate {
                    content: Some(CandidateContent {
                        parts: vec![ContentPart {
                            text: Some(text.clone()),
                        }],
                    }),
                    finish_reason: Some("STOP".to_string()),
                }],
                ..Default::default()
            }),
            Reply::Safety => Ok(GenerateContentResponse {
                candidates: vec![Candidate {
                    content: None,
                    finish_reason: Some("SAFETY".to_string()),
                }],
                ..Default::default()
            }),
            Reply::Service { status, body } => Err(LlmError::Service {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// A verse list whose references are "<book> <n>:1" for n in `range`.
pub fn verses_json(book: &str, range: std::ops::Range<usize>) -> serde_json::Value {
    range
        .map(|n| {
            json!({
                "reference": format!("{book} {n}:1"),
                "text": format!("Texto del versículo {n}."),
                "reflection": format!("Reflexión {n}."),
            })
        })
        .collect()
}

/// A complete consolation payload with `verse_count` verses.
pub fn consolation_json(verse_count: usize) -> String {
    json!({
        "briefSummary": "tristeza y soledad",
        "initialReflection": "Lo que sientes es real y Dios te acompaña.",
        "verses": verses_json("Salmo", 1..verse_count + 1),
    })
    .to_string()
}
