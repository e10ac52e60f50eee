use serde::{Deserialize, Serialize};

/// Number of verses requested per batch.
pub const VERSE_BATCH_SIZE: usize = 5;

/// Trimmed, non-empty user text headed for the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolationRequest {
    pub user_text: String,
}

impl ConsolationRequest {
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            user_text: trimmed.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub reflection: String,
}

impl VerseEntry {
    fn missing_field(&self) -> Option<&'static str> {
        if self.reference.trim().is_empty() {
            Some("reference")
        } else if self.text.trim().is_empty() {
            Some("text")
        } else if self.reflection.trim().is_empty() {
            Some("reflection")
        } else {
            None
        }
    }

    /// Reference key used to tell verses apart ("Salmo 23:1" == "salmo 23:1 ").
    pub fn reference_key(&self) -> String {
        self.reference.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_summary: Option<String>,
    #[serde(default)]
    pub initial_reflection: String,
    #[serde(default)]
    pub verses: Vec<VerseEntry>,
}

impl ConsolationResponse {
    /// Checks the fields every rendered response needs. The error names the
    /// first missing piece.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.initial_reflection.trim().is_empty() {
            return Err("missing initialReflection".to_string());
        }
        check_verses(&self.verses)
    }
}

/// A verse batch must be non-empty and every entry fully populated.
pub fn check_verses(verses: &[VerseEntry]) -> Result<(), String> {
    if verses.is_empty() {
        return Err("verses is empty".to_string());
    }
    for (i, verse) in verses.iter().enumerate() {
        if let Some(field) = verse.missing_field() {
            return Err(format!("verses[{i}] is missing {field}"));
        }
    }
    Ok(())
}
