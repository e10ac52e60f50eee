//! Consolation normalizer — builds the prompt, calls the completion service and
//! turns its reply into a shape-checked `ConsolationResponse`.
//!
//! Flow: build prompt → generate → safety check → strip fences → parse → check shape.
//! Every call regenerates the prompt and hits the service; nothing is cached.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::consolation::models::{check_verses, ConsolationResponse, VerseEntry, VERSE_BATCH_SIZE};
use crate::consolation::prompts::{CONSOLATION_PROMPT_TEMPLATE, MORE_VERSES_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PASTORAL_TONE_INSTRUCTION};
use crate::llm_client::{strip_json_fences, CompletionService, LlmError};

#[derive(Debug, Deserialize)]
struct MoreVersesPayload {
    #[serde(default)]
    verses: Vec<VerseEntry>,
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("valid regex"));

/// Fills `{name}` placeholders in a single pass. Substituted values are never
/// rescanned, so user text or caller-supplied references cannot expand other
/// placeholders. Unknown names are left as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}

pub fn build_consolation_prompt(user_text: &str) -> String {
    fill_template(
        CONSOLATION_PROMPT_TEMPLATE,
        &[
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("tone", PASTORAL_TONE_INSTRUCTION),
            ("user_input", user_text),
        ],
    )
}

pub fn build_more_verses_prompt(user_text: &str, existing: &[VerseEntry]) -> String {
    let existing_references = existing
        .iter()
        .map(|v| v.reference.trim())
        .collect::<Vec<_>>()
        .join(", ");
    fill_template(
        MORE_VERSES_PROMPT_TEMPLATE,
        &[
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("tone", PASTORAL_TONE_INSTRUCTION),
            ("existing_references", &existing_references),
            ("user_input", user_text),
        ],
    )
}

/// Parses a completion into a `ConsolationResponse`, rejecting incomplete payloads.
pub fn parse_consolation(completion: &str) -> Result<ConsolationResponse, LlmError> {
    let response: ConsolationResponse = serde_json::from_str(strip_json_fences(completion))?;
    response.check_shape().map_err(LlmError::Format)?;
    if response.verses.len() != VERSE_BATCH_SIZE {
        warn!(
            "Completion returned {} verses, expected {}",
            response.verses.len(),
            VERSE_BATCH_SIZE
        );
    }
    Ok(response)
}

/// Parses a follow-up completion; only `verses` is required.
pub fn parse_more_verses(completion: &str) -> Result<Vec<VerseEntry>, LlmError> {
    let payload: MoreVersesPayload = serde_json::from_str(strip_json_fences(completion))?;
    check_verses(&payload.verses).map_err(LlmError::Format)?;
    Ok(payload.verses)
}

/// Requests a fresh reflection and verse batch for `user_text`.
pub async fn request_consolation(
    service: &dyn CompletionService,
    user_text: &str,
) -> Result<ConsolationResponse, LlmError> {
    let prompt = build_consolation_prompt(user_text);
    debug!("Requesting consolation (input_chars={})", user_text.chars().count());

    let completion = service.generate(&prompt).await?;
    parse_consolation(completion.completion_text()?)
}

/// Requests more verses, dropping any whose reference was already shown or
/// repeats within the new batch.
pub async fn request_more_verses(
    service: &dyn CompletionService,
    user_text: &str,
    existing: &[VerseEntry],
) -> Result<Vec<VerseEntry>, LlmError> {
    let prompt = build_more_verses_prompt(user_text, existing);
    debug!("Requesting more verses (already_shown={})", existing.len());

    let completion = service.generate(&prompt).await?;
    let verses = parse_more_verses(completion.completion_text()?)?;

    let mut seen: HashSet<String> = existing.iter().map(VerseEntry::reference_key).collect();
    let fresh: Vec<VerseEntry> = verses
        .into_iter()
        .filter(|v| seen.insert(v.reference_key()))
        .collect();

    if fresh.is_empty() {
        return Err(LlmError::Format(
            "completion repeated only verses already shown".to_string(),
        ));
    }
    Ok(fresh)
}
