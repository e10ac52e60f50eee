//! Input validation — decides whether free text describes feelings well enough
//! to be sent to the completion service.
//!
//! Rules run cheapest-first and the FIRST failing rule decides the message.
//! Each rule is a pure predicate in `patterns` and can be tested on its own.

pub mod lexicon;
pub mod patterns;

use serde::Serialize;

/// Why a text was rejected. Each variant carries one user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    TooShort,
    NotDescriptive,
    NumbersOnly,
    EmojiOnly,
    ContainsLink,
    ContainsCode,
    LooksTechnical,
    NotNaturalSpanish,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::TooShort => {
                "Tu mensaje es muy corto. Cuéntanos un poco más sobre cómo te sientes."
            }
            Rejection::NotDescriptive => {
                "Por favor, describe tus sentimientos con palabras. Tu texto contiene demasiados símbolos o caracteres especiales."
            }
            Rejection::NumbersOnly => {
                "Por favor, usa palabras para expresar cómo te sientes, no solo números."
            }
            Rejection::EmojiOnly => {
                "Los emojis son expresivos, pero por favor usa palabras para describir cómo te sientes."
            }
            Rejection::ContainsLink => {
                "Por favor, no incluyas enlaces, direcciones web ni correos electrónicos. Solo cuéntanos cómo te sientes."
            }
            Rejection::ContainsCode => {
                "Parece que tu texto contiene código. Por favor, escribe con tus propias palabras cómo te sientes."
            }
            Rejection::LooksTechnical => {
                "Tu texto parece contener contenido técnico o poco natural. Por favor, expresa tus sentimientos de forma sencilla."
            }
            Rejection::NotNaturalSpanish => {
                "Por favor, escribe en español natural cómo te sientes para que podamos acompañarte mejor."
            }
        }
    }
}

/// Outcome of `validate`. `message` and `reason` are present iff `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Rejection>,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            message: None,
            reason: None,
        }
    }

    pub fn rejected(reason: Rejection) -> Self {
        Self {
            valid: false,
            message: Some(reason.message().to_string()),
            reason: Some(reason),
        }
    }
}

struct Rule {
    reason: Rejection,
    rejects: fn(&str) -> bool,
}

/// Evaluation order matters: messages are mutually exclusive and the first match wins.
const RULES: &[Rule] = &[
    Rule {
        reason: Rejection::TooShort,
        rejects: patterns::is_too_short,
    },
    Rule {
        reason: Rejection::NotDescriptive,
        rejects: patterns::is_not_descriptive,
    },
    Rule {
        reason: Rejection::NumbersOnly,
        rejects: patterns::is_numbers_only,
    },
    Rule {
        reason: Rejection::EmojiOnly,
        rejects: patterns::is_emoji_only,
    },
    Rule {
        reason: Rejection::ContainsLink,
        rejects: patterns::contains_link,
    },
    Rule {
        reason: Rejection::ContainsCode,
        rejects: patterns::contains_code,
    },
    Rule {
        reason: Rejection::LooksTechnical,
        rejects: patterns::looks_technical,
    },
    Rule {
        reason: Rejection::NotNaturalSpanish,
        rejects: patterns::is_not_natural_spanish,
    },
];

/// Classifies raw user text as acceptable or rejected.
pub fn validate(text: &str) -> ValidationResult {
    RULES
        .iter()
        .find(|rule| (rule.rejects)(text))
        .map(|rule| ValidationResult::rejected(rule.reason))
        .unwrap_or_else(ValidationResult::accepted)
}
