//! Pure predicates behind each validation rule. Every function takes the raw
//! user text and returns `true` when the rule REJECTS it.

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::lexicon::is_common_spanish_word;

pub const MIN_CHARS: usize = 3;
/// Texts with at least this share of non-letter characters are not descriptive.
pub const MAX_NON_LETTER_PERCENT: usize = 30;
pub const MAX_SPAM_SCORE: usize = 3;
/// The Spanish-word check only applies to texts with more words than this.
pub const MIN_WORDS_FOR_LANGUAGE_CHECK: usize = 5;
pub const MIN_SPANISH_WORD_RATIO: f32 = 0.30;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid validation regex"))
        .collect()
}

static NUMERIC_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s+\-*/=.,%^()]+$").expect("valid regex"));

static EMOJI_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\x{1F000}-\x{1FAFF}\x{2600}-\x{27BF}\x{2B00}-\x{2BFF}\x{2190}-\x{21FF}\x{FE0F}\x{200D}\x{20E3}\s]+$",
    )
    .expect("valid regex")
});

static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // scheme-prefixed
        r"(?i)\b(?:https?|ftp)://",
        // www-prefixed
        r"(?i)\bwww\.\w",
        // bare domain followed by a path
        r"\b[a-zA-Z0-9-]+\.[a-zA-Z]{2,}/\S*",
        // common TLDs; lowercase only so "mal.Es" between sentences is not a domain
        r"\b[a-z0-9-]+\.(?:com|net|org|edu|gov|io|co|es|mx|ar|cl|pe|info|biz|app|dev|xyz|tv)\b",
        // email
        r"\b[\w.%+-]+@[\w-]+\.[a-zA-Z]{2,}\b",
    ])
});

static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // braces, brackets, angle brackets
        r"[{}\[\]<>]",
        // HTML tags
        r"</?[a-zA-Z][a-zA-Z0-9]*(?:\s[^>]*)?/?>",
        // JavaScript
        r"\bfunction\s*\w*\s*\(",
        r"=>",
        r"\b(?:var|let|const)\s+[A-Za-z_$][\w$]*\s*=",
        r"\bclass\s+[A-Z]\w*",
        r"\b(?:import|export)\s+[\w{*]",
        r"\b(?:if|while|for|switch)\s*\(",
        r"\bconsole\.[a-z]+",
        r"\bdocument\.[a-zA-Z]+",
        r"\$\(",
        // bare function calls: name immediately followed by parentheses
        r"\b[A-Za-z_]\w*\([^)]*\)",
        // assignment statements
        r"\b[A-Za-z_]\w*\s*(?:[+\-*/]?=|==)\s*[\w$]",
        // comment syntax
        r"//|/\*|\*/",
        // Markdown headers and code fences
        r"(?m)^\s*#{1,6}\s+\S",
        r"```",
        // SQL
        r"(?i)\b(?:select\s+[\w*,\s]+\s+from|insert\s+into|update\s+\w+\s+set|delete\s+from|drop\s+(?:table|database)|create\s+table|alter\s+table)\b",
        // Python
        r"\bdef\s+\w+\s*\(",
        r"\bprint\s*\(",
        r"\belif\b",
        r"\bfrom\s+\w+\s+import\b",
        r"\bself\.\w+",
        // C / Java
        r"#include\b",
        r"\bpublic\s+(?:static\s+)?(?:void|class|int|String)\b",
        r"\bSystem\.out\.",
        r"\bprintf\s*\(",
        r"\bstd::",
        r"\b(?:int|void|char)\s+main\s*\(",
        r"\breturn\b[^.;]*;",
    ])
});

static SPAM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // long alphanumeric runs without spaces
        r"[A-Za-z0-9]{20,}",
        // characters outside the natural-language whitelist
        r#"[^a-zA-ZáéíóúüñÁÉÍÓÚÜÑ0-9\s.,;:¡!¿?()"'\-…]"#,
        // ALL-CAPS words
        r"\b[A-ZÁÉÍÓÚÜÑ]{3,}\b",
        // digit runs
        r"\d{4,}",
    ])
});

fn is_spanish_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || "áéíóúüñÁÉÍÓÚÜÑ".contains(c)
}

pub fn is_too_short(text: &str) -> bool {
    text.trim().chars().count() < MIN_CHARS
}

/// Counts of (Spanish letters plus whitespace, all chars) in the trimmed text.
fn letter_counts(text: &str) -> (usize, usize) {
    let trimmed = text.trim();
    let letters = trimmed
        .chars()
        .filter(|&c| is_spanish_letter(c) || c.is_whitespace())
        .count();
    (letters, trimmed.chars().count())
}

/// Share of Spanish letters plus whitespace over the trimmed length.
pub fn letter_ratio(text: &str) -> f32 {
    match letter_counts(text) {
        (_, 0) => 0.0,
        (letters, total) => letters as f32 / total as f32,
    }
}

/// Integer comparison so exactly 30% non-letters is rejected.
pub fn is_not_descriptive(text: &str) -> bool {
    let (letters, total) = letter_counts(text);
    total == 0 || (total - letters) * 100 >= total * MAX_NON_LETTER_PERCENT
}

pub fn is_numbers_only(text: &str) -> bool {
    NUMERIC_ONLY.is_match(text.trim())
}

pub fn is_emoji_only(text: &str) -> bool {
    EMOJI_ONLY.is_match(text.trim())
}

pub fn contains_link(text: &str) -> bool {
    URL_PATTERNS.iter().any(|re| re.is_match(text))
}

pub fn contains_code(text: &str) -> bool {
    CODE_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Total number of matches across all spam heuristics.
pub fn spam_score(text: &str) -> usize {
    SPAM_PATTERNS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum()
}

pub fn looks_technical(text: &str) -> bool {
    spam_score(text) > MAX_SPAM_SCORE
}

/// Fraction of whitespace-delimited words found in the common-word lexicon.
pub fn spanish_word_ratio(text: &str) -> f32 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let common = words.iter().filter(|w| is_common_spanish_word(w)).count();
    common as f32 / words.len() as f32
}

pub fn is_not_natural_spanish(text: &str) -> bool {
    let word_count = text.split_whitespace().count();
    word_count > MIN_WORDS_FOR_LANGUAGE_CHECK && spanish_word_ratio(text) < MIN_SPANISH_WORD_RATIO
}
