//! Plain-text export of a consolation response.
//!
//! Layout follows the printed devotional: title, rule, reflection, then each
//! verse as reference, text and quoted reflection. Paragraphs are greedily
//! word-wrapped to `LINE_WIDTH` columns.

use chrono::NaiveDate;

use crate::consolation::models::ConsolationResponse;

pub const DOCUMENT_TITLE: &str = "Versículos Para Tí";
pub const LINE_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

pub fn document_filename(date: NaiveDate) -> String {
    format!("Versiculos-Para-Ti-{}.txt", date.format("%Y-%m-%d"))
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
/// Blank input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn push_paragraph(out: &mut String, text: &str) {
    for line in wrap_text(text, LINE_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Renders `response` as a downloadable document dated `date`.
pub fn render_document(response: &ConsolationResponse, date: NaiveDate) -> Document {
    let mut content = String::new();

    content.push_str(&centered(DOCUMENT_TITLE, LINE_WIDTH));
    content.push('\n');
    content.push_str(&"=".repeat(LINE_WIDTH));
    content.push_str("\n\n");

    content.push_str("Un mensaje para ti:\n");
    push_paragraph(&mut content, &response.initial_reflection);
    content.push('\n');

    content.push_str("Versículos que Dios tiene para tí:\n\n");
    for verse in &response.verses {
        content.push_str(verse.reference.trim());
        content.push('\n');
        push_paragraph(&mut content, &verse.text);
        push_paragraph(&mut content, &format!("\"{}\"", verse.reflection.trim()));
        content.push('\n');
    }

    Document {
        filename: document_filename(date),
        content,
    }
}
