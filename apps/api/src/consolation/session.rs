//! Caller-owned session state: the text the user submitted and the last
//! successful response. The browser keeps it and posts it back for follow-up
//! requests; the server rebuilds it per request and drops it afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consolation::document::{render_document, Document};
use crate::consolation::models::{ConsolationResponse, VerseEntry};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("No hay versículos para guardar. Por favor, realiza una búsqueda primero.")]
pub struct NothingToExport;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    user_input: Option<String>,
    #[serde(default)]
    current: Option<ConsolationResponse>,
}

impl Session {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a successful result. Last write wins.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn record(&mut self, user_input: String, response: ConsolationResponse) {
        self.user_input = Some(user_input);
        self.current = Some(response);
    }

    /// Appends verses to the current response. Returns how many were appended
    /// (zero when there is no current response).
    pub fn extend_verses(&mut self, verses: Vec<VerseEntry>) -> usize {
        match self.current.as_mut() {
            Some(current) => {
                let added = verses.len();
                current.verses.extend(verses);
                added
            }
            None => 0,
        }
    }

    pub fn user_input(&self) -> Option<&str> {
        self.user_input
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn current(&self) -> Option<&ConsolationResponse> {
        self.current.as_ref()
    }

    pub fn into_current(self) -> Option<ConsolationResponse> {
        self.current
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn reset(&mut self) {
        self.user_input = None;
        self.current = None;
    }

    /// Renders the current response, if it has anything to show.
    pub fn export(&self, date: NaiveDate) -> Result<Document, NothingToExport> {
        match &self.current {
            Some(current) if !current.verses.is_empty() => Ok(render_document(current, date)),
            _ => Err(NothingToExport),
        }
    }
}
