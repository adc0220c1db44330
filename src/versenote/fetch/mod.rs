//! # Verse Fetcher
//!
//! One outbound request per lookup, normalized into a [`VerseResult`].
//!
//! Every failure (transport, HTTP status, empty or undecodable body) comes back
//! as [`VerseResult::Error`]; `fetch` never returns `Err` and never panics, so
//! both shells can render whatever comes back without extra error paths.
//!
//! The [`VerseSource`] trait is the single fetch capability shared by the
//! terminal and web shells. [`esv::EsvClient`] is the production source.

use crate::error::FetchError;
use crate::model::{Passage, VerseResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

pub mod esv;

#[cfg(any(test, feature = "test_utils"))]
pub mod canned;

/// Label reported alongside successfully fetched ESV text.
pub const ESV_SOURCE_LABEL: &str = "English Standard Version (ESV)";

#[async_trait]
pub trait VerseSource: Send + Sync {
    async fn fetch(&self, reference: &str) -> VerseResult;
}

/// The part of the passage service response we read. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PassageResponse {
    #[serde(default)]
    pub passages: Option<Vec<String>>,
    #[serde(default)]
    pub footnotes: Option<Vec<Value>>,
}

/// Turn a decoded response into display text.
///
/// Passages are trimmed and joined with a newline. Footnotes, when present,
/// are appended as a trailing block and also returned on their own.
pub fn normalize(response: PassageResponse, source: &str) -> VerseResult {
    let passages = response.passages.unwrap_or_default();
    if passages.is_empty() {
        return VerseResult::Error(FetchError::NoPassage);
    }

    let mut text = passages
        .iter()
        .map(|p| p.trim())
        .collect::<Vec<&str>>()
        .join("\n");

    let footnotes: Vec<String> = response
        .footnotes
        .unwrap_or_default()
        .into_iter()
        .map(footnote_text)
        .collect();

    if !footnotes.is_empty() {
        text.push_str("\n\nFOOTNOTES:\n");
        for footnote in &footnotes {
            text.push_str(&format!("- {}\n", footnote));
        }
    }

    VerseResult::Passage(Passage {
        text,
        footnotes,
        source: source.to_string(),
    })
}

/// Footnotes are opaque: strings as-is, anything else as compact JSON.
fn footnote_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Decode a raw body and normalize it.
pub fn normalize_body(body: &[u8], source: &str) -> VerseResult {
    match serde_json::from_slice::<PassageResponse>(body) {
        Ok(response) => normalize(response, source),
        Err(e) => VerseResult::Error(FetchError::Decode(e.to_string())),
    }
}
