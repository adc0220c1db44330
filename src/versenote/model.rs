use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole persisted document: reference -> note.
pub type Document = BTreeMap<String, Note>;

/// A user-authored interpretation attached to a reference.
///
/// On disk this is `{ "verse": <reference>, "interpretation": <text> }`, keyed by
/// the same reference in the enclosing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    // Older files may omit it; the document key wins on load anyway
    #[serde(rename = "verse", default)]
    pub reference: String,
    #[serde(rename = "interpretation")]
    pub text: String,
}

impl Note {
    pub fn new(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
        }
    }
}

/// Fetched passage text, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// Passages joined by newlines, with the footnote block appended when present.
    pub text: String,
    pub footnotes: Vec<String>,
    /// Human readable name of the translation, e.g. "English Standard Version (ESV)".
    pub source: String,
}

/// Outcome of a single lookup against the passage service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseResult {
    Passage(Passage),
    Error(FetchError),
}

impl VerseResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, VerseResult::Passage(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            VerseResult::Passage(p) => Some(&p.text),
            VerseResult::Error(_) => None,
        }
    }

    pub fn footnotes(&self) -> &[String] {
        match self {
            VerseResult::Passage(p) => &p.footnotes,
            VerseResult::Error(_) => &[],
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            VerseResult::Passage(p) => Some(&p.source),
            VerseResult::Error(_) => None,
        }
    }

    /// The passage text, or the error description in its place.
    pub fn display_text(&self) -> String {
        match self {
            VerseResult::Passage(p) => p.text.clone(),
            VerseResult::Error(e) => format!("Error fetching verse: {}", e),
        }
    }
}

/// Everything a shell needs to render one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub reference: String,
    pub verse: VerseResult,
    pub note: Option<Note>,
}

impl Lookup {
    pub fn new(reference: impl Into<String>, verse: VerseResult, note: Option<Note>) -> Self {
        Self {
            reference: reference.into(),
            verse,
            note,
        }
    }

    /// Plain text rendering used for the clipboard and for exported files.
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("Bible Verse: {}\n\n", self.reference);
        match &self.verse {
            VerseResult::Passage(p) => {
                out.push_str(&format!("VERSE:\n{}\n\n", p.text.trim_end()));
                out.push_str(&format!("SOURCE: {}\n\n", p.source));
            }
            VerseResult::Error(e) => {
                out.push_str(&format!("Error fetching verse: {}\n\n", e));
            }
        }
        match &self.note {
            Some(note) => out.push_str(&format!("INTERPRETATION:\n{}\n", note.text)),
            None => out.push_str("No interpretation found.\n"),
        }
        out
    }
}
