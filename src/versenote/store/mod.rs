//! # Storage Layer
//!
//! Notes live in a single JSON document mapping a reference to its record:
//!
//! ```text
//! {
//!     "John 3:16": {
//!         "verse": "John 3:16",
//!         "interpretation": "God's love"
//!     }
//! }
//! ```
//!
//! [`NoteStore`] owns the in-memory mapping and is the only thing the command
//! layer talks to. Raw I/O is delegated to a [`StorageBackend`]:
//!
//! - [`fs_backend::FsBackend`]: production backend, one file on disk
//! - [`mem_backend::MemBackend`]: in-memory backend for tests
//!
//! ## Persistence discipline
//!
//! Every mutation rewrites the whole document before returning. There is no
//! batching and no incremental patching. When the rewrite fails the in-memory
//! mapping keeps the new state and the error is returned, so repeating the same
//! call is safe.

use crate::error::Result;
use crate::model::{Document, Note};
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

/// What happened when the document was read at startup.
///
/// None of these are fatal: the store is usable (possibly empty) in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    Loaded { notes: usize },
    NotFound(PathBuf),
    Corrupt { path: PathBuf, reason: String },
}

impl LoadReport {
    /// A user-facing description for the non-happy cases.
    pub fn problem(&self) -> Option<String> {
        match self {
            LoadReport::Loaded { .. } => None,
            LoadReport::NotFound(path) => Some(format!(
                "No interpretations file at {}; starting empty.",
                path.display()
            )),
            LoadReport::Corrupt { path, reason } => Some(format!(
                "Could not read interpretations file {}: {}. Starting empty.",
                path.display(),
                reason
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Created,
    Updated,
    Unchanged,
}

pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Document,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Read the document from the backend.
    ///
    /// A missing or unreadable document yields an empty store together with a
    /// report explaining why; the caller decides whether to continue.
    pub fn load(backend: B) -> (Self, LoadReport) {
        let location = backend.location();
        let (notes, report) = match backend.load_document() {
            Ok(Some(mut notes)) => {
                // The key is authoritative for the reference
                for (reference, note) in notes.iter_mut() {
                    if note.reference != *reference {
                        note.reference = reference.clone();
                    }
                }
                let count = notes.len();
                debug!(path = %location.display(), notes = count, "loaded interpretations");
                (notes, LoadReport::Loaded { notes: count })
            }
            Ok(None) => {
                debug!(path = %location.display(), "no interpretations file yet");
                (Document::new(), LoadReport::NotFound(location))
            }
            Err(e) => {
                warn!(path = %location.display(), error = %e, "interpretations file is unreadable");
                (
                    Document::new(),
                    LoadReport::Corrupt {
                        path: location,
                        reason: e.to_string(),
                    },
                )
            }
        };
        (Self { backend, notes }, report)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn get(&self, reference: &str) -> Option<&Note> {
        self.notes.get(reference)
    }

    /// Insert or overwrite the note for `reference`, then rewrite the document.
    pub fn put(&mut self, reference: &str, text: &str) -> Result<PutOutcome> {
        let outcome = match self.notes.get(reference) {
            Some(existing) if existing.text == text => PutOutcome::Unchanged,
            Some(_) => PutOutcome::Updated,
            None => PutOutcome::Created,
        };
        self.notes
            .insert(reference.to_string(), Note::new(reference, text));
        self.persist()?;
        Ok(outcome)
    }

    /// Overwrite an existing note only. Returns the previous note, or `None`
    /// (and writes nothing) when there is no note for `reference`.
    pub fn update(&mut self, reference: &str, text: &str) -> Result<Option<Note>> {
        let Some(note) = self.notes.get_mut(reference) else {
            return Ok(None);
        };
        let previous = note.clone();
        note.text = text.to_string();
        self.persist()?;
        Ok(Some(previous))
    }

    /// Remove the note for `reference`. Returns `None` (and writes nothing)
    /// when there was nothing to delete.
    pub fn delete(&mut self, reference: &str) -> Result<Option<Note>> {
        let Some(removed) = self.notes.remove(reference) else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(removed))
    }

    /// References sorted lexicographically.
    pub fn list(&self) -> Vec<&str> {
        // BTreeMap keys are already ordered
        self.notes.keys().map(String::as_str).collect()
    }

    pub fn document(&self) -> &Document {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.backend.save_document(&self.notes).inspect_err(|e| {
            warn!(path = %self.backend.location().display(), error = %e, "failed to write interpretations");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;

    fn empty_store() -> NoteStore<MemBackend> {
        NoteStore::load(MemBackend::new()).0
    }

    #[test]
    fn missing_document_is_reported_not_fatal() {
        let (store, report) = NoteStore::load(MemBackend::new());
        assert!(store.is_empty());
        assert!(matches!(report, LoadReport::NotFound(_)));
        assert!(report.problem().is_some());
    }

    #[test]
    fn corrupt_document_yields_empty_store() {
        let (store, report) = NoteStore::load(MemBackend::corrupted("expected value at line 1"));
        assert!(store.is_empty());
        match report {
            LoadReport::Corrupt { reason, .. } => assert!(reason.contains("expected value")),
            other => panic!("unexpected report {:?}", other),
        }
    }

    #[test]
    fn load_uses_document_key_as_reference() {
        let mut doc = Document::new();
        doc.insert("Psalm 23:1".into(), Note::new("", "shepherd"));
        let (store, report) = NoteStore::load(MemBackend::with_document(doc));
        assert_eq!(report, LoadReport::Loaded { notes: 1 });
        assert_eq!(store.get("Psalm 23:1").unwrap().reference, "Psalm 23:1");
    }

    #[test]
    fn put_then_get_returns_text() {
        let mut store = empty_store();
        assert_eq!(store.put("John 3:16", "God's love").unwrap(), PutOutcome::Created);
        assert_eq!(store.get("John 3:16").unwrap().text, "God's love");
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn put_overwrites_and_reports_outcome() {
        let mut store = empty_store();
        store.put("John 3:16", "first").unwrap();
        assert_eq!(store.put("John 3:16", "second").unwrap(), PutOutcome::Updated);
        assert_eq!(store.put("John 3:16", "second").unwrap(), PutOutcome::Unchanged);
        assert_eq!(store.get("John 3:16").unwrap().text, "second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn put_is_idempotent() {
        let mut once = empty_store();
        once.put("Romans 8:28", "all things").unwrap();

        let mut twice = empty_store();
        twice.put("Romans 8:28", "all things").unwrap();
        twice.put("Romans 8:28", "all things").unwrap();

        assert_eq!(once.document(), twice.document());
        assert_eq!(once.backend().saved(), twice.backend().saved());
    }

    #[test]
    fn delete_then_get_is_absent_and_second_delete_is_noop() {
        let mut store = empty_store();
        store.put("John 3:16", "God's love").unwrap();

        let removed = store.delete("John 3:16").unwrap();
        assert_eq!(removed.map(|n| n.text), Some("God's love".to_string()));
        assert!(store.get("John 3:16").is_none());

        let writes = store.backend().write_count();
        assert!(store.delete("John 3:16").unwrap().is_none());
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn update_requires_existing_note() {
        let mut store = empty_store();
        assert!(store.update("Genesis 1:1", "beginning").unwrap().is_none());
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);

        store.put("Genesis 1:1", "beginning").unwrap();
        let previous = store.update("Genesis 1:1", "in the beginning").unwrap();
        assert_eq!(previous.unwrap().text, "beginning");
        assert_eq!(store.get("Genesis 1:1").unwrap().text, "in the beginning");
    }

    #[test]
    fn list_is_sorted() {
        let mut store = empty_store();
        store.put("Romans 8:28", "a").unwrap();
        store.put("Genesis 1:1", "b").unwrap();
        store.put("John 3:16", "c").unwrap();
        assert_eq!(store.list(), vec!["Genesis 1:1", "John 3:16", "Romans 8:28"]);
    }

    #[test]
    fn failed_write_keeps_memory_state_and_retry_succeeds() {
        let mut store = empty_store();
        store.backend().set_simulate_write_error(true);
        assert!(store.put("John 1:1", "the Word").is_err());
        assert_eq!(store.get("John 1:1").unwrap().text, "the Word");
        assert!(store.backend().saved().is_none());

        store.backend().set_simulate_write_error(false);
        assert_eq!(store.put("John 1:1", "the Word").unwrap(), PutOutcome::Unchanged);
        assert_eq!(store.backend().saved().unwrap().len(), 1);
    }
}
