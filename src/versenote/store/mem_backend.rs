use super::backend::StorageBackend;
use crate::error::{VerseError, Result};
use crate::model::Document;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability; the store only ever touches its
/// backend from one thread at a time.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<Document>>,
    corrupt: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document, as if it had been read from disk.
    pub fn with_document(document: Document) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(document);
        backend
    }

    /// Make the next loads fail the way an unparseable file would.
    pub fn corrupted(reason: &str) -> Self {
        let backend = Self::default();
        *backend.corrupt.borrow_mut() = Some(reason.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The last successfully saved document, if any.
    pub fn saved(&self) -> Option<Document> {
        self.document.borrow().clone()
    }

    /// How many times the whole document was rewritten.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn load_document(&self) -> Result<Option<Document>> {
        if let Some(reason) = self.corrupt.borrow().as_ref() {
            return Err(VerseError::Store(reason.clone()));
        }
        Ok(self.document.borrow().clone())
    }

    fn save_document(&self, document: &Document) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(VerseError::Store("Simulated write error".to_string()));
        }
        *self.document.borrow_mut() = Some(document.clone());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://interpretations.json")
    }
}
