use crate::error::Result;
use crate::model::Document;
use std::path::PathBuf;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `NoteStore` handles the "what" (the in-memory mapping and its rules).
pub trait StorageBackend {
    /// Read the whole document.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err(Serialization) if the document exists but is not valid JSON.
    fn load_document(&self) -> Result<Option<Document>>;

    /// Replace the whole document.
    /// MUST NOT leave a half-written document behind on success.
    fn save_document(&self, document: &Document) -> Result<()>;

    /// Where the document lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
