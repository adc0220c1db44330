use super::backend::StorageBackend;
use crate::error::{VerseError, Result};
use crate::model::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Default file name for the notes document.
pub const DEFAULT_FILE_NAME: &str = "interpretations.json";

/// Stores the document as one pretty-printed JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(VerseError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        dir.join(format!(".interpretations-{}.tmp", Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_document(&self) -> Result<Option<Document>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(VerseError::Io(e)),
        };
        let document: Document =
            serde_json::from_str(&content).map_err(VerseError::Serialization)?;
        Ok(Some(document))
    }

    fn save_document(&self, document: &Document) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(document).map_err(VerseError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(VerseError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(VerseError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
