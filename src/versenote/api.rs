//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for the
//! terminal shell. It owns the note store and the passage source and dispatches
//! to `commands/*.rs`; it holds no business logic and does no printing.
//!
//! `VerseApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `VerseApi<FsBackend>`
//! - Testing: `VerseApi<MemBackend>`
//!
//! The passage source is a trait object so a canned source can stand in for
//! the network in tests.
//!
//! Configuration is handled by [`commands::config`] directly, since it needs
//! neither a store nor a passage source.
//!
//! The web shell shares the same commands but keeps its store behind a lock,
//! see [`crate::server`].

use crate::commands;
use crate::error::Result;
use crate::fetch::VerseSource;
use crate::model::Lookup;
use crate::store::{NoteStore, StorageBackend};
use std::path::Path;
use std::sync::Arc;

pub struct VerseApi<B: StorageBackend> {
    store: NoteStore<B>,
    source: Arc<dyn VerseSource>,
}

impl<B: StorageBackend> VerseApi<B> {
    pub fn new(store: NoteStore<B>, source: Arc<dyn VerseSource>) -> Self {
        Self { store, source }
    }

    pub async fn lookup(&self, reference: &str) -> Result<commands::CmdResult> {
        commands::lookup::run(self.source.as_ref(), &self.store, reference).await
    }

    pub fn save_note(&mut self, reference: &str, text: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, reference, text)
    }

    pub fn update_note(&mut self, reference: &str, text: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, reference, text)
    }

    pub fn delete_note(&mut self, reference: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, reference)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_note(&self, reference: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, reference)
    }

    pub fn export_lookup(&self, lookup: &Lookup, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(lookup, path)
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    /// Hand the store and source over to another shell (the web server).
    pub fn into_parts(self) -> (NoteStore<B>, Arc<dyn VerseSource>) {
        (self.store, self.source)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::canned::CannedSource;
    use crate::model::{Passage, VerseResult};
    use crate::store::mem_backend::MemBackend;

    fn api() -> VerseApi<MemBackend> {
        let source = CannedSource::new().otherwise(VerseResult::Passage(Passage {
            text: "In the beginning, God created the heavens and the earth.".into(),
            footnotes: vec![],
            source: "test".into(),
        }));
        let (store, _) = NoteStore::load(MemBackend::new());
        VerseApi::new(store, Arc::new(source))
    }

    #[tokio::test]
    async fn lookup_dispatches_to_source_and_store() {
        let mut api = api();
        api.save_note("Genesis 1:1", "creation").unwrap();

        let lookup = api.lookup("Genesis 1:1").await.unwrap().lookup.unwrap();
        assert!(lookup.verse.text().unwrap().starts_with("In the beginning"));
        assert_eq!(lookup.note.unwrap().text, "creation");
    }

    #[test]
    fn note_operations_dispatch() {
        let mut api = api();
        api.save_note("Genesis 1:1", "creation").unwrap();
        api.update_note("Genesis 1:1", "creation ex nihilo").unwrap();
        assert_eq!(api.show_note("Genesis 1:1").unwrap().listed_notes[0].text, "creation ex nihilo");
        assert_eq!(api.list_notes().unwrap().listed_notes.len(), 1);
        api.delete_note("Genesis 1:1").unwrap();
        assert!(api.store().is_empty());
    }
}
