use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

/// All notes, sorted by reference.
pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    let notes: Vec<_> = store
        .list()
        .into_iter()
        .filter_map(|reference| store.get(reference).cloned())
        .collect();
    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No interpretations saved yet."));
    }
    Ok(result.with_listed_notes(notes))
}
