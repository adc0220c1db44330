use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::require_reference;

/// The stored note for a reference, without touching the network.
pub fn run<B: StorageBackend>(store: &NoteStore<B>, reference: &str) -> Result<CmdResult> {
    let reference = require_reference(reference)?;
    let mut result = CmdResult::default();
    match store.get(reference) {
        Some(note) => result.listed_notes.push(note.clone()),
        None => result.add_message(CmdMessage::warning(format!(
            "No interpretation found for {}.",
            reference
        ))),
    }
    Ok(result)
}
