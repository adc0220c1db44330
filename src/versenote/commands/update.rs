use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::require_note;

/// Replace the text of an existing note. Does nothing for unknown references.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, reference: &str, text: &str) -> Result<CmdResult> {
    let (reference, text) = require_note(reference, text)?;
    let mut result = CmdResult::default();

    match store.update(reference, text)? {
        Some(_) => {
            result.add_message(CmdMessage::success(format!(
                "Updated interpretation for {}",
                reference
            )));
            result.affected_notes.push(Note::new(reference, text));
        }
        None => result.add_message(CmdMessage::warning("No existing interpretation to update.")),
    }
    Ok(result)
}
