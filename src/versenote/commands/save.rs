use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, PutOutcome, StorageBackend};

use super::helpers::require_note;

/// Create or overwrite the note for a reference.
pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, reference: &str, text: &str) -> Result<CmdResult> {
    let (reference, text) = require_note(reference, text)?;
    let outcome = store.put(reference, text)?;

    let mut result = CmdResult::default().with_affected_notes(vec![Note::new(reference, text)]);
    result.add_message(match outcome {
        PutOutcome::Created => CmdMessage::success(format!("Added interpretation for {}", reference)),
        PutOutcome::Updated => CmdMessage::success(format!("Updated interpretation for {}", reference)),
        PutOutcome::Unchanged => CmdMessage::info(format!("Interpretation for {} is unchanged", reference)),
    });
    Ok(result)
}
