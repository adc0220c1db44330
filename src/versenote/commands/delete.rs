use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::require_reference;

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, reference: &str) -> Result<CmdResult> {
    let reference = require_reference(reference)?;
    let mut result = CmdResult::default();

    match store.delete(reference)? {
        Some(note) => {
            result.add_message(CmdMessage::success(format!(
                "Deleted interpretation for {}",
                reference
            )));
            result.affected_notes.push(note);
        }
        None => result.add_message(CmdMessage::warning("No interpretation found to delete.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn deletes_then_reports_nothing_to_delete() {
        let (mut store, _) = NoteStore::load(MemBackend::new());
        store.put("John 3:16", "God's love").unwrap();

        let first = run(&mut store, "John 3:16").unwrap();
        assert!(!first.has_warnings());
        assert_eq!(first.affected_notes[0].text, "God's love");
        assert!(store.get("John 3:16").is_none());

        let second = run(&mut store, "John 3:16").unwrap();
        assert!(second.has_warnings());
        assert!(second.messages[0].content.contains("No interpretation found to delete"));
    }
}
