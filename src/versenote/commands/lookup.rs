use crate::commands::CmdResult;
use crate::error::Result;
use crate::fetch::VerseSource;
use crate::model::{Lookup, VerseResult};
use crate::store::{NoteStore, StorageBackend};

use super::helpers::require_reference;

/// Fetch the passage and attach the stored note, if any.
///
/// A failed fetch is not an error here: it is carried in the lookup's verse
/// result and rendered in place of the text.
pub async fn run<S, B>(source: &S, store: &NoteStore<B>, reference: &str) -> Result<CmdResult>
where
    S: VerseSource + ?Sized,
    B: StorageBackend,
{
    let reference = require_reference(reference)?;
    let verse = source.fetch(reference).await;
    Ok(CmdResult::default().with_lookup(assemble(store, reference, verse)))
}

/// Attach the stored note to an already fetched verse.
///
/// Split out so callers that share the store behind a lock can fetch first
/// and only take the lock for this part.
pub fn assemble<B: StorageBackend>(store: &NoteStore<B>, reference: &str, verse: VerseResult) -> Lookup {
    let note = store.get(reference).cloned();
    Lookup::new(reference, verse, note)
}
