use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VerseError};
use crate::model::Lookup;
use std::fs;
use std::path::Path;

/// Write the rendered lookup to a text file.
pub fn run(lookup: &Lookup, path: &Path) -> Result<CmdResult> {
    let text = lookup.to_plain_text();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(VerseError::Io)?;
    }
    fs::write(path, text).map_err(VerseError::Io)?;

    let mut result = CmdResult::default().with_written_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!("Saved to {}", path.display())));
    Ok(result)
}
