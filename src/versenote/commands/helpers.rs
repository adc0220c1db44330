use crate::error::{Result, VerseError};

/// Trimmed reference, or an input error when nothing is left.
pub fn require_reference(reference: &str) -> Result<&str> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(VerseError::InvalidInput("Please enter a verse.".to_string()));
    }
    Ok(reference)
}

/// Trimmed reference and note text; both must be non-empty.
pub fn require_note<'a>(reference: &'a str, text: &'a str) -> Result<(&'a str, &'a str)> {
    let (reference, text) = (reference.trim(), text.trim());
    if reference.is_empty() || text.is_empty() {
        return Err(VerseError::InvalidInput(
            "Enter verse and interpretation text.".to_string(),
        ));
    }
    Ok((reference, text))
}
