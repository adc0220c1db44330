use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, VerseError>;

/// Why a passage lookup produced no text. Carried inside a
/// [`VerseResult`](crate::model::VerseResult) rather than returned as `Err`, so a
/// failed fetch never aborts the surrounding operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote service returned HTTP {0}")]
    Status(u16),

    #[error("no passage text returned.")]
    NoPassage,

    #[error("could not decode response: {0}")]
    Decode(String),
}
