use super::VerseSource;
use crate::model::VerseResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A deterministic [`VerseSource`] for tests: fixed results per reference and
/// a record of every reference asked for.
#[derive(Default)]
pub struct CannedSource {
    results: HashMap<String, VerseResult>,
    fallback: Option<VerseResult>,
    requests: Mutex<Vec<String>>,
}

impl CannedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reference: &str, result: VerseResult) -> Self {
        self.results.insert(reference.to_string(), result);
        self
    }

    /// Result for any reference without its own entry.
    pub fn otherwise(mut self, result: VerseResult) -> Self {
        self.fallback = Some(result);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl VerseSource for CannedSource {
    async fn fetch(&self, reference: &str) -> VerseResult {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(reference.to_string());
        }
        self.results
            .get(reference)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or(VerseResult::Error(crate::error::FetchError::NoPassage))
    }
}
