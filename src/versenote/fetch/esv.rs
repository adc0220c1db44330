use super::{ESV_SOURCE_LABEL, VerseSource, normalize_body};
use crate::error::{FetchError, Result, VerseError};
use crate::model::VerseResult;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::Url;
use reqwest::header::AUTHORIZATION;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.esv.org/v3/passage/text/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fixed formatting flags sent with every lookup.
const FORMAT_FLAGS: &[(&str, &str)] = &[
    ("include-passage-references", "false"),
    ("include-verse-numbers", "true"),
    ("include-first-verse-numbers", "true"),
    ("include-footnotes", "true"),
    ("include-footnote-body", "true"),
    ("include-footnote-markers", "true"),
    ("include-headings", "false"),
    ("include-short-copyright", "false"),
];

/// Client for the ESV passage text API.
pub struct EsvClient {
    client: HttpClient,
    api_url: String,
    api_token: String,
    timeout: Duration,
}

impl EsvClient {
    /// Build a client. The token is sent as `Authorization: Token <token>`.
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerseError::Http(e.to_string()))?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            api_token: api_token.into(),
            timeout,
        })
    }

    /// The full request URL for a reference, query string included.
    pub fn request_url(&self, reference: &str) -> std::result::Result<Url, FetchError> {
        let params = std::iter::once(("q", reference)).chain(FORMAT_FLAGS.iter().copied());
        Url::parse_with_params(&self.api_url, params)
            .map_err(|e| FetchError::Transport(format!("invalid API URL {}: {}", self.api_url, e)))
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            return format!("request timed out after {}s", self.timeout.as_secs());
        }
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

#[async_trait]
impl VerseSource for EsvClient {
    async fn fetch(&self, reference: &str) -> VerseResult {
        let url = match self.request_url(reference) {
            Ok(url) => url,
            Err(e) => return VerseResult::Error(e),
        };
        debug!(%reference, "fetching passage");

        let response = match self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Token {}", self.api_token))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let cause = self.describe(&e);
                warn!(%reference, error = %cause, "passage request failed");
                return VerseResult::Error(FetchError::Transport(cause));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%reference, status = status.as_u16(), "passage service returned an error status");
            return VerseResult::Error(FetchError::Status(status.as_u16()));
        }

        match response.bytes().await {
            Ok(body) => normalize_body(&body, ESV_SOURCE_LABEL),
            Err(e) => VerseResult::Error(FetchError::Transport(self.describe(&e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EsvClient {
        EsvClient::new(DEFAULT_API_URL, "secret", Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap()
    }

    #[test]
    fn request_url_carries_reference_and_flags() {
        let url = client().request_url("John 3:16").unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(pairs[0], ("q".to_string(), "John 3:16".to_string()));
        for (key, value) in FORMAT_FLAGS {
            assert!(
                pairs.contains(&(key.to_string(), value.to_string())),
                "missing flag {}",
                key
            );
        }
        assert!(url.as_str().starts_with(DEFAULT_API_URL));
    }

    #[test]
    fn footnote_markers_are_requested_with_footnotes() {
        let url = client().request_url("Genesis 1:1").unwrap();
        let query = url.query().unwrap_or_default();
        assert!(query.contains("include-footnotes=true"));
        assert!(query.contains("include-footnote-markers=true"));
    }

    #[test]
    fn invalid_api_url_is_reported_as_error() {
        let client = EsvClient::new("not a url", "secret", Duration::from_secs(1)).unwrap();
        assert!(matches!(client.request_url("John 3:16"), Err(FetchError::Transport(_))));
    }
}
