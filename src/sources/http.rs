use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::domain::RawFeed;
use crate::errors::{DigestError, DigestResult};
use crate::sources::parser;
use crate::sources::traits::FeedFetcher;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches feeds over HTTP(S), or from disk for `file://` URLs and plain paths.
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_bytes(&self, url: &str) -> DigestResult<Vec<u8>> {
        match Url::parse(url) {
            Ok(parsed) => match parsed.scheme() {
                "http" | "https" => {
                    let response = self.client.get(parsed).send()?.error_for_status()?;
                    Ok(response.bytes()?.to_vec())
                }
                "file" => {
                    let path = parsed
                        .to_file_path()
                        .map_err(|_| DigestError::InvalidUrl(url.to_string()))?;
                    Ok(std::fs::read(path)?)
                }
                other => Err(DigestError::UnsupportedScheme(other.to_string())),
            },
            // Not an absolute URL: treat it as a local path
            Err(_) if Path::new(url).exists() => Ok(std::fs::read(url)?),
            Err(e) => Err(DigestError::InvalidUrl(format!("{}: {}", url, e))),
        }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for HttpFeedFetcher {
    fn fetch(&self, url: &str) -> DigestResult<RawFeed> {
        tracing::debug!(url, "Fetching feed");
        let bytes = self.fetch_bytes(url)?;
        parser::parse_document(&bytes)
    }
}
