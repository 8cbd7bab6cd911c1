use std::error::Error as _;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Catalog parsing failed: {0}")]
    CatalogParse(String),

    #[error("OPML parsing failed: {0}")]
    OpmlParse(String),

    // Catalog errors
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DigestError {
    /// The message followed by every cause in the source chain, joined with
    /// `: `. Causes whose text is already part of the message are skipped.
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            let text = err.to_string();
            if !text.is_empty() && !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            cause = err.source();
        }
        message
    }
}

pub type DigestResult<T> = Result<T, DigestError>;
