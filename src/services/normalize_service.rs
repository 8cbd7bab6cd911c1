use crate::domain::dates;
use crate::domain::{ArticleRecord, FeedInfo, FeedResult, RawEntry, RawFeed};
use crate::sources::FeedFetcher;

pub const UNKNOWN_FEED_TITLE: &str = "Unknown title";
pub const UNTITLED_ARTICLE: &str = "Untitled";

/// Turns fetched feed documents into `FeedResult`s.
///
/// This is the only place fetch failures are caught: whatever the fetcher
/// returns, the caller gets a `FeedResult` back.
pub struct FeedNormalizer<F: FeedFetcher> {
    fetcher: F,
}

impl<F: FeedFetcher> FeedNormalizer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch `url` and normalize it, converting any failure into an error result.
    pub fn fetch(&self, url: &str) -> FeedResult {
        match self.fetcher.fetch(url) {
            Ok(raw) => {
                if let Some(problem) = &raw.malformed {
                    tracing::warn!(url, problem = %problem, "Feed is malformed, continuing with what parsed");
                }
                normalize(&raw)
            }
            Err(e) => {
                tracing::info!(url, error = %e, "Feed fetch failed");
                FeedResult::error(e.full_message())
            }
        }
    }
}

/// Normalize an already-parsed document. Missing fields get their defaults.
pub fn normalize(raw: &RawFeed) -> FeedResult {
    let articles: Vec<ArticleRecord> = raw.entries.iter().map(normalize_entry).collect();

    let feed_info = FeedInfo {
        title: field(&raw.title, UNKNOWN_FEED_TITLE),
        description: field(&raw.description, ""),
        link: field(&raw.link, ""),
        language: field(&raw.language, ""),
        updated: field(&raw.updated, ""),
        total_entries: articles.len(),
    };

    FeedResult::Success {
        feed_info,
        articles,
    }
}

fn normalize_entry(entry: &RawEntry) -> ArticleRecord {
    ArticleRecord {
        title: field(&entry.title, UNTITLED_ARTICLE),
        link: field(&entry.link, ""),
        description: field(&entry.description, ""),
        summary: field(&entry.summary, ""),
        published: field(&entry.published, ""),
        updated: field(&entry.updated, ""),
        author: field(&entry.author, ""),
        tags: entry.tags.clone(),
        published_day: dates::extract_day_from_entry(entry),
    }
}

fn field(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}
