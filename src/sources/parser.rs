use std::sync::LazyLock;

use feed_rs::model::{Entry, Feed, Link};
use feed_rs::parser;
use regex::{Captures, Regex};

use super::raw_dates::{self, EntryDates, FeedDates};
use crate::domain::{RawEntry, RawFeed};
use crate::errors::{DigestError, DigestResult};

static AMPERSAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+;|#x[0-9a-fA-F]+;|[A-Za-z][A-Za-z0-9]*;)?").expect("valid entity pattern")
});

/// Parse a feed document (RSS, Atom or JSON Feed) into a `RawFeed`.
///
/// A document the strict parser rejects gets one repair attempt; if the
/// repaired markup parses, the result is flagged as malformed instead of
/// failing.
///
/// Date strings are kept as written in the document; the timestamps feed-rs
/// managed to parse are carried alongside as `*_parsed`.
pub fn parse_document(bytes: &[u8]) -> DigestResult<RawFeed> {
    match parser::parse(bytes) {
        Ok(feed) => Ok(raw_feed(feed, raw_dates::scan(bytes), None)),
        Err(strict) => {
            let repaired = repair_markup(bytes);
            match parser::parse(repaired.as_bytes()) {
                Ok(feed) => Ok(raw_feed(
                    feed,
                    raw_dates::scan(repaired.as_bytes()),
                    Some(strict.to_string()),
                )),
                Err(_) => Err(DigestError::FeedParse(strict.to_string())),
            }
        }
    }
}

/// Fix the markup problems that commonly break otherwise usable feeds:
/// a BOM or whitespace before the prolog, XML-illegal control characters and
/// unescaped ampersands.
pub fn repair_markup(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_start_matches('\u{feff}').trim_start();

    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect();

    AMPERSAND
        .replace_all(&cleaned, |caps: &Captures| match caps.get(1) {
            Some(entity) => format!("&{}", entity.as_str()),
            None => "&amp;".to_string(),
        })
        .into_owned()
}

fn raw_feed(feed: Feed, dates: FeedDates, malformed: Option<String>) -> RawFeed {
    // Raw dates are matched to entries by position, so only trust them when
    // both passes saw the same entries
    let mut entry_dates = if dates.entries.len() == feed.entries.len() {
        dates.entries
    } else {
        tracing::debug!(
            scanned = dates.entries.len(),
            parsed = feed.entries.len(),
            "Entry count mismatch, using parsed dates only"
        );
        Vec::new()
    };
    entry_dates.resize(feed.entries.len(), EntryDates::default());

    RawFeed {
        title: feed.title.map(|t| t.content),
        description: feed.description.map(|d| d.content),
        link: primary_link(&feed.links),
        language: feed.language,
        updated: dates
            .updated
            .or_else(|| feed.updated.map(|dt| dt.to_rfc2822())),
        entries: feed
            .entries
            .into_iter()
            .zip(entry_dates)
            .map(|(entry, dates)| raw_entry(entry, dates))
            .collect(),
        malformed,
    }
}

fn raw_entry(entry: Entry, dates: EntryDates) -> RawEntry {
    let summary = entry.summary.map(|s| s.content);
    let description = summary
        .clone()
        .or_else(|| entry.content.and_then(|c| c.body));

    RawEntry {
        title: entry.title.map(|t| t.content),
        link: entry.links.into_iter().next().map(|l| l.href),
        description,
        summary,
        published: dates
            .published
            .or_else(|| entry.published.map(|dt| dt.to_rfc2822())),
        updated: dates
            .updated
            .or_else(|| entry.updated.map(|dt| dt.to_rfc2822())),
        author: entry.authors.into_iter().next().map(|p| p.name),
        tags: entry.categories.into_iter().map(|c| c.term).collect(),
        published_parsed: entry.published,
        updated_parsed: entry.updated,
    }
}

/// The feed's site link: the first link that is not a `rel="self"` pointer
/// back at the feed document.
fn primary_link(links: &[Link]) -> Option<String> {
    links
        .iter()
        .find(|l| l.rel.as_deref() != Some("self"))
        .or_else(|| links.first())
        .map(|l| l.href.clone())
}
