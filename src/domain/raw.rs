use chrono::{DateTime, Utc};

/// A fetched feed document as handed over by a `FeedFetcher`.
///
/// Every field is optional: absence is normal and the normalizer applies the
/// per-field defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub language: Option<String>,
    pub updated: Option<String>,
    pub entries: Vec<RawEntry>,
    /// Set when the document only parsed after repair; holds the parser's
    /// complaint about the original markup.
    pub malformed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub published_parsed: Option<DateTime<Utc>>,
    pub updated_parsed: Option<DateTime<Utc>>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    pub fn with_published_parsed(mut self, published: DateTime<Utc>) -> Self {
        self.published_parsed = Some(published);
        self
    }

    pub fn with_updated_parsed(mut self, updated: DateTime<Utc>) -> Self {
        self.updated_parsed = Some(updated);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
