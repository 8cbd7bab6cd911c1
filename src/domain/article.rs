use serde::{Deserialize, Serialize};

use super::dates;

/// One normalized feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub link: String,
    pub description: String,
    pub summary: String,
    pub published: String,
    pub updated: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Day of month taken from the entry's structured timestamp, if it had one.
    pub published_day: Option<u32>,
}

impl ArticleRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: String::new(),
            description: String::new(),
            summary: String::new(),
            published: String::new(),
            updated: String::new(),
            author: String::new(),
            tags: Vec::new(),
            published_day: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = published.into();
        self
    }

    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = updated.into();
        self
    }

    pub fn with_published_day(mut self, day: Option<u32>) -> Self {
        self.published_day = day;
        self
    }

    /// The day used for filtering: the structured hint first, then the raw
    /// published string, then the raw updated string.
    pub fn effective_day(&self) -> Option<u32> {
        self.published_day
            .or_else(|| dates::extract_day(&self.published))
            .or_else(|| dates::extract_day(&self.updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_day_prefers_hint() {
        let article = ArticleRecord::new("a")
            .with_published("Wed, 02 Oct 2024 13:45:00 +0000")
            .with_published_day(Some(9));

        assert_eq!(article.effective_day(), Some(9));
    }

    #[test]
    fn test_effective_day_from_published_string() {
        let article = ArticleRecord::new("a").with_published("2024-10-02 13:45:00");
        assert_eq!(article.effective_day(), Some(2));
    }

    #[test]
    fn test_effective_day_falls_back_to_updated() {
        let article = ArticleRecord::new("a")
            .with_published("not a date")
            .with_updated("Sat, 05 Oct 2024 08:00:00 +0000");

        assert_eq!(article.effective_day(), Some(5));
    }

    #[test]
    fn test_effective_day_unknown() {
        let article = ArticleRecord::new("a");
        assert_eq!(article.effective_day(), None);
    }
}
