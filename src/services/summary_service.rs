use std::io::{self, Write};

use crate::config::DEFAULT_MAX_ITEMS;
use crate::domain::{ArticleRecord, FeedResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Only keep articles published on this day of the month.
    pub target_day: Option<u32>,
    pub max_items: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            target_day: None,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl SummaryOptions {
    pub fn new(target_day: Option<u32>, max_items: Option<usize>) -> Self {
        Self {
            target_day,
            max_items: max_items.unwrap_or(DEFAULT_MAX_ITEMS),
        }
    }
}

/// Articles to print: filtered by day when a target day is set, then cut to
/// `max_items`, keeping feed order.
pub fn select_articles<'a>(
    articles: &'a [ArticleRecord],
    options: &SummaryOptions,
) -> Vec<&'a ArticleRecord> {
    articles
        .iter()
        .filter(|a| match options.target_day {
            Some(day) => a.effective_day() == Some(day),
            None => true,
        })
        .take(options.max_items)
        .collect()
}

pub struct SummaryRenderer {
    options: SummaryOptions,
}

impl SummaryRenderer {
    pub fn new(options: SummaryOptions) -> Self {
        Self { options }
    }

    pub fn render<W: Write>(&self, result: &FeedResult, out: &mut W) -> io::Result<()> {
        let (info, articles) = match result {
            FeedResult::Error { error } => return writeln!(out, "Error: {}", error),
            FeedResult::Success {
                feed_info,
                articles,
            } => (feed_info, articles),
        };

        writeln!(out, "\n=== Feed ===")?;
        writeln!(out, "Title: {}", info.title)?;
        writeln!(out, "Description: {}", info.description)?;
        writeln!(out, "Link: {}", info.link)?;
        writeln!(out, "Language: {}", info.language)?;
        writeln!(out, "Updated: {}", info.updated)?;
        writeln!(out, "Total entries: {}", info.total_entries)?;

        let heading = match self.options.target_day {
            Some(day) => format!("latest {}, day {} only", self.options.max_items, day),
            None => format!("latest {}", self.options.max_items),
        };
        writeln!(out, "\n=== Articles ({}) ===", heading)?;

        for (i, article) in select_articles(articles, &self.options).iter().enumerate() {
            writeln!(out, "\n{}. {}", i + 1, article.title)?;
            writeln!(out, "   Link: {}", article.link)?;
            writeln!(out, "   Published: {}", article.published)?;
        }

        Ok(())
    }

    pub fn render_to_string(&self, result: &FeedResult) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(result, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new(SummaryOptions::default())
    }
}
