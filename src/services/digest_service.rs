use std::io::{self, Write};

use crate::catalog::Category;
use crate::domain::FeedResult;
use crate::services::normalize_service::FeedNormalizer;
use crate::services::summary_service::SummaryRenderer;
use crate::sources::FeedFetcher;

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, result: &FeedResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Runs one pass over a category: each source is fetched, normalized and
/// rendered before the next one starts.
pub struct DigestService<F: FeedFetcher> {
    normalizer: FeedNormalizer<F>,
    renderer: SummaryRenderer,
}

impl<F: FeedFetcher> DigestService<F> {
    pub fn new(fetcher: F, renderer: SummaryRenderer) -> Self {
        Self {
            normalizer: FeedNormalizer::new(fetcher),
            renderer,
        }
    }

    /// Fetch and render a single feed.
    pub fn show<W: Write>(&self, url: &str, out: &mut W) -> io::Result<FeedResult> {
        let result = self.normalizer.fetch(url);
        self.renderer.render(&result, out)?;
        Ok(result)
    }

    pub fn run<W: Write>(&self, category: &Category, out: &mut W) -> io::Result<RunSummary> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", rule)?;
        writeln!(out, "Category: {}", category.name)?;
        writeln!(out, "Sources: {}", category.sources.len())?;
        writeln!(out, "{}", rule)?;

        let mut summary = RunSummary::default();

        for source in &category.sources {
            writeln!(out, "\nReading {}: {}", source.name, source.url)?;
            let result = self.show(&source.url, out)?;
            summary.record(&result);
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        }

        writeln!(
            out,
            "\nDone: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        )?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Source;
    use crate::domain::{RawEntry, RawFeed};
    use crate::errors::DigestError;
    use crate::services::summary_service::SummaryOptions;
    use crate::sources::traits::MockFeedFetcher;

    fn category() -> Category {
        Category::new(
            "test",
            vec![
                Source::new("Broken", "https://broken.example/feed"),
                Source::new("Working", "https://working.example/feed"),
            ],
        )
    }

    fn fetcher() -> MockFeedFetcher {
        let mut fetcher = MockFeedFetcher::new();
        fetcher.expect_fetch().returning(|url| {
            if url.contains("broken") {
                Err(DigestError::FeedParse("no feed root".to_string()))
            } else {
                Ok(RawFeed {
                    title: Some("Working Feed".to_string()),
                    entries: vec![RawEntry::new().with_title("Hello")],
                    ..Default::default()
                })
            }
        });
        fetcher
    }

    #[test]
    fn test_failure_does_not_stop_other_sources() {
        let service = DigestService::new(fetcher(), SummaryRenderer::default());
        let mut out = Vec::new();

        let summary = service.run(&category(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(summary, RunSummary { succeeded: 1, failed: 1 });
        assert!(output.contains("Error: Feed parsing failed: no feed root"));
        assert!(output.contains("Title: Working Feed"));
        assert!(output.contains("1. Hello"));
        assert!(output.contains("Done: 1 succeeded, 1 failed"));
    }

    #[test]
    fn test_sources_processed_in_order() {
        let service = DigestService::new(fetcher(), SummaryRenderer::default());
        let mut out = Vec::new();

        service.run(&category(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let broken = output.find("Reading Broken").unwrap();
        let working = output.find("Reading Working").unwrap();
        assert!(broken < working);
    }

    #[test]
    fn test_show_single_feed() {
        let service = DigestService::new(
            fetcher(),
            SummaryRenderer::new(SummaryOptions::new(None, Some(1))),
        );
        let mut out = Vec::new();

        let result = service.show("https://working.example/feed", &mut out).unwrap();

        assert!(result.is_success());
        assert!(String::from_utf8(out).unwrap().contains("latest 1"));
    }

    #[test]
    fn test_empty_category() {
        let service = DigestService::new(MockFeedFetcher::new(), SummaryRenderer::default());
        let mut out = Vec::new();

        let summary = service
            .run(&Category::new("empty", vec![]), &mut out)
            .unwrap();

        assert_eq!(summary, RunSummary::default());
    }
}
