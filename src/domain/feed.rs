use serde::{Deserialize, Serialize};

use super::ArticleRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Success,
    Error,
}

impl FeedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedStatus::Success => "success",
            FeedStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Feed-level metadata of a successfully normalized feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedInfo {
    pub title: String,
    pub description: String,
    pub link: String,
    pub language: String,
    pub updated: String,
    pub total_entries: usize,
}

/// Outcome of one fetch+normalize attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FeedResult {
    Success {
        feed_info: FeedInfo,
        articles: Vec<ArticleRecord>,
    },
    Error {
        error: String,
    },
}

impl FeedResult {
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            "unknown error".to_string()
        } else {
            message
        };
        FeedResult::Error { error }
    }

    pub fn status(&self) -> FeedStatus {
        match self {
            FeedResult::Success { .. } => FeedStatus::Success,
            FeedResult::Error { .. } => FeedStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == FeedStatus::Success
    }

    pub fn feed_info(&self) -> Option<&FeedInfo> {
        match self {
            FeedResult::Success { feed_info, .. } => Some(feed_info),
            FeedResult::Error { .. } => None,
        }
    }

    /// Articles in feed order; always empty for an error result.
    pub fn articles(&self) -> &[ArticleRecord] {
        match self {
            FeedResult::Success { articles, .. } => articles,
            FeedResult::Error { .. } => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedResult::Success { .. } => None,
            FeedResult::Error { error } => Some(error),
        }
    }
}
