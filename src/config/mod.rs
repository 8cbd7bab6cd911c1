use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{DigestError, DigestResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_ITEMS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub category: Option<String>,
    pub timeout: Duration,
    pub max_items: usize,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DigestResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_path = non_empty("RSS_DIGEST_CATALOG").map(PathBuf::from);
        let category = non_empty("RSS_DIGEST_CATEGORY");

        let timeout_secs = match non_empty("RSS_DIGEST_TIMEOUT_SECS") {
            Some(raw) => parse_positive("RSS_DIGEST_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_items = match non_empty("RSS_DIGEST_MAX_ITEMS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                DigestError::Config(format!("RSS_DIGEST_MAX_ITEMS must be a number, got '{}'", raw))
            })?,
            None => DEFAULT_MAX_ITEMS,
        };

        Ok(Self {
            catalog_path,
            category,
            timeout: Duration::from_secs(timeout_secs),
            max_items,
        })
    }
}

fn parse_positive(key: &str, raw: &str) -> DigestResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(DigestError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            key, raw
        ))),
        Ok(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert!(config.catalog_path.is_none());
        assert!(config.category.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_items, 5);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("RSS_DIGEST_CATALOG", "/etc/feeds.opml"),
            ("RSS_DIGEST_CATEGORY", "ai"),
            ("RSS_DIGEST_TIMEOUT_SECS", "10"),
            ("RSS_DIGEST_MAX_ITEMS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/feeds.opml")));
        assert_eq!(config.category.as_deref(), Some("ai"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_items, 3);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[("RSS_DIGEST_CATEGORY", "  ")])).unwrap();
        assert!(config.category.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_lookup(lookup(&[("RSS_DIGEST_TIMEOUT_SECS", "0")]));
        assert!(matches!(result, Err(DigestError::Config(_))));
    }

    #[test]
    fn test_non_numeric_max_items_rejected() {
        let result = Config::from_lookup(lookup(&[("RSS_DIGEST_MAX_ITEMS", "lots")]));
        assert!(matches!(result, Err(DigestError::Config(_))));
    }
}
