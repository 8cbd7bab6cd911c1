//! Day-of-month extraction from the inconsistent date strings found in feeds.
//!
//! Strict templates are tried first; when none match, a loose scan looks for
//! a one- or two-digit token flanked by separators. The loose scan can pick up
//! an hour or a year fragment, so it only runs as a last resort.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDateTime};
use regex::Regex;

use super::RawEntry;

/// Templates that carry a zone offset.
const OFFSET_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z", // Wed, 02 Oct 2024 13:45:00 +0000
];

/// Templates parsed without an offset. `%Z` only skips the zone name.
const NAIVE_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %Z", // Wed, 02 Oct 2024 13:45:00 GMT
];

const ISO_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z", // 2024-10-02 13:45:00 +0800
];

const ISO_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S", // 2024-10-02 13:45:00
];

static LOOSE_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\-,\s](\d{1,2})[\s,]").expect("valid day pattern"));

/// Extract the day of month from a free-form date string.
///
/// Returns `None` for empty or unrecognisable input; never fails.
pub fn extract_day(date: &str) -> Option<u32> {
    if date.is_empty() {
        return None;
    }

    strict_day(date).or_else(|| {
        let day = loose_day(date);
        if day.is_some() {
            tracing::debug!(input = date, ?day, "Date matched only by loose day pattern");
        }
        day
    })
}

/// Day of month from the structured timestamps attached to an entry,
/// preferring `published` over `updated`.
pub fn extract_day_from_entry(entry: &RawEntry) -> Option<u32> {
    entry
        .published_parsed
        .or(entry.updated_parsed)
        .map(|dt| dt.day())
}

fn strict_day(date: &str) -> Option<u32> {
    let with_offset = |formats: &[&str]| {
        formats
            .iter()
            .find_map(|f| DateTime::parse_from_str(date, f).ok())
            .map(|dt| dt.day())
    };
    let naive = |formats: &[&str]| {
        formats
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(date, f).ok())
            .map(|dt| dt.day())
    };

    with_offset(OFFSET_FORMATS)
        .or_else(|| naive(NAIVE_FORMATS))
        .or_else(|| with_offset(ISO_OFFSET_FORMATS))
        .or_else(|| naive(ISO_NAIVE_FORMATS))
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.day()))
}

fn loose_day(date: &str) -> Option<u32> {
    let caps = LOOSE_DAY.captures(date)?;
    caps[1]
        .parse::<u32>()
        .ok()
        .filter(|day| (1..=31).contains(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_rfc822_with_offset() {
        assert_eq!(extract_day("Wed, 02 Oct 2024 13:45:00 +0000"), Some(2));
    }

    #[test]
    fn test_rfc822_with_zone_name() {
        assert_eq!(extract_day("Wed, 02 Oct 2024 13:45:00 GMT"), Some(2));
    }

    #[test]
    fn test_iso_without_zone() {
        assert_eq!(extract_day("2024-10-02 13:45:00"), Some(2));
    }

    #[test]
    fn test_iso_with_offset() {
        assert_eq!(extract_day("2024-10-17 08:00:00 +0800"), Some(17));
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(extract_day("2024-10-21T09:30:00Z"), Some(21));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(extract_day(""), None);
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(extract_day("garbage, no date here"), None);
    }

    #[test]
    fn test_loose_match() {
        // Not a strict template: missing seconds and a trailing note
        assert_eq!(extract_day("Posted on 7 March, around noon"), Some(7));
        assert_eq!(extract_day("Oct, 14 2024"), Some(14));
    }

    #[test]
    fn test_loose_match_out_of_range() {
        assert_eq!(extract_day("Issue 00 of the newsletter"), None);
        assert_eq!(extract_day("Top 40 list"), None);
    }

    #[test]
    fn test_entry_prefers_published() {
        let entry = RawEntry::new()
            .with_published_parsed(Utc.with_ymd_and_hms(2024, 10, 2, 13, 45, 0).unwrap())
            .with_updated_parsed(Utc.with_ymd_and_hms(2024, 10, 5, 0, 0, 0).unwrap());

        assert_eq!(extract_day_from_entry(&entry), Some(2));
    }

    #[test]
    fn test_entry_falls_back_to_updated() {
        let entry =
            RawEntry::new().with_updated_parsed(Utc.with_ymd_and_hms(2024, 10, 5, 0, 0, 0).unwrap());

        assert_eq!(extract_day_from_entry(&entry), Some(5));
    }

    #[test]
    fn test_entry_without_timestamps() {
        let entry = RawEntry::new().with_published("Wed, 02 Oct 2024 13:45:00 +0000");
        assert_eq!(extract_day_from_entry(&entry), None);
    }
}
