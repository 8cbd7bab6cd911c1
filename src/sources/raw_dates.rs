//! Collects the date strings exactly as they appear in an XML feed.
//!
//! feed-rs only keeps dates it can parse, so the element text of
//! `pubDate`/`published`/`updated`/`dc:date` is read in a separate pass and
//! matched to feed-rs entries by position.

use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDates {
    pub published: Option<String>,
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedDates {
    pub updated: Option<String>,
    /// One slot per `<item>`/`<entry>`, in document order.
    pub entries: Vec<EntryDates>,
}

#[derive(Clone, Copy)]
enum Slot {
    FeedUpdated,
    Published,
    Updated,
}

fn entry_slot(name: &[u8]) -> Option<Slot> {
    match name {
        b"pubDate" | b"published" | b"issued" | b"date" => Some(Slot::Published),
        b"updated" | b"modified" => Some(Slot::Updated),
        _ => None,
    }
}

fn feed_slot(name: &[u8]) -> Option<Slot> {
    match name {
        b"lastBuildDate" | b"updated" | b"pubDate" | b"date" | b"modified" => {
            Some(Slot::FeedUpdated)
        }
        _ => None,
    }
}

fn is_entry(name: &[u8]) -> bool {
    matches!(name, b"item" | b"entry")
}

/// Scan `bytes` for raw date text. Stops quietly at the first XML error and
/// returns what was collected up to there; JSON feeds yield nothing.
pub fn scan(bytes: &[u8]) -> FeedDates {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut dates = FeedDates::default();
    let mut buf = Vec::new();
    let mut in_entry = false;
    // Slot being filled and the local name that closes it
    let mut open: Option<(Slot, Vec<u8>)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if !in_entry && is_entry(&name) {
                    in_entry = true;
                    dates.entries.push(EntryDates::default());
                } else if open.is_none() {
                    let slot = if in_entry {
                        entry_slot(&name)
                    } else {
                        feed_slot(&name)
                    };
                    if let Some(slot) = slot {
                        open = Some((slot, name));
                        text.clear();
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if !in_entry && is_entry(e.local_name().as_ref()) {
                    dates.entries.push(EntryDates::default());
                }
            }
            Ok(Event::Text(t)) if open.is_some() => match t.unescape() {
                Ok(s) => text.push_str(&s),
                Err(_) => text.push_str(&String::from_utf8_lossy(&t)),
            },
            Ok(Event::CData(c)) if open.is_some() => {
                text.push_str(&String::from_utf8_lossy(&c));
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                let name = name.as_ref();
                if let Some((slot, _)) = open.take_if(|(_, closing)| closing.as_slice() == name) {
                    store(&mut dates, slot, text.trim());
                } else if in_entry && is_entry(name) {
                    in_entry = false;
                    open = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Stopped scanning raw feed dates");
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    dates
}

fn store(dates: &mut FeedDates, slot: Slot, value: &str) {
    if value.is_empty() {
        return;
    }
    let target = match slot {
        Slot::FeedUpdated => &mut dates.updated,
        Slot::Published => match dates.entries.last_mut() {
            Some(entry) => &mut entry.published,
            None => return,
        },
        Slot::Updated => match dates.entries.last_mut() {
            Some(entry) => &mut entry.updated,
            None => return,
        },
    };
    if target.is_none() {
        *target = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rss_dates_kept_verbatim() {
        let dates = scan(
            br#"<rss version="2.0"><channel>
  <title>News</title>
  <lastBuildDate>2024-10-02 14:00:00</lastBuildDate>
  <item><title>a</title><pubDate> 2024-10-02 13:45:00 </pubDate></item>
  <item><title>b</title></item>
  <item><title>c</title><pubDate>Posted 02 Oct, 2024</pubDate></item>
</channel></rss>"#,
        );

        assert_eq!(dates.updated.as_deref(), Some("2024-10-02 14:00:00"));
        assert_eq!(dates.entries.len(), 3);
        assert_eq!(
            dates.entries[0].published.as_deref(),
            Some("2024-10-02 13:45:00")
        );
        assert_eq!(dates.entries[1], EntryDates::default());
        assert_eq!(
            dates.entries[2].published.as_deref(),
            Some("Posted 02 Oct, 2024")
        );
    }

    #[test]
    fn test_atom_and_dublin_core() {
        let dates = scan(
            br#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <updated>2024-10-05T00:00:00Z</updated>
  <entry><updated>2024-10-05T08:00:00Z</updated><dc:date>2024-10-02</dc:date></entry>
</feed>"#,
        );

        assert_eq!(dates.updated.as_deref(), Some("2024-10-05T00:00:00Z"));
        assert_eq!(
            dates.entries[0].updated.as_deref(),
            Some("2024-10-05T08:00:00Z")
        );
        assert_eq!(dates.entries[0].published.as_deref(), Some("2024-10-02"));
    }

    #[test]
    fn test_json_feed_yields_nothing() {
        let dates = scan(br#"{"version": "https://jsonfeed.org/version/1.1", "items": []}"#);
        assert!(dates.entries.is_empty());
        assert!(dates.updated.is_none());
    }
}
