//! Draft normalization
//!
//! Converts a raw [`EntryDraft`] into a canonical [`MoodEntry`]. The form
//! layer already constrains valid ranges before submitting, so this is a
//! total function: every missing or invalid field is replaced with a
//! default rather than rejected.
//!
//! - date: reduced to a bare UTC calendar date; absent or unparseable
//!   dates become today
//! - mood: defaults to 3, then clamps to 1..=5
//! - tags: one comma-delimited string or an already-split list, both
//!   resolved to trimmed non-empty strings
//! - id: kept when present, so re-normalizing an entry is idempotent

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::store::{EntryDraft, MoodEntry, TagsInput};

/// Normalize a draft against the current UTC date
pub fn normalize(draft: EntryDraft) -> MoodEntry {
    normalize_at(draft, Utc::now().date_naive())
}

/// Normalize a draft against an explicit "today"
pub fn normalize_at(draft: EntryDraft, today: NaiveDate) -> MoodEntry {
    let date = draft
        .date
        .as_deref()
        .and_then(parse_date)
        .unwrap_or(today);

    let mood = match draft.mood {
        Some(m) if m.is_finite() && m != 0.0 => m,
        _ => 3.0,
    };
    let mood = mood.clamp(1.0, 5.0).round() as u8;

    let tags = match draft.tags {
        TagsInput::List(list) => canonical_tags(list.iter().map(String::as_str)),
        TagsInput::Csv(csv) => canonical_tags(csv.split(',')),
        TagsInput::None => Vec::new(),
    };

    MoodEntry {
        id: draft
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id),
        date,
        mood,
        tags,
        note: draft.note.unwrap_or_default(),
    }
}

/// Parse a calendar date, accepting `YYYY-MM-DD` or a full RFC 3339
/// datetime (reduced to its UTC calendar date)
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn canonical_tags<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate an entry id: unix millis plus a short random suffix
///
/// Collision-avoidance only, not guaranteed unique.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}-{}", millis, &uuid[..6])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        "2024-06-15".parse().unwrap()
    }

    #[test]
    fn test_empty_draft_gets_defaults() {
        let entry = normalize_at(EntryDraft::default(), today());

        assert_eq!(entry.date, today());
        assert_eq!(entry.mood, 3);
        assert!(entry.tags.is_empty());
        assert!(entry.note.is_empty());
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_mood_clamped_and_tags_split() {
        let entry = normalize_at(
            EntryDraft {
                mood: Some(9.0),
                tags: TagsInput::Csv("a, b ,,c".to_string()),
                ..Default::default()
            },
            today(),
        );

        assert_eq!(entry.mood, 5);
        assert_eq!(entry.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mood_defaults() {
        for bad in [None, Some(0.0), Some(f64::NAN), Some(f64::INFINITY)] {
            let entry = normalize_at(
                EntryDraft {
                    mood: bad,
                    ..Default::default()
                },
                today(),
            );
            assert_eq!(entry.mood, 3);
        }

        let low = normalize_at(
            EntryDraft {
                mood: Some(-4.0),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(low.mood, 1);
    }

    #[test]
    fn test_mood_always_in_range() {
        for raw in [-100.0, 0.5, 1.0, 2.7, 5.0, 5.4, 1e9] {
            let entry = normalize_at(
                EntryDraft {
                    mood: Some(raw),
                    ..Default::default()
                },
                today(),
            );
            assert!((1..=5).contains(&entry.mood), "mood {} from {}", entry.mood, raw);
        }
    }

    #[test]
    fn test_date_parsing() {
        let plain = normalize_at(
            EntryDraft {
                date: Some("2024-02-29".to_string()),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(plain.date, "2024-02-29".parse().unwrap());

        // Datetime input loses its time-of-day and zone
        let datetime = normalize_at(
            EntryDraft {
                date: Some("2024-03-01T23:30:00+02:00".to_string()),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(datetime.date, "2024-03-01".parse().unwrap());

        let garbage = normalize_at(
            EntryDraft {
                date: Some("not a date".to_string()),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(garbage.date, today());
    }

    #[test]
    fn test_list_tags_are_canonicalized() {
        let entry = normalize_at(
            EntryDraft {
                tags: TagsInput::List(vec![" work ".to_string(), String::new(), "gym".to_string()]),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(entry.tags, vec!["work", "gym"]);
    }

    #[test]
    fn test_existing_id_is_kept() {
        let entry = normalize_at(
            EntryDraft {
                id: Some("1700000000000-abc123".to_string()),
                ..Default::default()
            },
            today(),
        );
        assert_eq!(entry.id, "1700000000000-abc123");
    }

    #[test]
    fn test_generated_id_shape() {
        let entry = normalize_at(EntryDraft::default(), today());

        let (millis, suffix) = entry.id.split_once('-').expect("millis-suffix shape");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 6);
    }
}
