//! Core data types for the Mood Tracker store
//!
//! This module defines the types shared across the crate:
//! - `MoodEntry`: a single persisted mood log record
//! - `EntryDraft` / `TagsInput`: raw user input before normalization
//! - `Theme`: the persisted UI theme preference

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single mood log record for one calendar day
///
/// The persisted layout is a JSON array of these records. Field names
/// follow the stored schema (`dateISO` for the calendar date).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    /// Opaque unique id, assigned at creation, immutable
    pub id: String,
    /// Calendar date the mood applies to (no time component)
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    /// Mood score, always in 1..=5 after normalization
    pub mood: u8,
    /// Ordered, trimmed, non-empty tags; may be empty
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text note; may be empty
    #[serde(default)]
    pub note: String,
}

impl MoodEntry {
    /// Create an entry with the given id, date, and mood
    pub fn new(id: impl Into<String>, date: NaiveDate, mood: u8) -> Self {
        Self {
            id: id.into(),
            date,
            mood,
            tags: Vec::new(),
            note: String::new(),
        }
    }

    /// Builder method: add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builder method: set the note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Raw user input for a new entry, before normalization
///
/// Every field is optional; [`crate::normalize`] substitutes defaults and
/// clamps values so drafting can never fail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryDraft {
    /// Existing id, kept as-is when re-normalizing
    #[serde(default)]
    pub id: Option<String>,
    /// Calendar date as entered (`YYYY-MM-DD` or a full datetime)
    #[serde(default, rename = "dateISO")]
    pub date: Option<String>,
    /// Mood score as entered; may be out of range
    #[serde(default)]
    pub mood: Option<f64>,
    /// Tags, either already split or as one comma-delimited string
    #[serde(default)]
    pub tags: TagsInput,
    /// Free-text note
    #[serde(default)]
    pub note: Option<String>,
}

/// Tags as they arrive from the form layer
///
/// The form submits one comma-delimited string; drafts built in code carry
/// an already-split list. Both resolve to one canonical `Vec<String>` during
/// normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    /// No tags provided
    #[default]
    None,
    /// Already-split tag list
    List(Vec<String>),
    /// Single comma-delimited string, e.g. `"work, exercise"`
    Csv(String),
}

/// UI theme preference, persisted as `"light"` / `"dark"`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the persisted string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_entry_serialization_layout() {
        let entry = MoodEntry::new("1700000000000-a1b2c3", date("2024-01-15"), 4)
            .tag("work")
            .note("long day");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"dateISO\":\"2024-01-15\""));
        assert!(json.contains("\"mood\":4"));

        let restored: MoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, restored);
    }

    #[test]
    fn test_entry_lenient_deserialization() {
        // Legacy-shaped records without tags/note still load
        let json = r#"{"id": "x", "dateISO": "2024-01-15", "mood": 3}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert!(entry.tags.is_empty());
        assert!(entry.note.is_empty());
    }

    #[test]
    fn test_tags_input_shapes() {
        let draft: EntryDraft = serde_json::from_str(r#"{"tags": "a, b"}"#).unwrap();
        assert!(matches!(draft.tags, TagsInput::Csv(_)));

        let draft: EntryDraft = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert!(matches!(draft.tags, TagsInput::List(_)));

        let draft: EntryDraft = serde_json::from_str("{}").unwrap();
        assert!(matches!(draft.tags, TagsInput::None));
    }

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
