//! # Mood Tracker
//!
//! Core library for a client-side mood journal: log a daily mood score
//! (1-5) with optional tags and notes, and derive summary statistics and
//! chart series from the locally persisted entry collection.
//!
//! There is no backend. All state lives in the browser's persistent
//! key-value storage; this crate is platform-neutral and the frontend crate
//! (`moodtrack-ui`) plugs localStorage in behind the [`store::StorageBackend`]
//! seam.
//!
//! ## Modules
//!
//! - [`store`]: Entry model and key-value persistence (fail-open load,
//!   best-effort save)
//! - [`normalize`]: Raw draft -> canonical entry normalization
//! - [`stats`]: Derived statistics (rolling averages, best streak,
//!   distribution, chart series)
//! - [`chart`]: Pure chart coordinate mapping
//!
//! ## Quick Start
//!
//! ```rust
//! use moodtrack::normalize::normalize;
//! use moodtrack::stats::Summary;
//! use moodtrack::store::{EntryDraft, EntryStore, MemoryBackend, TagsInput};
//!
//! let store = EntryStore::new(MemoryBackend::new());
//! let mut entries = store.load();
//!
//! let entry = normalize(EntryDraft {
//!     mood: Some(4.0),
//!     tags: TagsInput::Csv("work, exercise".to_string()),
//!     ..Default::default()
//! });
//! entries.push(entry);
//! entries.sort_by_key(|e| e.date);
//! store.save(&entries);
//!
//! let summary = Summary::compute(&entries, chrono::Utc::now().date_naive());
//! assert_eq!(summary.total, 1);
//! ```

pub mod chart;
pub mod normalize;
pub mod stats;
pub mod store;

// Re-export top-level types for convenience
pub use chart::{bar_layout, line_points, Bar};
pub use normalize::{normalize, normalize_at};
pub use stats::{
    average_of, best_streak, distribution, last7_bars, rolling_average, time_series_points,
    DayPoint, Summary,
};
pub use store::{
    EntryDraft, EntryStore, MemoryBackend, MoodEntry, StorageBackend, StoreError, StoreResult,
    TagsInput, Theme,
};
