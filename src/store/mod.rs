//! Mood Tracker entry store
//!
//! Persistence layer for the mood journal:
//!
//! - **types**: Core data structures (MoodEntry, EntryDraft, Theme)
//! - **backend**: Key-value storage seam (localStorage in the browser,
//!   in-memory for tests)
//! - **error**: Error types
//!
//! The persisted state is two independent keys: a JSON array of entries and
//! a theme string. The collection is the single source of truth — every
//! change rewrites the whole array.
//!
//! Failure policy: the data is non-critical client state, so `load` is
//! fail-open (missing or corrupt data becomes an empty collection) and
//! `save` is best-effort (a failed write is logged and swallowed; the
//! in-memory state stays authoritative for the session).

pub mod backend;
pub mod error;
pub mod types;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::{StoreError, StoreResult};
pub use types::{EntryDraft, MoodEntry, TagsInput, Theme};

/// Storage key for the serialized entry collection
pub const ENTRIES_KEY: &str = "moodtrack:entries";

/// Storage key for the theme preference
pub const THEME_KEY: &str = "moodtrack:theme";

/// Entry store over a key-value backend
///
/// `load` returns the collection sorted ascending by date; `save` persists
/// the collection wholesale.
pub struct EntryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> EntryStore<B> {
    /// Create a store over the given backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load all entries, sorted ascending by date
    ///
    /// Missing data, backend failures, and parse failures all yield an
    /// empty collection.
    pub fn load(&self) -> Vec<MoodEntry> {
        let raw = match self.backend.get(ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read entries, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
            Ok(mut entries) => {
                // Stable sort: same-day entries keep insertion order
                entries.sort_by_key(|e| e.date);
                entries
            }
            Err(e) => {
                tracing::warn!("Corrupt entry data, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the whole collection, best-effort
    pub fn save(&self, entries: &[MoodEntry]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize entries, skipping write: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set(ENTRIES_KEY, &raw) {
            tracing::warn!("Failed to persist entries: {}", e);
        }
    }

    /// Load the stored theme preference, if any
    pub fn load_theme(&self) -> Option<Theme> {
        match self.backend.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read theme: {}", e);
                None
            }
        }
    }

    /// Persist the theme preference, best-effort
    pub fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.backend.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
    }
}
