//! Global Application State
//!
//! Reactive state management using Leptos signals. The state container owns
//! the entry collection and theme; components read through signals and emit
//! intents (add, delete, toggle theme) by calling the methods here. Every
//! mutation persists the whole collection before returning.

use std::rc::Rc;

use leptos::*;
use moodtrack::normalize::normalize;
use moodtrack::store::{EntryDraft, EntryStore, MoodEntry, Theme};

use crate::state::theme;
use crate::storage::LocalStorage;

/// Base URL of a future remote API. Unused until the API exists; entries
/// stay local-only regardless of its presence.
const API_BASE: Option<&str> = option_env!("MOODTRACK_API_BASE");

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// All entries, sorted ascending by date
    pub entries: RwSignal<Vec<MoodEntry>>,
    /// Active theme
    pub theme: RwSignal<Theme>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Persistence behind the localStorage seam
    store: Rc<EntryStore<LocalStorage>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let store = Rc::new(EntryStore::new(LocalStorage::new()));

    if let Some(base) = API_BASE {
        web_sys::console::log_1(&format!("Remote API configured (unused): {}", base).into());
    }

    let state = GlobalState {
        entries: create_rw_signal(store.load()),
        theme: create_rw_signal(theme::init_theme(store.as_ref())),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
        store,
    };

    provide_context(state);
}

impl GlobalState {
    /// Normalize and add a new entry, keeping the collection sorted and
    /// persisted. Returns the canonical entry.
    pub fn add_entry(&self, draft: EntryDraft) -> MoodEntry {
        let entry = normalize(draft);
        // TODO: when the remote API lands, POST the entry here and refresh
        // from the server instead of only writing locally.
        self.entries.update(|entries| {
            entries.push(entry.clone());
            // Stable sort: same-day entries keep insertion order
            entries.sort_by_key(|e| e.date);
        });
        self.persist();
        entry
    }

    /// Remove an entry by id and persist the remaining collection
    pub fn delete_entry(&self, id: &str) {
        self.entries.update(|entries| entries.retain(|e| e.id != id));
        self.persist();
    }

    /// Flip the theme, apply it to the document, and persist it
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        theme::apply_theme(next);
        self.store.save_theme(next);
    }

    fn persist(&self) {
        self.entries.with_untracked(|entries| self.store.save(entries));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
