//! Entry List Component
//!
//! Recent entries, latest first, capped at 20, with per-entry delete.

use leptos::*;
use moodtrack::store::MoodEntry;

use crate::state::global::GlobalState;
use crate::state::theme::{mood_color, mood_emoji};

/// How many recent entries to show
const LIST_LIMIT: usize = 20;

/// Note preview length before truncation
const NOTE_PREVIEW_CHARS: usize = 120;

/// List of recent entries, latest first
#[component]
pub fn EntryList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let recent = create_memo(move |_| {
        let mut entries = state.entries.get();
        // Stable reverse-by-date keeps same-day insertion order
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(LIST_LIMIT);
        entries
    });

    view! {
        {move || {
            if recent.get().is_empty() {
                view! {
                    <section class="surface card empty-state" aria-label="Recent entries">
                        <div class="empty-title">"No entries yet"</div>
                        <div>"Start by logging your first mood above."</div>
                    </section>
                }.into_view()
            } else {
                view! {
                    <section class="surface card" aria-label="Recent entries">
                        <div class="card-header">
                            <h2>"Recent entries"</h2>
                        </div>
                        <div class="mood-list">
                            {recent.get()
                                .into_iter()
                                .map(|entry| view! { <EntryRow entry=entry /> })
                                .collect_view()}
                        </div>
                    </section>
                }.into_view()
            }
        }}
    }
}

#[component]
fn EntryRow(entry: MoodEntry) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = entry.id.clone();
    let on_delete = move |_| state.delete_entry(&id);

    let date_label = entry.date.format("%b %-d, %Y").to_string();
    let note = note_preview(&entry.note);

    view! {
        <article class="mood-item" aria-label=format!("Mood entry {}", entry.date)>
            <div class="mood-icon" aria-hidden="true">
                <span>{mood_emoji(entry.mood)}</span>
            </div>

            <div class="mood-body">
                <div class="mood-title">
                    <span style:color=mood_color(entry.mood)>
                        {format!("Mood {}", entry.mood)}
                    </span>
                    <span class="meta">{date_label}</span>
                </div>
                <div class="meta">
                    {if entry.tags.is_empty() {
                        view! { <span>"No tags"</span> }.into_view()
                    } else {
                        entry.tags
                            .iter()
                            .map(|tag| view! { <span class="tag-chip">{format!("#{}", tag)}</span> })
                            .collect_view()
                    }}
                </div>
                {note.map(|text| view! { <div class="mood-note">{text}</div> })}
            </div>

            <div>
                <button
                    class="btn delete-btn"
                    on:click=on_delete
                    aria-label=format!("Delete entry on {}", entry.date)
                    title="Delete entry"
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}

/// Truncate long notes for the list view; `None` for empty notes
fn note_preview(note: &str) -> Option<String> {
    if note.is_empty() {
        return None;
    }
    if note.chars().count() > NOTE_PREVIEW_CHARS {
        let preview: String = note.chars().take(NOTE_PREVIEW_CHARS).collect();
        Some(format!("{}…", preview))
    } else {
        Some(note.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_preview() {
        assert_eq!(note_preview(""), None);
        assert_eq!(note_preview("short"), Some("short".to_string()));

        let long = "x".repeat(200);
        let preview = note_preview(&long).unwrap();
        assert_eq!(preview.chars().count(), 121);
        assert!(preview.ends_with('…'));
    }
}
