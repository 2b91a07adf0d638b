//! Entry Form Component
//!
//! Form for logging a mood entry: mood segment (1-5), date, tags, note.
//! Validation happens here (date required, mood in range) before the draft
//! is handed to the normalizer; failures surface inline and block the
//! submission.

use chrono::Utc;
use leptos::*;
use moodtrack::store::{EntryDraft, TagsInput};

use crate::state::global::GlobalState;
use crate::state::theme::{mood_color, mood_emoji};

/// Mood entry form component
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let today = Utc::now().date_naive().to_string();
    let (mood, set_mood) = create_signal(3u8);
    let (date, set_date) = create_signal(today);
    let (tags, set_tags) = create_signal(String::new());
    let (note, set_note) = create_signal(String::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if date.get().is_empty() {
            set_error.set(Some("Please select a date.".to_string()));
            return;
        }
        let m = mood.get();
        if !(1..=5).contains(&m) {
            set_error.set(Some("Please select a mood between 1 and 5.".to_string()));
            return;
        }
        set_error.set(None);

        let entry = state.add_entry(EntryDraft {
            date: Some(date.get()),
            mood: Some(m as f64),
            tags: TagsInput::Csv(tags.get()),
            note: Some(note.get()),
            id: None,
        });
        state.show_success(&format!("Logged mood {} for {}", entry.mood, entry.date));

        // Reset note and tags only; mood and date stay for quick re-logging
        set_tags.set(String::new());
        set_note.set(String::new());
    };

    view! {
        <form class="surface card" on:submit=on_submit aria-label="Log your mood">
            <div class="card-header">
                <h2>"Log your mood"</h2>
            </div>

            <div class="section">
                <div class="label">"Mood"</div>
                <div class="mood-segment" role="group" aria-label="Mood">
                    {(1..=5u8)
                        .map(|value| {
                            let selected = move || mood.get() == value;
                            view! {
                                <button
                                    type="button"
                                    class="segment-btn"
                                    style:border-color=move || {
                                        if selected() { mood_color(value) } else { "transparent" }
                                    }
                                    aria-pressed=move || selected().to_string()
                                    aria-label=format!("Mood {}", value)
                                    on:click=move |_| set_mood.set(value)
                                >
                                    <div class="segment-emoji">{mood_emoji(value)}</div>
                                    <div class="segment-value">{value}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="section form-grid">
                <div>
                    <label class="label" for="entry-date">"Date"</label>
                    <input
                        id="entry-date"
                        class="input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        required
                    />
                </div>

                <div>
                    <label class="label" for="entry-tags">"Tags (comma separated)"</label>
                    <input
                        id="entry-tags"
                        class="input"
                        type="text"
                        placeholder="work, exercise, friends"
                        prop:value=move || tags.get()
                        on:input=move |ev| set_tags.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="section">
                <label class="label" for="entry-note">"Note (optional)"</label>
                <textarea
                    id="entry-note"
                    class="textarea"
                    rows="3"
                    placeholder="Add some context..."
                    prop:value=move || note.get()
                    on:input=move |ev| set_note.set(event_target_value(&ev))
                ></textarea>
            </div>

            {move || {
                error.get().map(|msg| view! {
                    <div class="form-error" role="alert">{msg}</div>
                })
            }}

            <div class="actions">
                <button type="submit" class="btn">"Add Entry"</button>
            </div>
        </form>
    }
}
