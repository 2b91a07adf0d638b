//! Navigation Component
//!
//! Header bar with the app brand and the theme toggle.

use leptos::*;
use moodtrack::store::Theme;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    let on_toggle = move |_| state.toggle_theme();

    view! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <div class="brand">
                    <span class="brand-dot" aria-hidden="true"></span>
                    "Mood Tracker"
                </div>
                <button
                    type="button"
                    class="theme-toggle"
                    on:click=on_toggle
                    aria-pressed=move || (theme.get() == Theme::Dark).to_string()
                >
                    {move || match theme.get() {
                        Theme::Light => "🌙 Dark",
                        Theme::Dark => "☀️ Light",
                    }}
                </button>
            </div>
        </nav>
    }
}
