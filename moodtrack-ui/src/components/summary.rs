//! Summary Cards Component
//!
//! The four stat cards: 7-day average, 30-day average, best streak, and
//! total entries, recomputed whenever the collection changes.

use chrono::Utc;
use leptos::*;
use moodtrack::stats::Summary;

use crate::state::global::GlobalState;

/// Summary metrics cards
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let summary = create_memo(move |_| {
        state
            .entries
            .with(|entries| Summary::compute(entries, Utc::now().date_naive()))
    });

    view! {
        <section class="surface card" aria-label="Summary">
            <div class="card-header">
                <h2>"Summary"</h2>
            </div>
            <div class="summary-grid">
                <SummaryItem label="Avg (7d)" value=Signal::derive(move || summary.get().avg7.to_string()) />
                <SummaryItem label="Avg (30d)" value=Signal::derive(move || summary.get().avg30.to_string()) />
                <SummaryItem label="Best streak" value=Signal::derive(move || summary.get().best_streak.to_string()) />
                <SummaryItem label="Total entries" value=Signal::derive(move || summary.get().total.to_string()) />
            </div>
        </section>
    }
}

#[component]
fn SummaryItem(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="summary-item" role="group" aria-label=label>
            <div class="summary-value">{move || value.get()}</div>
            <div class="summary-label">{label}</div>
        </div>
    }
}
