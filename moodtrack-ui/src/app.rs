//! App Root Component
//!
//! Single-page composition root: nav, entry form, summary, charts, and the
//! recent-entries list, wired to the global state container.

use leptos::*;

use crate::components::{EntryForm, EntryList, MoodCharts, Nav, SummaryCards, Toast};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state (entries + theme, loaded from localStorage)
    provide_global_state();

    view! {
        <div class="app">
            <Nav />

            <main class="container main">
                <div class="row two">
                    <section>
                        <EntryForm />
                    </section>
                    <section>
                        <SummaryCards />
                    </section>
                </div>

                <div class="section">
                    <MoodCharts />
                </div>

                <div class="section">
                    <EntryList />
                </div>
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
