//! Mood Tracker
//!
//! A local-first mood journal built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily mood logging (1-5) with tags and notes
//! - Summary statistics: rolling averages and best streak
//! - Line and bar charts of mood over time
//! - Light/dark theme with stored preference
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: the entry collection persists to the
//! browser's localStorage through the `moodtrack` core crate.

use leptos::*;

mod app;
mod components;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
