//! Theme handling
//!
//! The theme is applied by setting `data-theme` on the document element;
//! `styles.css` keys its variable palette on that attribute. The stored
//! preference wins, otherwise the system `prefers-color-scheme` decides.

use moodtrack::store::{EntryStore, StorageBackend, Theme};

/// Resolve the initial theme, apply it, and persist the resolved choice
pub fn init_theme<B: StorageBackend>(store: &EntryStore<B>) -> Theme {
    let theme = store.load_theme().unwrap_or_else(system_theme);
    apply_theme(theme);
    store.save_theme(theme);
    theme
}

/// Apply a theme by setting `data-theme` on the document element
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn system_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false);

    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Accent color for a mood score: red through amber to green
pub fn mood_color(mood: u8) -> &'static str {
    match mood {
        1 => "#EF4444", // red-500
        2 => "#FB923C", // orange-400
        3 => "#F59E0B", // amber-500
        4 => "#34D399", // emerald-400
        5 => "#10B981", // emerald-500
        _ => "#2563EB", // blue-600
    }
}

/// Emoji for a mood score
pub fn mood_emoji(mood: u8) -> &'static str {
    match mood {
        1 => "😞",
        2 => "🙁",
        3 => "😐",
        4 => "🙂",
        5 => "😄",
        _ => "😐",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_scale_is_total() {
        for mood in 0..=6u8 {
            assert!(!mood_color(mood).is_empty());
            assert!(!mood_emoji(mood).is_empty());
        }
        assert_ne!(mood_color(1), mood_color(5));
    }
}
