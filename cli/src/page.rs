//! One simulated page load.

use backdrop::control::MemoryControl;
use backdrop::store::PreferenceStore;
use backdrop::style::InlineStyle;
use backdrop::{DisplayState, SyncConfig, ThemeSync};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Load the page against `store` (page ready), then optionally pick
/// `selection` in the theme selector. Returns what the page shows afterwards.
#[must_use]
pub fn run_page<S: PreferenceStore>(config: SyncConfig, store: S, selection: Option<&str>) -> DisplayState {
    let mut sync = ThemeSync::new(config, store, InlineStyle::new());
    let mut control = MemoryControl::new();
    sync.on_ready(&mut control);

    if let Some(theme_id) = selection {
        control.select(theme_id);
        sync.on_change(&mut control);
    }

    DisplayState::capture(sync.surface(), &control)
}

/// Plain-text rendering of a display state.
#[must_use]
pub fn describe(display: &DisplayState) -> String {
    let background = if display.background_image.is_empty() {
        "(unset)"
    } else {
        display.background_image.as_str()
    };
    format!("selector: {}\nbackground-image: {background}", display.control_value)
}
