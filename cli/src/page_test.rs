use super::*;
use backdrop::store::MemoryStore;
use backdrop::{NONE_ID, Theme};

#[test]
fn ready_on_empty_store_shows_none() {
    let display = run_page(SyncConfig::default(), MemoryStore::new(), None);
    assert_eq!(display.control_value, NONE_ID);
    assert_eq!(display.background_image, "");
    assert_eq!(describe(&display), "selector: none\nbackground-image: (unset)");
}

#[test]
fn select_then_ready_behaves_like_reload() {
    let mut store = MemoryStore::new();

    let picked = run_page(SyncConfig::default(), &mut store, Some("wood"));
    assert_eq!(picked.control_value, "wood");

    let reloaded = run_page(SyncConfig::default(), &mut store, None);
    assert_eq!(reloaded, picked);
    assert_eq!(reloaded.background_image, format!("url({})", Theme::Wood.background_url()));
}

#[test]
fn select_unknown_keeps_raw_value_in_store() {
    let mut store = MemoryStore::new();

    let picked = run_page(SyncConfig::default(), &mut store, Some("lava"));
    assert_eq!(picked.control_value, NONE_ID);
    assert_eq!(picked.background_image, "");
    assert_eq!(store.document(), "selectedTheme=lava");

    let reloaded = run_page(SyncConfig::default(), &mut store, None);
    assert_eq!(reloaded.control_value, NONE_ID);
}

#[test]
fn describe_shows_background_value() {
    let display = DisplayState { background_image: "url(x.jpg)".to_owned(), control_value: "fire".to_owned() };
    assert_eq!(describe(&display), "selector: fire\nbackground-image: url(x.jpg)");
}
