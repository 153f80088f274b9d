//! Reload round-trips through the file backend.

use accentuate::{
    Accent, FileStorage, Mode, PreferenceStore, Selection, SelectorPanel, Storage, StyleRoot,
    ThemeContext, ThemePreference,
};

#[test]
fn file_backed_store_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let mut store = PreferenceStore::new(FileStorage::open(&path), StyleRoot::new());
        store.set_mode(Mode::Dark);
        store.set_primary_color(Accent::Pink);
        store.set_secondary_color(Accent::Pink);
    }

    let root = StyleRoot::new();
    let store = PreferenceStore::new(FileStorage::open(&path), root.clone());
    assert_eq!(
        store.get(),
        ThemePreference {
            mode: Mode::Dark,
            primary_color: Accent::Pink,
            secondary_color: Accent::Pink,
        }
    );
    assert!(root.has_class("dark"));
    assert_eq!(root.resolve("--color-secondary").unwrap(), "#ec4899");
}

#[test]
fn file_layout_uses_storage_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut store = PreferenceStore::new(FileStorage::open(&path), StyleRoot::new());
    store.set_secondary_color(Accent::Green);

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["primaryColor"], "blue");
    assert_eq!(json["secondaryColor"], "green");
}

#[test]
fn panel_selection_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let ctx = ThemeContext::provide(PreferenceStore::new(
        FileStorage::open(&path),
        StyleRoot::new(),
    ));
    let mut panel = SelectorPanel::new(ctx);
    panel.open();
    panel.select(Selection::Preset {
        mode: Mode::Dark,
        accent: Accent::Yellow,
    });

    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    assert_eq!(reopened.get("primaryColor").as_deref(), Some("yellow"));

    // The drawer flag is not persisted: a fresh panel starts closed.
    let ctx = ThemeContext::provide(PreferenceStore::new(reopened, StyleRoot::new()));
    assert!(!SelectorPanel::new(ctx).is_open());
}
