//! Property tests for the preference store.

use accentuate::{
    keys, Accent, Change, MemoryStorage, Mode, PreferenceStore, Storage, StyleRoot,
    ThemePreference,
};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn accent() -> impl Strategy<Value = Accent> {
    prop::sample::select(Accent::ALL.to_vec())
}

fn change() -> impl Strategy<Value = Change> {
    prop_oneof![
        mode().prop_map(Change::Mode),
        accent().prop_map(Change::PrimaryColor),
        accent().prop_map(Change::SecondaryColor),
    ]
}

fn fresh() -> (PreferenceStore, MemoryStorage, StyleRoot) {
    let storage = MemoryStorage::new();
    let root = StyleRoot::new();
    let store = PreferenceStore::new(storage.clone(), root.clone());
    (store, storage, root)
}

proptest! {
    #[test]
    fn set_mode_is_read_back_and_persisted(m in mode()) {
        let (mut store, storage, root) = fresh();
        store.set_mode(m);
        prop_assert_eq!(store.get().mode, m);
        prop_assert_eq!(storage.get(keys::THEME), Some(m.token().to_string()));
        prop_assert_eq!(root.has_class("dark"), m.is_dark());
    }

    #[test]
    fn set_primary_resolves_style_variable(a in accent()) {
        let (mut store, storage, root) = fresh();
        store.set_primary_color(a);
        prop_assert_eq!(store.get().primary_color, a);
        prop_assert_eq!(storage.get(keys::PRIMARY_COLOR), Some(a.token().to_string()));
        prop_assert_eq!(root.resolve("--color-primary").unwrap(), a.hex());
    }

    #[test]
    fn set_secondary_resolves_style_variable(a in accent()) {
        let (mut store, _, root) = fresh();
        store.set_secondary_color(a);
        prop_assert_eq!(store.get().secondary_color, a);
        prop_assert_eq!(root.resolve("--color-secondary").unwrap(), a.hex());
    }

    #[test]
    fn setters_are_idempotent(c in change()) {
        let (mut once, once_storage, once_root) = fresh();
        once.dispatch(c);

        let (mut twice, twice_storage, twice_root) = fresh();
        twice.dispatch(c);
        twice.dispatch(c);

        prop_assert_eq!(once.get(), twice.get());
        prop_assert_eq!(once_storage.snapshot(), twice_storage.snapshot());
        prop_assert_eq!(once_root.to_css(), twice_root.to_css());
    }

    #[test]
    fn reload_restores_last_values(changes in prop::collection::vec(change(), 0..12)) {
        let (mut store, storage, _) = fresh();
        for c in &changes {
            store.dispatch(*c);
        }

        let reloaded = PreferenceStore::new(storage, StyleRoot::new());
        prop_assert_eq!(reloaded.get(), store.get());
    }

    #[test]
    fn changes_leave_other_fields_alone(
        start in prop::collection::vec(change(), 0..6),
        c in change(),
    ) {
        let (mut store, _, _) = fresh();
        for s in &start {
            store.dispatch(*s);
        }
        let before = store.get();
        store.dispatch(c);
        let after = store.get();

        match c {
            Change::Mode(_) => {
                prop_assert_eq!(after.primary_color, before.primary_color);
                prop_assert_eq!(after.secondary_color, before.secondary_color);
            }
            Change::PrimaryColor(_) => {
                prop_assert_eq!(after.mode, before.mode);
                prop_assert_eq!(after.secondary_color, before.secondary_color);
            }
            Change::SecondaryColor(_) => {
                prop_assert_eq!(after.mode, before.mode);
                prop_assert_eq!(after.primary_color, before.primary_color);
            }
        }
    }

    #[test]
    fn unknown_primary_token_falls_back_to_blue(token in "[a-z]{3,12}") {
        prop_assume!(token.parse::<Accent>().is_err());
        let (mut store, storage, _) = fresh();
        store.set_primary_color(Accent::Green);
        store.set_primary_token(&token);
        prop_assert_eq!(store.get().primary_color, Accent::Blue);
        prop_assert_eq!(storage.get(keys::PRIMARY_COLOR), Some("blue".to_string()));
    }
}

#[test]
fn empty_storage_yields_defaults() {
    let (store, _, _) = fresh();
    let pref = store.get();
    assert_eq!(pref, ThemePreference::default());
    assert_eq!(pref.mode, Mode::Light);
    assert_eq!(pref.primary_color, Accent::Blue);
    assert_eq!(pref.secondary_color, Accent::Red);
}

#[test]
fn chartreuse_falls_back_to_blue() {
    let (mut store, _, root) = fresh();
    store.set_primary_color(Accent::Purple);
    store.set_primary_token("chartreuse");
    assert_eq!(store.get().primary_color, Accent::Blue);
    assert_eq!(root.resolve("--color-primary").unwrap(), "#3b82f6");
}
