//! Side effects of preference changes, kept apart from the state transition.
//!
//! [`plan`] turns a [`Change`] into a list of [`Effect`]s without touching
//! anything; [`EffectRunner`] applies them to a [`Storage`] and a
//! [`StyleSink`]. Tests can inspect plans directly or hand the runner
//! recording implementations.

use crate::storage::Storage;
use crate::style::{var_of, StyleSink, DARK_CLASS, PRIMARY_VARIABLE, SECONDARY_VARIABLE};
use crate::theme::{Change, ThemePreference};

/// One externally visible consequence of a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write `value` under `key` in durable storage.
    Persist {
        key: &'static str,
        value: &'static str,
    },
    /// Add or remove a class on the style root.
    ToggleClass {
        class: &'static str,
        enabled: bool,
    },
    /// Set a style variable on the root.
    SetVariable {
        name: &'static str,
        value: String,
    },
}

/// Returns the effects that mirror `change` to storage and style.
pub fn plan(change: Change) -> Vec<Effect> {
    let persist = Effect::Persist {
        key: change.field().storage_key(),
        value: change.token(),
    };
    let style = match change {
        Change::Mode(mode) => Effect::ToggleClass {
            class: DARK_CLASS,
            enabled: mode.is_dark(),
        },
        Change::PrimaryColor(accent) => Effect::SetVariable {
            name: PRIMARY_VARIABLE,
            value: var_of(&accent.variable()),
        },
        Change::SecondaryColor(accent) => Effect::SetVariable {
            name: SECONDARY_VARIABLE,
            value: var_of(&accent.variable()),
        },
    };
    vec![style, persist]
}

/// Returns the effects that mirror every field of `pref`.
pub fn plan_full(pref: &ThemePreference) -> Vec<Effect> {
    Change::all_of(pref).into_iter().flat_map(plan).collect()
}

/// Applies effects to a storage backend and a style sink.
pub struct EffectRunner {
    storage: Box<dyn Storage>,
    style: Box<dyn StyleSink>,
}

impl EffectRunner {
    pub fn new(storage: Box<dyn Storage>, style: Box<dyn StyleSink>) -> Self {
        Self { storage, style }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Applies `effects` in order and returns how many storage writes failed.
    ///
    /// A failed write does not stop the remaining effects; the failure is
    /// logged and the in-session style still updates.
    pub fn apply(&mut self, effects: &[Effect]) -> usize {
        let mut failed = 0;
        for effect in effects {
            match effect {
                Effect::Persist { key, value } => {
                    if let Err(err) = self.storage.set(key, value) {
                        log::warn!("could not persist {key}={value}: {err}");
                        failed += 1;
                    }
                }
                Effect::ToggleClass { class, enabled } => self.style.set_class(class, *enabled),
                Effect::SetVariable { name, value } => self.style.set_variable(name, value),
            }
        }
        failed
    }
}
