//! Shared access to one preference store.
//!
//! The composition root builds a single [`PreferenceStore`], wraps it with
//! [`ThemeContext::provide`] and hands clones of the context to every
//! component that reads or sets preferences. A context created with
//! [`ThemeContext::detached`] stands for a component wired up without a
//! provider: using it is a programming error.
//!
//! Observers of a provided store run after the store is released, so they
//! may read through the context (re-render a panel, call
//! [`ThemeContext::get`]) or even set preferences again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::PreferenceError;
use crate::store::PreferenceStore;
use crate::theme::ThemePreference;

#[derive(Debug)]
struct Shared {
    store: RefCell<PreferenceStore>,
    notifying: Cell<bool>,
}

/// Clears the notifying flag even if an observer panics.
struct NotifyingGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Cloneable handle to the application's preference store.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    shared: Option<Rc<Shared>>,
}

impl ThemeContext {
    /// Wraps `store` as the provider every clone of this context shares.
    pub fn provide(mut store: PreferenceStore) -> Self {
        store.set_deferred(true);
        Self {
            shared: Some(Rc::new(Shared {
                store: RefCell::new(store),
                notifying: Cell::new(false),
            })),
        }
    }

    /// A context with no store behind it.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_provided(&self) -> bool {
        self.shared.is_some()
    }

    /// Runs `f` against the store, then notifies observers of any change.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::OutsideProvider`] if the context is
    /// detached, and [`PreferenceError::Busy`] if called from inside
    /// another `try_with` closure on the same store.
    pub fn try_with<R>(
        &self,
        f: impl FnOnce(&mut PreferenceStore) -> R,
    ) -> Result<R, PreferenceError> {
        let shared = self
            .shared
            .as_ref()
            .ok_or(PreferenceError::OutsideProvider)?;
        let result = {
            let mut store = shared
                .store
                .try_borrow_mut()
                .map_err(|_| PreferenceError::Busy)?;
            f(&mut store)
        };
        // Changes made by an observer are picked up by the loop already running.
        if !shared.notifying.get() {
            notify(shared);
        }
        Ok(result)
    }

    /// Runs `f` against the store.
    ///
    /// # Panics
    ///
    /// Panics if the context is detached, or if called from inside another
    /// `with` closure on the same store. A consumer without a provider is
    /// a wiring bug and must not silently fall back to defaults.
    pub fn with<R>(&self, f: impl FnOnce(&mut PreferenceStore) -> R) -> R {
        match self.try_with(f) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the current preferences.
    ///
    /// # Panics
    ///
    /// Panics if the context is detached.
    pub fn get(&self) -> ThemePreference {
        self.with(|store| store.get())
    }
}

/// Delivers queued changes with the store released, until none are left.
fn notify(shared: &Shared) {
    shared.notifying.set(true);
    let _guard = NotifyingGuard(&shared.notifying);
    loop {
        let (pending, mut observers) = {
            let Ok(mut store) = shared.store.try_borrow_mut() else {
                return;
            };
            let pending = store.take_pending();
            if pending.is_empty() {
                return;
            }
            (pending, store.lend_observers())
        };
        for pref in &pending {
            for (_, observer) in observers.iter_mut() {
                observer(pref);
            }
        }
        match shared.store.try_borrow_mut() {
            Ok(mut store) => store.return_observers(observers),
            Err(_) => log::warn!("store busy while returning observers; dropping them"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Selection, SelectorPanel};
    use crate::render::OutputMode;
    use crate::storage::MemoryStorage;
    use crate::style::StyleRoot;
    use crate::theme::{Accent, Mode};

    fn provided() -> ThemeContext {
        ThemeContext::provide(PreferenceStore::new(MemoryStorage::new(), StyleRoot::new()))
    }

    #[test]
    fn test_clones_share_one_store() {
        let ctx = provided();
        let other = ctx.clone();
        ctx.with(|store| store.set_mode(Mode::Dark));
        assert_eq!(other.get().mode, Mode::Dark);
    }

    #[test]
    fn test_try_with_provided() {
        let ctx = provided();
        let accent = ctx.try_with(|store| {
            store.set_primary_color(Accent::Purple);
            store.primary_color()
        });
        assert_eq!(accent, Ok(Accent::Purple));
    }

    #[test]
    fn test_detached_try_with_errors() {
        let ctx = ThemeContext::detached();
        assert!(!ctx.is_provided());
        assert_eq!(
            ctx.try_with(|store| store.get()),
            Err(PreferenceError::OutsideProvider)
        );
    }

    #[test]
    #[should_panic(expected = "outside of a provider")]
    fn test_detached_with_panics() {
        ThemeContext::detached().get();
    }

    #[test]
    fn test_nested_try_with_reports_busy() {
        let ctx = provided();
        let inner = ctx.clone();
        let nested = ctx.try_with(|_| inner.try_with(|store| store.get()));
        assert_eq!(nested, Ok(Err(PreferenceError::Busy)));
    }

    #[test]
    fn test_observer_reads_through_context() {
        let ctx = provided();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = ctx.clone();
        let sink = Rc::clone(&seen);
        ctx.with(|store| {
            store.subscribe(move |_| sink.borrow_mut().push(reader.get().primary_color))
        });

        ctx.with(|store| store.set_primary_color(Accent::Green));
        ctx.with(|store| store.set_primary_color(Accent::Green));

        assert_eq!(*seen.borrow(), vec![Accent::Green]);
    }

    #[test]
    fn test_observer_rerenders_panel() {
        let ctx = provided();
        let mut panel = SelectorPanel::new(ctx.clone());
        let mut view = panel.clone();
        view.open();
        let frames = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&frames);
        ctx.with(|store| {
            store.subscribe(move |_| {
                let frame = view.render(OutputMode::Text).unwrap();
                sink.borrow_mut().push(frame);
            })
        });

        panel.select(Selection::Primary(Accent::Green));

        let frames = frames.borrow();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].contains("[Green]"));
        assert!(!frames[0].contains("[Blue]"));
    }

    #[test]
    fn test_observer_may_set_preferences() {
        let ctx = provided();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let writer = ctx.clone();
        let sink = Rc::clone(&seen);
        ctx.with(|store| {
            store.subscribe(move |pref| {
                sink.borrow_mut().push(pref.mode);
                if pref.mode == Mode::Dark {
                    writer.with(|store| store.set_mode(Mode::Light));
                }
            })
        });

        ctx.with(|store| store.set_mode(Mode::Dark));

        assert_eq!(*seen.borrow(), vec![Mode::Dark, Mode::Light]);
        assert_eq!(ctx.get().mode, Mode::Light);
    }

    #[test]
    fn test_preset_notifies_once_per_field() {
        let ctx = provided();
        let mut panel = SelectorPanel::new(ctx.clone());
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        ctx.with(|store| store.subscribe(move |_| counter.set(counter.get() + 1)));

        panel.select(Selection::Preset {
            mode: Mode::Dark,
            accent: Accent::Pink,
        });

        assert_eq!(count.get(), 2);
    }
}
