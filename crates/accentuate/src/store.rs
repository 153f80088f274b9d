//! The preference store: single source of truth for the theme preferences.

use crate::effects::{plan, plan_full, EffectRunner};
use crate::storage::Storage;
use crate::style::StyleSink;
use crate::theme::{Accent, Change, Mode, ThemePreference};

/// Handle returned by [`PreferenceStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ThemePreference)>;

/// Holds the current [`ThemePreference`] and mirrors every change to
/// storage and style.
///
/// All setters are synchronous: when one returns, the in-memory value,
/// the storage entry, the style root and every observer are up to date.
/// Storage failures are logged and otherwise ignored.
///
/// # Example
///
/// ```rust
/// use accentuate::{Accent, MemoryStorage, Mode, PreferenceStore, Storage, StyleRoot};
///
/// let storage = MemoryStorage::new();
/// let root = StyleRoot::new();
/// let mut store = PreferenceStore::new(storage.clone(), root.clone());
///
/// store.set_mode(Mode::Dark);
/// store.set_primary_color(Accent::Green);
///
/// assert!(root.has_class("dark"));
/// assert_eq!(root.resolve("--color-primary").unwrap(), "#10b981");
/// assert_eq!(storage.get("primaryColor").as_deref(), Some("green"));
///
/// // A new store on the same storage picks the values back up.
/// let reloaded = PreferenceStore::new(storage, StyleRoot::new());
/// assert_eq!(reloaded.get(), store.get());
/// ```
pub struct PreferenceStore {
    state: ThemePreference,
    runner: EffectRunner,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
    deferred: bool,
    pending: Vec<ThemePreference>,
    lent: Vec<SubscriptionId>,
    revoked: Vec<SubscriptionId>,
}

impl PreferenceStore {
    /// Creates a store seeded from `storage`.
    ///
    /// The loaded snapshot is immediately written back and pushed to
    /// `style`, so storage holds normalized tokens and the style root is
    /// in sync before the first read.
    pub fn new(storage: impl Storage + 'static, style: impl StyleSink + 'static) -> Self {
        let state = ThemePreference::load(&storage);
        let mut runner = EffectRunner::new(Box::new(storage), Box::new(style));
        runner.apply(&plan_full(&state));
        log::debug!(
            "loaded theme preferences: mode={} primary={} secondary={}",
            state.mode,
            state.primary_color,
            state.secondary_color
        );
        Self {
            state,
            runner,
            observers: Vec::new(),
            next_id: 0,
            deferred: false,
            pending: Vec::new(),
            lent: Vec::new(),
            revoked: Vec::new(),
        }
    }

    /// Returns the current preferences.
    pub fn get(&self) -> ThemePreference {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn primary_color(&self) -> Accent {
        self.state.primary_color
    }

    pub fn secondary_color(&self) -> Accent {
        self.state.secondary_color
    }

    pub fn storage(&self) -> &dyn Storage {
        self.runner.storage()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.dispatch(Change::Mode(mode));
    }

    pub fn set_primary_color(&mut self, accent: Accent) {
        self.dispatch(Change::PrimaryColor(accent));
    }

    pub fn set_secondary_color(&mut self, accent: Accent) {
        self.dispatch(Change::SecondaryColor(accent));
    }

    /// Sets the mode from a raw token; unknown tokens select light.
    pub fn set_mode_token(&mut self, token: &str) {
        self.set_mode(Mode::from_token_or_default(token));
    }

    /// Sets the primary accent from a raw token; unknown tokens select blue.
    pub fn set_primary_token(&mut self, token: &str) {
        self.set_primary_color(Accent::from_token_or(
            token,
            ThemePreference::DEFAULT_PRIMARY,
        ));
    }

    /// Sets the secondary accent from a raw token; unknown tokens select red.
    pub fn set_secondary_token(&mut self, token: &str) {
        self.set_secondary_color(Accent::from_token_or(
            token,
            ThemePreference::DEFAULT_SECONDARY,
        ));
    }

    /// Applies a change: transition, effects, then observers.
    ///
    /// Effects run even when the value is unchanged. Observers are only
    /// notified when the preference actually differs. In deferred mode the
    /// new value is queued until the host drains it.
    pub fn dispatch(&mut self, change: Change) {
        let next = self.state.apply(change);
        let failed = self.runner.apply(&plan(change));
        if failed > 0 {
            log::debug!("{change:?} applied for this session only");
        }

        if next == self.state {
            return;
        }
        log::debug!("theme preference {:?} -> {}", change.field(), change.token());
        self.state = next;
        if self.deferred {
            self.pending.push(next);
            return;
        }
        for (_, observer) in self.observers.iter_mut() {
            observer(&next);
        }
    }

    /// Queues notifications instead of calling observers from `dispatch`.
    ///
    /// A host that guards the store behind a borrow uses this to run
    /// observers after the borrow is released, so they can read the store.
    pub(crate) fn set_deferred(&mut self, deferred: bool) {
        self.deferred = deferred;
    }

    /// Drains the preferences queued while deferred, oldest first.
    pub(crate) fn take_pending(&mut self) -> Vec<ThemePreference> {
        std::mem::take(&mut self.pending)
    }

    /// Hands the observers out for notification outside the store.
    ///
    /// Until [`return_observers`](Self::return_observers) is called,
    /// unsubscribing a lent observer is recorded and applied on return.
    pub(crate) fn lend_observers(&mut self) -> Vec<(SubscriptionId, Observer)> {
        let observers = std::mem::take(&mut self.observers);
        self.lent = observers.iter().map(|(id, _)| *id).collect();
        observers
    }

    /// Takes back lent observers, ahead of any subscribed in the meantime.
    pub(crate) fn return_observers(&mut self, mut observers: Vec<(SubscriptionId, Observer)>) {
        observers.retain(|(id, _)| !self.revoked.contains(id));
        observers.append(&mut self.observers);
        self.observers = observers;
        self.lent.clear();
        self.revoked.clear();
    }

    /// Re-applies every field to storage and style.
    pub fn sync(&mut self) {
        self.runner.apply(&plan_full(&self.state));
    }

    /// Registers an observer called after every change, in registration order.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&ThemePreference) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        if self.observers.len() != before {
            return true;
        }
        if self.lent.contains(&id) && !self.revoked.contains(&id) {
            self.revoked.push(id);
            return true;
        }
        false
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
