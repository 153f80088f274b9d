//! # accentuate - persisted theme preferences
//!
//! `accentuate` keeps three user preferences (light/dark mode, a primary
//! accent and a secondary accent) in one store, persists them to durable
//! key-value storage, and mirrors them to live style variables that the
//! rest of a user interface reads.
//!
//! ## Quick start
//!
//! ```rust
//! use accentuate::{Accent, MemoryStorage, Mode, PreferenceStore, StyleRoot};
//!
//! let root = StyleRoot::new();
//! let mut store = PreferenceStore::new(MemoryStorage::new(), root.clone());
//!
//! store.set_secondary_color(Accent::Yellow);
//! assert_eq!(root.resolve("--color-secondary").unwrap(), "#f59e0b");
//! assert_eq!(store.get().mode, Mode::Light);
//! ```
//!
//! ## Pieces
//!
//! - [`PreferenceStore`]: the source of truth, with setters and observers
//! - [`Storage`]: durable key-value backends ([`MemoryStorage`], [`FileStorage`])
//! - [`StyleRoot`]: the `dark` class and `--color-*` variables
//! - [`ThemeContext`]: the shared handle components receive
//! - [`SelectorPanel`]: the drawer that calls the setters
//!
//! ## Storage layout
//!
//! | Key | Values | Default |
//! |-----|--------|---------|
//! | `theme` | `light`, `dark` | `light` |
//! | `primaryColor` | palette token | `blue` |
//! | `secondaryColor` | palette token | `red` |
//!
//! Unknown tokens, whether passed to a token setter or found in storage,
//! fall back to the field's default and are never persisted.

mod context;
pub mod effects;
mod error;
mod panel;
mod render;
mod storage;
mod store;
pub mod style;
mod theme;
mod util;

pub use context::ThemeContext;
pub use effects::{Effect, EffectRunner};
pub use error::{PreferenceError, TokenKind};
pub use panel::{sections_for, Section, SectionKind, Selection, SelectorPanel, Swatch};
pub use render::{render_panel, swatch, OutputMode, PanelTheme, MISSING_STYLE_INDICATOR};
pub use storage::{keys, FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{PreferenceStore, SubscriptionId};
pub use style::{StyleError, StyleRoot, StyleSink};
pub use theme::{
    detect_system_mode, swatch_hex, Accent, Change, Field, Mode, ModeDetector, ThemePreference,
};
pub use util::{parse_hex, rgb_to_ansi256};
