//! The preference record and its pure transitions.

use serde::{Deserialize, Serialize};

use super::mode::Mode;
use super::palette::Accent;
use crate::storage::{keys, Storage};

/// The three independent theme preferences.
///
/// Serializes with the same field names the durable storage uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemePreference {
    #[serde(rename = "theme")]
    pub mode: Mode,
    #[serde(rename = "primaryColor")]
    pub primary_color: Accent,
    #[serde(rename = "secondaryColor")]
    pub secondary_color: Accent,
}

impl ThemePreference {
    pub const DEFAULT_PRIMARY: Accent = Accent::Blue;
    pub const DEFAULT_SECONDARY: Accent = Accent::Red;

    /// Returns the preference that results from applying `change`.
    ///
    /// Only the field named by the change is touched.
    pub fn apply(self, change: Change) -> Self {
        match change {
            Change::Mode(mode) => Self { mode, ..self },
            Change::PrimaryColor(primary_color) => Self {
                primary_color,
                ..self
            },
            Change::SecondaryColor(secondary_color) => Self {
                secondary_color,
                ..self
            },
        }
    }

    /// Reads a snapshot from storage.
    ///
    /// Missing keys take their defaults; unrecognized values fall back to
    /// the default for that field.
    pub fn load(storage: &dyn Storage) -> Self {
        let mode = storage
            .get(keys::THEME)
            .map(|token| Mode::from_token_or_default(&token))
            .unwrap_or_default();
        let primary_color = storage
            .get(keys::PRIMARY_COLOR)
            .map(|token| Accent::from_token_or(&token, Self::DEFAULT_PRIMARY))
            .unwrap_or(Self::DEFAULT_PRIMARY);
        let secondary_color = storage
            .get(keys::SECONDARY_COLOR)
            .map(|token| Accent::from_token_or(&token, Self::DEFAULT_SECONDARY))
            .unwrap_or(Self::DEFAULT_SECONDARY);

        Self {
            mode,
            primary_color,
            secondary_color,
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            primary_color: Self::DEFAULT_PRIMARY,
            secondary_color: Self::DEFAULT_SECONDARY,
        }
    }
}

/// Names one of the three preference fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Mode,
    PrimaryColor,
    SecondaryColor,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Mode, Field::PrimaryColor, Field::SecondaryColor];

    /// The durable storage key the field persists under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Field::Mode => keys::THEME,
            Field::PrimaryColor => keys::PRIMARY_COLOR,
            Field::SecondaryColor => keys::SECONDARY_COLOR,
        }
    }
}

/// A single-field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Mode(Mode),
    PrimaryColor(Accent),
    SecondaryColor(Accent),
}

impl Change {
    pub fn field(self) -> Field {
        match self {
            Change::Mode(_) => Field::Mode,
            Change::PrimaryColor(_) => Field::PrimaryColor,
            Change::SecondaryColor(_) => Field::SecondaryColor,
        }
    }

    /// The token written to storage for this change.
    pub fn token(self) -> &'static str {
        match self {
            Change::Mode(mode) => mode.token(),
            Change::PrimaryColor(accent) | Change::SecondaryColor(accent) => accent.token(),
        }
    }

    /// The changes that rebuild `pref` from scratch, one per field.
    pub fn all_of(pref: &ThemePreference) -> [Change; 3] {
        [
            Change::Mode(pref.mode),
            Change::PrimaryColor(pref.primary_color),
            Change::SecondaryColor(pref.secondary_color),
        ]
    }
}
