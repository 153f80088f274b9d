//! Light/dark display mode and system mode detection.

use std::fmt;
use std::str::FromStr;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use serde::{Deserialize, Serialize};

use crate::error::{PreferenceError, TokenKind};

/// The user's preferred display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Every mode, in the order the selector panel lists them.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// The token stored under the `theme` key.
    pub fn token(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        }
    }

    /// Background color of the panel surface in this mode.
    pub fn surface_hex(self) -> &'static str {
        match self {
            Mode::Light => "#ffffff",
            Mode::Dark => "#1f2937",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }

    /// Parses a token, falling back to [`Mode::Light`] when it is unknown.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            log::warn!("unknown mode token '{token}', falling back to light");
            Mode::default()
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Mode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(PreferenceError::unknown(TokenKind::Mode, other)),
        }
    }
}

/// A function reporting whether the environment prefers light or dark.
///
/// Hosts pass one explicitly where a "follow the system" choice is offered,
/// so tests can substitute a fixed answer.
pub type ModeDetector = fn() -> Mode;

/// Asks the operating system for its current light/dark setting.
pub fn detect_system_mode() -> Mode {
    match detect_os_theme() {
        OsThemeMode::Dark => Mode::Dark,
        OsThemeMode::Light => Mode::Light,
    }
}
