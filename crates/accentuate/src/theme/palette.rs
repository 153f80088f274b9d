//! The fixed accent palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PreferenceError, TokenKind};
use crate::util::parse_hex;

/// One of the palette tokens an accent may take.
///
/// Accents are never arbitrary colors: each token maps to a concrete hex
/// value and to a base style variable `--color-<token>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
}

impl Accent {
    /// The whole palette, in swatch order.
    pub const ALL: [Accent; 7] = [
        Accent::Blue,
        Accent::Red,
        Accent::Green,
        Accent::Yellow,
        Accent::Purple,
        Accent::Pink,
        Accent::Indigo,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Red => "red",
            Accent::Green => "green",
            Accent::Yellow => "yellow",
            Accent::Purple => "purple",
            Accent::Pink => "pink",
            Accent::Indigo => "indigo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Accent::Blue => "Blue",
            Accent::Red => "Red",
            Accent::Green => "Green",
            Accent::Yellow => "Yellow",
            Accent::Purple => "Purple",
            Accent::Pink => "Pink",
            Accent::Indigo => "Indigo",
        }
    }

    /// The concrete color this token paints with.
    pub fn hex(self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Red => "#ef4444",
            Accent::Green => "#10b981",
            Accent::Yellow => "#f59e0b",
            Accent::Purple => "#7062f9",
            Accent::Pink => "#ec4899",
            Accent::Indigo => "#6366f1",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        // Every entry in `hex` is a well-formed six digit color.
        parse_hex(self.hex()).unwrap_or((0x3b, 0x82, 0xf6))
    }

    /// Name of the base style variable holding this accent's color.
    pub fn variable(self) -> String {
        format!("--color-{}", self.token())
    }

    /// Parses a token, falling back to `fallback` when it is not in the palette.
    pub fn from_token_or(token: &str, fallback: Accent) -> Self {
        token.parse().unwrap_or_else(|_| {
            log::warn!(
                "unknown accent token '{token}', falling back to {}",
                fallback.token()
            );
            fallback
        })
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Accent {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Accent::ALL
            .into_iter()
            .find(|accent| accent.token() == s)
            .ok_or_else(|| PreferenceError::unknown(TokenKind::Accent, s))
    }
}

/// Looks up the swatch color for a raw token.
///
/// Unknown tokens paint as blue, so a swatch is always renderable.
pub fn swatch_hex(token: &str) -> &'static str {
    token
        .parse::<Accent>()
        .unwrap_or(Accent::Blue)
        .hex()
}
