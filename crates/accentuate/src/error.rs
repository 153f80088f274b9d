//! Errors raised by preference parsing and context lookup.

use std::fmt;

use thiserror::Error;

/// Which token vocabulary a value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Mode,
    Accent,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Mode => f.write_str("mode"),
            TokenKind::Accent => f.write_str("accent"),
        }
    }
}

/// Error returned by strict token parsing and by context access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A token is not part of the mode set or the accent palette.
    #[error("unknown {kind} token '{token}'")]
    UnknownToken { kind: TokenKind, token: String },
    /// Preferences were read or written through a context with no store behind it.
    #[error("theme preferences used outside of a provider")]
    OutsideProvider,
    /// The store was reached again while already in use further up the stack.
    #[error("theme preferences are already in use")]
    Busy,
}

impl PreferenceError {
    pub(crate) fn unknown(kind: TokenKind, token: &str) -> Self {
        PreferenceError::UnknownToken {
            kind,
            token: token.to_string(),
        }
    }
}
