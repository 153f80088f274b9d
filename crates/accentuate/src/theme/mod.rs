//! Theme preference model.
//!
//! This module provides:
//!
//! - [`Mode`]: Light or dark display mode, with OS detection
//! - [`Accent`]: The fixed palette accent colors are picked from
//! - [`ThemePreference`]: The three preference fields and their defaults
//! - [`Change`]: A single-field update, applied purely via [`ThemePreference::apply`]

mod mode;
mod palette;
mod preference;

pub use mode::{detect_system_mode, Mode, ModeDetector};
pub use palette::{swatch_hex, Accent};
pub use preference::{Change, Field, ThemePreference};
