//! Live style state driven by the preferences.
//!
//! - [`StyleSink`]: where style updates are pushed
//! - [`StyleRoot`]: an in-memory root with class set and custom properties
//! - [`StyleError`]: failures while resolving variable references

mod error;
mod root;

pub use error::StyleError;
pub use root::{var_of, StyleRoot, StyleSink, DARK_CLASS, PRIMARY_VARIABLE, SECONDARY_VARIABLE};
