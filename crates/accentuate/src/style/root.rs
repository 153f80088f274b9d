//! The style root: classes and custom properties consumed by presentation.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::rc::Rc;

use super::error::StyleError;
use crate::theme::Accent;

/// Class toggled on the root while the dark mode is active.
pub const DARK_CLASS: &str = "dark";
/// Indirection variable holding the primary accent reference.
pub const PRIMARY_VARIABLE: &str = "--color-primary";
/// Indirection variable holding the secondary accent reference.
pub const SECONDARY_VARIABLE: &str = "--color-secondary";

/// Receiver for live style updates.
///
/// Implementations push classes and variables wherever presentation reads
/// them from. [`StyleRoot`] keeps them in memory.
pub trait StyleSink {
    /// Adds `class` to the root when `enabled`, removes it otherwise.
    fn set_class(&mut self, class: &str, enabled: bool);

    /// Sets a custom property on the root, replacing any previous value.
    fn set_variable(&mut self, name: &str, value: &str);
}

#[derive(Debug, Default)]
struct RootState {
    classes: BTreeSet<String>,
    variables: BTreeMap<String, String>,
}

/// An in-memory style root shared between clones.
///
/// A fresh root carries one base variable per palette accent
/// (`--color-blue: #3b82f6`, ...). Accent indirection variables hold
/// `var(--color-<token>)` and are followed by [`StyleRoot::resolve`].
///
/// # Example
///
/// ```rust
/// use accentuate::{StyleRoot, StyleSink};
///
/// let mut root = StyleRoot::new();
/// root.set_variable("--color-primary", "var(--color-green)");
/// assert_eq!(root.resolve("--color-primary").unwrap(), "#10b981");
/// ```
#[derive(Debug, Clone)]
pub struct StyleRoot {
    state: Rc<RefCell<RootState>>,
}

impl StyleRoot {
    /// Creates a root with the palette's base variables defined.
    pub fn new() -> Self {
        let mut root = Self::empty();
        for accent in Accent::ALL {
            root.set_variable(&accent.variable(), accent.hex());
        }
        root
    }

    /// Creates a root with no classes and no variables.
    pub fn empty() -> Self {
        Self {
            state: Rc::new(RefCell::new(RootState::default())),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    /// Returns the raw value of a variable, without following references.
    pub fn variable(&self, name: &str) -> Option<String> {
        self.state.borrow().variables.get(name).cloned()
    }

    /// Follows `var(...)` references from `name` until a concrete value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if `name` is undefined, if a reference points
    /// at an undefined variable, or if references form a cycle.
    pub fn resolve(&self, name: &str) -> Result<String, StyleError> {
        let state = self.state.borrow();
        let mut path = vec![name.to_string()];
        let mut value = state
            .variables
            .get(name)
            .ok_or_else(|| StyleError::Undefined {
                name: name.to_string(),
            })?;

        while let Some(target) = var_reference(value) {
            if path.iter().any(|seen| seen == target) {
                path.push(target.to_string());
                return Err(StyleError::CycleDetected { path });
            }
            value = state
                .variables
                .get(target)
                .ok_or_else(|| StyleError::UnresolvedReference {
                    from: path.last().cloned().unwrap_or_default(),
                    to: target.to_string(),
                })?;
            path.push(target.to_string());
        }

        Ok(value.clone())
    }

    /// Renders the root as a CSS block.
    ///
    /// Variables become custom properties on `:root`; active classes are
    /// listed in a leading comment.
    pub fn to_css(&self) -> String {
        let state = self.state.borrow();
        let mut css = String::new();
        if !state.classes.is_empty() {
            let classes: Vec<&str> = state.classes.iter().map(String::as_str).collect();
            let _ = writeln!(css, "/* class=\"{}\" */", classes.join(" "));
        }
        css.push_str(":root {\n");
        for (name, value) in &state.variables {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl Default for StyleRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSink for StyleRoot {
    fn set_class(&mut self, class: &str, enabled: bool) {
        let mut state = self.state.borrow_mut();
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .variables
            .insert(name.to_string(), value.to_string());
    }
}

/// Builds the `var(--name)` reference to a variable.
pub fn var_of(name: &str) -> String {
    format!("var({name})")
}

fn var_reference(value: &str) -> Option<&str> {
    value
        .trim()
        .strip_prefix("var(")?
        .strip_suffix(')')
        .map(str::trim)
}
