//! Named console styles used when painting a panel.

use std::collections::HashMap;

use console::Style;

use crate::theme::{Mode, ThemePreference};
use crate::util::{parse_hex, rgb_to_ansi256};

/// Prefix shown in front of text styled with a name the theme lacks.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles with a fluent builder API.
///
/// # Example
///
/// ```rust
/// use accentuate::PanelTheme;
/// use console::Style;
///
/// let theme = PanelTheme::new()
///     .add("muted", Style::new().dim())
///     .add("accent", Style::new().cyan().bold());
///
/// assert_eq!(theme.apply("muted", "quiet", false), "quiet");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PanelTheme {
    styles: HashMap<String, Style>,
}

impl PanelTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Builds the panel styles for `pref`.
    ///
    /// Titles take the primary accent, section headings the secondary one,
    /// and body text contrasts with the mode's surface.
    pub fn for_preference(pref: &ThemePreference) -> Self {
        let primary = rgb_to_ansi256(pref.primary_color.rgb());
        let secondary = rgb_to_ansi256(pref.secondary_color.rgb());
        let surface = parse_hex(pref.mode.surface_hex())
            .map(rgb_to_ansi256)
            .unwrap_or(231);
        let label = match pref.mode {
            Mode::Light => Style::new().black().on_color256(surface),
            Mode::Dark => Style::new().white().on_color256(surface),
        };

        Self::new()
            .add("title", Style::new().color256(primary).bold())
            .add("heading", Style::new().color256(secondary).bold())
            .add("muted", Style::new().dim())
            .add("label", label)
            .add("selected", Style::new().color256(primary).bold().underlined())
            .add("button", Style::new().color256(primary).reverse())
    }

    /// Applies the named style to `text`.
    ///
    /// With `use_color` off the text comes back unchanged. Unknown names
    /// are flagged with [`MISSING_STYLE_INDICATOR`] in either case.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => {
                let style = style.clone().force_styling(true);
                style.apply_to(text).to_string()
            }
            None => format!("{MISSING_STYLE_INDICATOR} {text}"),
        }
    }
}
