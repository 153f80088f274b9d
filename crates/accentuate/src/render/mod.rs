//! Text rendering of the selector panel.
//!
//! Panels render through a minijinja template whose `style` filter paints
//! text with a [`PanelTheme`] derived from the current preferences.

mod filters;
mod renderer;
mod theme;

pub use renderer::{render_panel, swatch};
pub use theme::{PanelTheme, MISSING_STYLE_INDICATOR};

/// Whether rendered output carries ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Style only when the terminal supports it.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Term,
    /// Plain text.
    Text,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}
