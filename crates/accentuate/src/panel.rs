//! The selector panel: a drawer of swatches that drives the store.
//!
//! The panel owns nothing but its open/closed flag, which starts closed on
//! every load. Everything it shows is derived from the store at the time
//! of the call.

use minijinja::Error;
use serde::Serialize;

use crate::context::ThemeContext;
use crate::render::{render_panel, OutputMode, PanelTheme};
use crate::theme::{Accent, Mode, ThemePreference};

/// Which preference a section of the panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Mode,
    Primary,
    Secondary,
}

/// One fixed-size selectable control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub token: &'static str,
    pub label: &'static str,
    pub hex: &'static str,
    pub selected: bool,
}

/// A titled row of swatches for one preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: &'static str,
    pub swatches: Vec<Swatch>,
}

/// What the user picked in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Mode(Mode),
    Primary(Accent),
    Secondary(Accent),
    /// A combined "light + accent" or "dark + accent" pick: sets the mode
    /// and the primary accent in one click.
    Preset {
        mode: Mode,
        accent: Accent,
    },
}

/// Builds the panel sections for `pref`.
pub fn sections_for(pref: &ThemePreference) -> Vec<Section> {
    let mode_swatches = Mode::ALL
        .into_iter()
        .map(|mode| Swatch {
            token: mode.token(),
            label: mode.label(),
            hex: mode.surface_hex(),
            selected: mode == pref.mode,
        })
        .collect();
    let accent_swatches = |current: Accent| -> Vec<Swatch> {
        Accent::ALL
            .into_iter()
            .map(|accent| Swatch {
                token: accent.token(),
                label: accent.label(),
                hex: accent.hex(),
                selected: accent == current,
            })
            .collect()
    };

    vec![
        Section {
            kind: SectionKind::Mode,
            title: "Mode",
            swatches: mode_swatches,
        },
        Section {
            kind: SectionKind::Primary,
            title: "Primary accent",
            swatches: accent_swatches(pref.primary_color),
        },
        Section {
            kind: SectionKind::Secondary,
            title: "Secondary accent",
            swatches: accent_swatches(pref.secondary_color),
        },
    ]
}

/// Drawer that lets the user invoke the preference setters.
///
/// # Example
///
/// ```rust
/// use accentuate::{
///     Accent, MemoryStorage, Mode, PreferenceStore, Selection, SelectorPanel, StyleRoot,
///     ThemeContext,
/// };
///
/// let ctx = ThemeContext::provide(PreferenceStore::new(MemoryStorage::new(), StyleRoot::new()));
/// let mut panel = SelectorPanel::new(ctx.clone());
/// assert!(!panel.is_open());
///
/// panel.toggle();
/// panel.select(Selection::Preset { mode: Mode::Dark, accent: Accent::Purple });
///
/// let pref = ctx.get();
/// assert_eq!(pref.mode, Mode::Dark);
/// assert_eq!(pref.primary_color, Accent::Purple);
/// ```
#[derive(Debug, Clone)]
pub struct SelectorPanel {
    ctx: ThemeContext,
    open: bool,
}

impl SelectorPanel {
    pub fn new(ctx: ThemeContext) -> Self {
        Self { ctx, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// The panel contents for the current preferences.
    ///
    /// # Panics
    ///
    /// Panics if the panel's context has no provider.
    pub fn sections(&self) -> Vec<Section> {
        sections_for(&self.ctx.get())
    }

    /// Forwards a pick to the store.
    ///
    /// # Panics
    ///
    /// Panics if the panel's context has no provider.
    pub fn select(&mut self, selection: Selection) {
        log::debug!("panel selection {selection:?}");
        self.ctx.with(|store| match selection {
            Selection::Mode(mode) => store.set_mode(mode),
            Selection::Primary(accent) => store.set_primary_color(accent),
            Selection::Secondary(accent) => store.set_secondary_color(accent),
            Selection::Preset { mode, accent } => {
                store.set_mode(mode);
                store.set_primary_color(accent);
            }
        });
    }

    /// Renders the panel as text.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    ///
    /// # Panics
    ///
    /// Panics if the panel's context has no provider.
    pub fn render(&self, mode: OutputMode) -> Result<String, Error> {
        let pref = self.ctx.get();
        render_panel(
            &sections_for(&pref),
            self.open,
            PanelTheme::for_preference(&pref),
            mode,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::PreferenceStore;
    use crate::style::StyleRoot;

    fn panel() -> (SelectorPanel, ThemeContext) {
        let ctx =
            ThemeContext::provide(PreferenceStore::new(MemoryStorage::new(), StyleRoot::new()));
        (SelectorPanel::new(ctx.clone()), ctx)
    }

    fn selected(section: &Section) -> Vec<&'static str> {
        section
            .swatches
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn test_panel_starts_closed_and_toggles() {
        let (mut panel, _) = panel();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
        panel.open();
        panel.open();
        assert!(panel.is_open());
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_sections_shape() {
        let sections = sections_for(&ThemePreference::default());
        let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Mode, SectionKind::Primary, SectionKind::Secondary]
        );
        assert_eq!(sections[0].swatches.len(), 2);
        assert_eq!(sections[1].swatches.len(), 7);
        assert_eq!(sections[2].swatches.len(), 7);
    }

    #[test]
    fn test_exactly_one_selected_per_section() {
        let (_, ctx) = panel();
        let sections = sections_for(&ctx.get());
        assert_eq!(selected(&sections[0]), vec!["light"]);
        assert_eq!(selected(&sections[1]), vec!["blue"]);
        assert_eq!(selected(&sections[2]), vec!["red"]);
    }

    #[test]
    fn test_select_routes_to_setters() {
        let (mut panel, ctx) = panel();
        panel.select(Selection::Secondary(Accent::Yellow));
        panel.select(Selection::Mode(Mode::Dark));

        let pref = ctx.get();
        assert_eq!(pref.secondary_color, Accent::Yellow);
        assert_eq!(pref.mode, Mode::Dark);
        assert_eq!(pref.primary_color, Accent::Blue);

        let sections = panel.sections();
        assert_eq!(selected(&sections[2]), vec!["yellow"]);
    }

    #[test]
    fn test_preset_sets_mode_and_primary() {
        let (mut panel, ctx) = panel();
        panel.select(Selection::Preset {
            mode: Mode::Light,
            accent: Accent::Indigo,
        });
        let pref = ctx.get();
        assert_eq!(pref.mode, Mode::Light);
        assert_eq!(pref.primary_color, Accent::Indigo);
        assert_eq!(pref.secondary_color, Accent::Red);
    }

    #[test]
    fn test_render_follows_open_state() {
        let (mut panel, _) = panel();
        assert_eq!(panel.render(OutputMode::Text).unwrap(), "[*] Theme\n");
        panel.open();
        assert!(panel
            .render(OutputMode::Text)
            .unwrap()
            .starts_with("Theme Settings"));
    }

    #[test]
    #[should_panic(expected = "outside of a provider")]
    fn test_detached_panel_fails_fast() {
        let mut panel = SelectorPanel::new(ThemeContext::detached());
        panel.select(Selection::Mode(Mode::Dark));
    }
}
