//! Command execution. Each run is one "page load" of the preferences.

use std::io::Write;

use accentuate::{
    keys, swatch, Accent, FileStorage, Mode, ModeDetector, PreferenceStore, Selection,
    SelectorPanel, Storage, StyleRoot, ThemeContext,
};
use anyhow::{Context, Result};

use crate::cli::{Command, ModeArg, PresetMode};
use crate::config::Config;

/// Executes `command`, writing user-facing output to `out`.
pub fn run(
    command: &Command,
    config: &Config,
    detect: ModeDetector,
    out: &mut impl Write,
) -> Result<()> {
    if let Command::Reset = command {
        let mut storage = FileStorage::open(&config.store_path);
        for key in keys::ALL {
            storage
                .remove(key)
                .with_context(|| format!("cannot reset {}", config.store_path.display()))?;
        }
        writeln!(out, "preferences reset")?;
        return Ok(());
    }

    let root = StyleRoot::new();
    let store = PreferenceStore::new(FileStorage::open(&config.store_path), root.clone());
    let ctx = ThemeContext::provide(store);
    let mut panel = SelectorPanel::new(ctx.clone());

    match command {
        Command::Show { json } => {
            let pref = ctx.get();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&pref)?)?;
            } else {
                writeln!(out, "mode:      {}", pref.mode)?;
                writeln!(out, "primary:   {}", pref.primary_color)?;
                writeln!(out, "secondary: {}", pref.secondary_color)?;
            }
        }
        Command::Mode { value } => {
            let mode = match value {
                ModeArg::Light => Mode::Light,
                ModeArg::Dark => Mode::Dark,
                ModeArg::System => detect(),
            };
            panel.select(Selection::Mode(mode));
            writeln!(out, "mode set to {mode}")?;
        }
        Command::Primary { token } => {
            let accent = parse_accent(token)?;
            panel.select(Selection::Primary(accent));
            writeln!(out, "primary accent set to {accent}")?;
        }
        Command::Secondary { token } => {
            let accent = parse_accent(token)?;
            panel.select(Selection::Secondary(accent));
            writeln!(out, "secondary accent set to {accent}")?;
        }
        Command::Preset { mode, token } => {
            let accent = parse_accent(token)?;
            let mode = match mode {
                PresetMode::Light => Mode::Light,
                PresetMode::Dark => Mode::Dark,
            };
            panel.select(Selection::Preset { mode, accent });
            writeln!(out, "mode set to {mode}, primary accent set to {accent}")?;
        }
        Command::Panel { open } => {
            if *open {
                panel.open();
            }
            write!(out, "{}", panel.render(config.output)?)?;
        }
        Command::Css => {
            write!(out, "{}", root.to_css())?;
        }
        Command::Palette => {
            let use_color = config.output.should_use_color();
            for accent in Accent::ALL {
                writeln!(
                    out,
                    "{} {:<7} {}",
                    swatch(accent.hex(), use_color),
                    accent.token(),
                    accent.hex()
                )?;
            }
        }
        Command::Reset => {}
    }
    Ok(())
}

fn parse_accent(token: &str) -> Result<Accent> {
    token.parse::<Accent>().with_context(|| {
        let tokens: Vec<&str> = Accent::ALL.iter().map(|a| a.token()).collect();
        format!("expected one of: {}", tokens.join(", "))
    })
}
