//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Pick light/dark mode and accent colors, remembered between runs.
#[derive(Debug, Parser)]
#[command(name = "accentuate", version, about)]
pub struct Cli {
    /// Preferences file [default: <config dir>/accentuate/preferences.json]
    #[arg(long, global = true, env = "ACCENTUATE_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// When to use ANSI colors
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current preferences
    Show {
        /// Print as JSON using the storage key names
        #[arg(long)]
        json: bool,
    },
    /// Set light or dark mode
    Mode {
        /// light, dark, or system to follow the OS setting
        value: ModeArg,
    },
    /// Set the primary accent color
    Primary {
        /// Palette token (see `accentuate palette`)
        token: String,
    },
    /// Set the secondary accent color
    Secondary {
        /// Palette token (see `accentuate palette`)
        token: String,
    },
    /// Set mode and primary accent together, like a drawer preset row
    Preset {
        mode: PresetMode,
        /// Palette token (see `accentuate palette`)
        token: String,
    },
    /// Render the selector panel
    Panel {
        /// Show the drawer expanded instead of just its toggle
        #[arg(long)]
        open: bool,
    },
    /// Print the resolved root style block
    Css,
    /// List the palette tokens
    Palette,
    /// Forget stored preferences so the next run starts from defaults
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetMode {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mode_system() {
        let cli = Cli::try_parse_from(["accentuate", "mode", "system"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Mode {
                value: ModeArg::System
            }
        ));
    }

    #[test]
    fn test_parse_global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["accentuate", "primary", "green", "--store", "/tmp/p.json"])
            .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));
        assert!(matches!(cli.command, Command::Primary { ref token } if token == "green"));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["accentuate", "mode", "sepia"]).is_err());
    }
}
