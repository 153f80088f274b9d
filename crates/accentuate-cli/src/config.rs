//! Runtime configuration resolved from arguments and the environment.

use std::path::PathBuf;

use accentuate::OutputMode;
use anyhow::{anyhow, Result};

use crate::cli::{Cli, ColorChoice};

const APP_DIR: &str = "accentuate";
const STORE_FILE: &str = "preferences.json";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub output: OutputMode,
}

impl Config {
    /// Resolves the configuration.
    ///
    /// The store path comes from `--store` (or `ACCENTUATE_STORE`, which
    /// clap folds into the same flag), else the platform config directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let store_path = match &cli.store {
            Some(path) => path.clone(),
            None => default_store_path()
                .ok_or_else(|| anyhow!("no config directory found; pass --store <PATH>"))?,
        };
        Ok(Self {
            store_path,
            output: output_mode(cli.color),
        })
    }
}

fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(STORE_FILE))
}

fn output_mode(choice: ColorChoice) -> OutputMode {
    match choice {
        ColorChoice::Auto => OutputMode::Auto,
        ColorChoice::Always => OutputMode::Term,
        ColorChoice::Never => OutputMode::Text,
    }
}
