mod cli;
mod commands;
mod config;

use std::io;

use accentuate::detect_system_mode;
use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    log::debug!("using preferences at {}", config.store_path.display());

    let stdout = io::stdout();
    commands::run(
        &cli.command,
        &config,
        detect_system_mode,
        &mut stdout.lock(),
    )
}
