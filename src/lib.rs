//! rTimeline library root.
//! Exposes the CLI parser, the high-level run() function and the chart core.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, &cli.input, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, &cli.input, cfg),
        Commands::Categories => cli::commands::categories::handle(&cli.command, &cli.input, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &cli.input, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load the configuration once
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(Some(config_path.as_path()))?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}

