// larder - storage contents panel for the terminal
//
// Shows what a storage building holds, one row per stack, with controls to
// inspect, eject and forbid each stack.
//
// Architecture:
// - World (world): storages and stored things behind traits, plus a rot model
// - Panel (panel): host-agnostic contents panel drawing through a `Ui` trait
// - TUI (ratatui): terminal host for the panel, event loop, simulation clock
// - Config: TOML file + env overrides; strings, theme, temperatures, logging

mod cli;
mod config;
mod demo;
mod i18n;
mod logging;
mod panel;
mod theme;
mod tui;
mod util;
mod world;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use logging::{LogRing, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Headless commands log to stderr and exit
    if let Some(command) = cli.command {
        let config = Config::from_env();
        let _file_guard = logging::init(&config.logging, LogTarget::Stderr, &LogRing::new());
        return cli::run(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log lines go to the ring while the alternate screen is up. The guard
    // must be kept alive for the duration of the program so file logs flush.
    let log_ring = LogRing::new();
    let _file_guard = logging::init(&config.logging, LogTarget::Capture, &log_ring);

    tracing::info!(
        version = config::VERSION,
        theme = %config.theme,
        "Starting larder"
    );

    tui::run_tui(config, log_ring).await
}
