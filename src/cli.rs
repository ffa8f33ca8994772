// CLI module - command-line argument parsing and handlers
//
// Provides subcommands besides the interactive terminal:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - snapshot: Render one frame of the panel headless and print it

use crate::config::{Config, VERSION};
use crate::tui;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ratatui::layout::Position;
use std::io::Write;

/// larder - storage contents panel for the terminal
#[derive(Parser)]
#[command(name = "larder")]
#[command(version = VERSION)]
#[command(about = "Browse and manage what your storages hold", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Render one frame headless and print it
    Snapshot {
        /// Storage tab to open (0-based)
        #[arg(long, default_value_t = 0)]
        storage: usize,

        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,

        /// Pointer position as X,Y, to show hover highlights and tooltips
        #[arg(long, value_parser = parse_position)]
        hover: Option<Position>,
    },
}

/// Run a non-interactive command
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show()
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: larder config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
        Commands::Snapshot {
            storage,
            width,
            height,
            hover,
        } => {
            let config = Config::from_env();
            let text = tui::render_snapshot(&config, storage, width, height, hover)?;
            println!("{}", text);
            Ok(())
        }
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Parse `X,Y` into a terminal position
fn parse_position(s: &str) -> Result<Position> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got {:?}", s);
    };
    let x = x.trim().parse().with_context(|| format!("bad column {:?}", x))?;
    let y = y.trim().parse().with_context(|| format!("bad row {:?}", y))?;
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("12,5").unwrap(), Position::new(12, 5));
        assert_eq!(parse_position(" 3 , 4 ").unwrap(), Position::new(3, 4));
        assert!(parse_position("12").is_err());
        assert!(parse_position("a,5").is_err());
        assert!(parse_position("-1,5").is_err());
    }

    #[test]
    fn test_snapshot_arguments() {
        let cli = Cli::try_parse_from(["larder", "snapshot", "--storage", "1", "--hover", "10,6"])
            .unwrap();
        match cli.command {
            Some(Commands::Snapshot {
                storage,
                width,
                height,
                hover,
            }) => {
                assert_eq!(storage, 1);
                assert_eq!((width, height), (80, 24));
                assert_eq!(hover, Some(Position::new(10, 6)));
            }
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn test_no_subcommand_runs_interactive() {
        let cli = Cli::try_parse_from(["larder"]).unwrap();
        assert!(cli.command.is_none());
    }
}
