//! Configuration for the contents panel and its terminal front end
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/larder/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::i18n::TemperatureUnit;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;
mod world;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use world::{FileSimulation, FileStorage, SimulationSettings, StorageSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "auto"
    pub theme: String,

    /// Unit for displayed temperatures
    pub temperature_unit: TemperatureUnit,

    /// Storage temperatures
    pub storage: StorageSettings,

    /// Simulation clock
    pub simulation: SimulationSettings,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Localized string overrides, by key
    pub strings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            temperature_unit: TemperatureUnit::Celsius,
            storage: StorageSettings::default(),
            simulation: SimulationSettings::default(),
            logging: LoggingConfig::default(),
            strings: HashMap::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub temperature_unit: Option<String>,

    /// Optional [storage] section
    pub storage: Option<FileStorage>,

    /// Optional [simulation] section
    pub simulation: Option<FileSimulation>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [strings] section
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/larder/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("larder").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed is fatal.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Temperatures written without a decimal point (use 4.0)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `larder config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with environment lookups
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("LARDER_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Temperature unit: env > file > default (celsius)
        let temperature_unit = env("LARDER_TEMPERATURE_UNIT")
            .or(file.temperature_unit)
            .map(|s| TemperatureUnit::from_str(&s))
            .unwrap_or_default();

        let mut storage = StorageSettings::from_file(file.storage);
        if let Some(t) = env("LARDER_CELLAR_TEMPERATURE").and_then(|v| v.parse().ok()) {
            storage.root_cellar_temperature = t;
        }
        if let Some(t) = env("LARDER_OUTDOOR_TEMPERATURE").and_then(|v| v.parse().ok()) {
            storage.outdoor_temperature = t;
        }

        Self {
            theme,
            temperature_unit,
            storage,
            simulation: SimulationSettings::from_file(file.simulation),
            logging: LoggingConfig::from_file(file.logging),
            strings: file.strings,
        }
    }
}
