//! `[logging]` section: filter level and the optional JSON log files

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// How often a new log file is started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    /// Case-insensitive; anything unrecognized keeps the daily default
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Where the JSON log files go: `<dir>/<prefix>.<date>`
#[derive(Debug, Clone)]
pub struct LogFiles {
    pub dir: PathBuf,
    pub prefix: String,
    pub rotation: LogRotation,
}

impl Default for LogFiles {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            prefix: "larder".to_string(),
            rotation: LogRotation::Daily,
        }
    }
}

impl LogFiles {
    /// Rolling appender for these files; the directory must already exist
    pub fn appender(&self) -> RollingFileAppender {
        let rotation = match self.rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        };
        RollingFileAppender::new(rotation, &self.dir, &self.prefix)
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for larder's own events when RUST_LOG is unset
    pub level: Level,
    /// Write JSON lines to `files` as well as the ring or stderr
    pub file_enabled: bool,
    pub files: LogFiles,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            file_enabled: false,
            files: LogFiles::default(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive scoped to this crate, e.g. `larder=info`
    pub fn filter_directive(&self) -> String {
        format!("larder={}", self.level.as_str().to_ascii_lowercase())
    }

    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level.as_deref().map(Level::from_str) {
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                eprintln!(
                    "Warning: unknown log level {:?}, using {}",
                    file.level.as_deref().unwrap_or_default(),
                    defaults.level
                );
                defaults.level
            }
            None => defaults.level,
        };

        Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            files: LogFiles {
                dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.files.dir),
                prefix: file.file_prefix.unwrap_or(defaults.files.prefix),
                rotation: file
                    .file_rotation
                    .as_deref()
                    .map(LogRotation::parse)
                    .unwrap_or(defaults.files.rotation),
            },
        }
    }
}

/// `[logging]` as written in the file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}
