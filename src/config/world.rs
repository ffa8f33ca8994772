//! Storage temperature and simulation clock settings

use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────────────────────────────────────

/// Temperatures the demo world runs at (°C)
#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Fixed temperature of the outdoor root cellar
    pub root_cellar_temperature: f32,
    /// Ambient temperature for every other storage
    pub outdoor_temperature: f32,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root_cellar_temperature: 4.0,
            outdoor_temperature: 18.0,
        }
    }
}

/// Storage settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileStorage {
    pub root_cellar_temperature: Option<f32>,
    pub outdoor_temperature: Option<f32>,
}

impl StorageSettings {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileStorage>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            root_cellar_temperature: file
                .root_cellar_temperature
                .unwrap_or(defaults.root_cellar_temperature),
            outdoor_temperature: file
                .outdoor_temperature
                .unwrap_or(defaults.outdoor_temperature),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Simulation
// ─────────────────────────────────────────────────────────────────────────────

/// How fast the world clock runs
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Wall-clock time between clock steps
    pub tick_interval_ms: u64,
    /// Game ticks advanced per step
    pub ticks_per_interval: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            ticks_per_interval: 250,
        }
    }
}

/// Simulation settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSimulation {
    pub tick_interval_ms: Option<u64>,
    pub ticks_per_interval: Option<u64>,
}

impl SimulationSettings {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSimulation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            // Zero would spin the event loop
            tick_interval_ms: file
                .tick_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.tick_interval_ms),
            ticks_per_interval: file
                .ticks_per_interval
                .unwrap_or(defaults.ticks_per_interval),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
