//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize string overrides, sorted by key
    fn strings_to_toml(&self) -> String {
        if self.strings.is_empty() {
            return r#"# TabContents = "Contents"
# CurrentlyRefrigerated = "Refrigerated: rots in {0}"
"#
            .to_string();
        }

        let mut keys: Vec<_> = self.strings.keys().collect();
        keys.sort();

        let mut output = String::new();
        for key in keys {
            output.push_str(&format!("{} = {:?}\n", key, self.strings[key]));
        }
        output
    }

    /// Render the full config file, comments included
    pub fn to_toml(&self) -> String {
        format!(
            r#"# larder configuration

# Theme: dark, light, auto (terminal palette)
theme = "{theme}"

# Temperature display unit: celsius, fahrenheit, kelvin
temperature_unit = "{unit}"

# Storage temperatures in °C
[storage]
root_cellar_temperature = {cellar:?}
outdoor_temperature = {outdoor:?}

# World clock (60 000 ticks = 1 day)
[simulation]
tick_interval_ms = {interval}
ticks_per_interval = {ticks}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the status line or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

# Localized string overrides by key; {{0}} is the argument placeholder
[strings]
{strings}"#,
            theme = self.theme,
            unit = self.temperature_unit.as_str(),
            cellar = self.storage.root_cellar_temperature,
            outdoor = self.storage.outdoor_temperature,
            interval = self.simulation.tick_interval_ms,
            ticks = self.simulation.ticks_per_interval,
            log_level = self.logging.level.as_str().to_ascii_lowercase(),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.files.dir.display(),
            log_file_rotation = self.logging.files.rotation.as_str(),
            log_file_prefix = self.logging.files.prefix,
            strings = self.strings_to_toml(),
        )
    }
}
