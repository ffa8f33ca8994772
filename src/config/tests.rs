//! Configuration tests
//!
//! The generated template is what first-run users edit, so every field must
//! survive a round trip through it.

use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML:\n{}\nError: {:?}", toml_str, e))
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the default template parses back to the defaults
#[test]
fn test_config_roundtrip_default() {
    let config = Config::from_sources(parse(&Config::default().to_toml()), no_env);

    assert_eq!(config.theme, "dark");
    assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
    assert_eq!(config.storage.root_cellar_temperature, 4.0);
    assert_eq!(config.storage.outdoor_temperature, 18.0);
    assert_eq!(config.simulation.tick_interval_ms, 250);
    assert_eq!(config.logging.level, tracing::Level::INFO);
    assert_eq!(config.logging.files.rotation, LogRotation::Daily);
    assert!(config.strings.is_empty());
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = "light".to_string();
    config.temperature_unit = TemperatureUnit::Fahrenheit;
    config.storage.root_cellar_temperature = -2.5;
    config.simulation.ticks_per_interval = 2_500;
    config.logging.file_enabled = true;
    config.logging.level = tracing::Level::DEBUG;
    config.logging.files.rotation = LogRotation::Hourly;
    config.strings.insert(
        "CurrentlyRefrigerated".to_string(),
        "Gekühlt: verdirbt in {0}".to_string(),
    );
    config
        .strings
        .insert("TabContents".to_string(), "Inhalt".to_string());

    let parsed = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(parsed.theme, "light");
    assert_eq!(parsed.temperature_unit, TemperatureUnit::Fahrenheit);
    assert_eq!(parsed.storage.root_cellar_temperature, -2.5);
    assert_eq!(parsed.simulation.ticks_per_interval, 2_500);
    assert!(parsed.logging.file_enabled);
    assert_eq!(parsed.logging.level, tracing::Level::DEBUG);
    assert_eq!(parsed.logging.files.rotation, LogRotation::Hourly);
    assert_eq!(parsed.strings, config.strings);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_sections_use_defaults() {
    let config = Config::from_sources(parse("theme = \"light\"\n"), no_env);
    assert_eq!(config.theme, "light");
    assert_eq!(config.storage.root_cellar_temperature, 4.0);
    assert_eq!(config.logging.filter_directive(), "larder=info");
    assert_eq!(config.logging.files.prefix, "larder");
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "light"
temperature_unit = "kelvin"

[storage]
root_cellar_temperature = 6.0
outdoor_temperature = 25.0
"#,
    );
    let env = |key: &str| match key {
        "LARDER_THEME" => Some("auto".to_string()),
        "LARDER_CELLAR_TEMPERATURE" => Some("-1.5".to_string()),
        "LARDER_OUTDOOR_TEMPERATURE" => Some("not a number".to_string()),
        _ => None,
    };

    let config = Config::from_sources(file, env);
    assert_eq!(config.theme, "auto");
    assert_eq!(config.temperature_unit, TemperatureUnit::Kelvin);
    assert_eq!(config.storage.root_cellar_temperature, -1.5);
    // Unparseable env values fall back to the file
    assert_eq!(config.storage.outdoor_temperature, 25.0);
}

#[test]
fn test_zero_tick_interval_rejected() {
    let config = Config::from_sources(parse("[simulation]\ntick_interval_ms = 0\n"), no_env);
    assert_eq!(config.simulation.tick_interval_ms, 250);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

#[test]
fn test_log_level_parsing() {
    let config = Config::from_sources(parse("[logging]\nlevel = \"WARN\"\n"), no_env);
    assert_eq!(config.logging.filter_directive(), "larder=warn");

    let config = Config::from_sources(parse("[logging]\nlevel = \"chatty\"\n"), no_env);
    assert_eq!(config.logging.level, tracing::Level::INFO);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let parsed: Result<FileConfig, _> = toml::from_str("[storage]\nroot_cellar_temperature = \"cold\"\n");
    assert!(parsed.is_err());
}
