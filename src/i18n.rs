//! Localized strings and the number formatting that goes with them
//!
//! Every user-facing text in the panel is looked up by key. The English table
//! below is the default; the `[strings]` section of the config file can
//! replace any entry. A key with no entry renders as the key itself so a
//! missing translation is visible rather than blank.
//!
//! Templates use `{0}` for their single argument.

use std::collections::HashMap;

/// Keys into the string table
pub mod keys {
    pub const TAB_CONTENTS: &str = "TabContents";
    pub const ITEMS_LOWER: &str = "ItemsLower";
    pub const NONE_BRACKETS: &str = "NoneBrackets";
    pub const CONTAINED_ITEMS_DESC: &str = "ContainedItemsDesc";
    pub const EJECT_ITEM_TOOLTIP: &str = "EjectItemTooltip";
    pub const INFO_CARD_TOOLTIP: &str = "InfoCardTooltip";
    pub const NOT_FORBIDDEN_DESC: &str = "CommandNotForbiddenDesc";
    pub const FORBIDDEN_DESC: &str = "CommandForbiddenDesc";
    pub const CURRENTLY_FROZEN: &str = "CurrentlyFrozen";
    pub const CURRENTLY_REFRIGERATED: &str = "CurrentlyRefrigerated";
    pub const NOT_REFRIGERATED: &str = "NotRefrigerated";
    pub const ROT_HALTED: &str = "RotHalted";
    pub const UNDER_CONSTRUCTION: &str = "UnderConstruction";
    pub const PERIOD_1_SECOND: &str = "Period1Second";
    pub const PERIOD_SECONDS: &str = "PeriodSeconds";
    pub const PERIOD_1_HOUR: &str = "Period1Hour";
    pub const PERIOD_HOURS: &str = "PeriodHours";
    pub const PERIOD_1_DAY: &str = "Period1Day";
    pub const PERIOD_DAYS: &str = "PeriodDays";
    pub const PERIOD_1_YEAR: &str = "Period1Year";
    pub const PERIOD_YEARS: &str = "PeriodYears";
}

/// Game clock conversions
pub const TICKS_PER_SECOND: u64 = 60;
pub const TICKS_PER_HOUR: u64 = 2_500;
pub const TICKS_PER_DAY: u64 = 60_000;
pub const TICKS_PER_YEAR: u64 = 3_600_000;

const ENGLISH: &[(&str, &str)] = &[
    (keys::TAB_CONTENTS, "Contents"),
    (keys::ITEMS_LOWER, "items"),
    (keys::NONE_BRACKETS, "(none)"),
    (
        keys::CONTAINED_ITEMS_DESC,
        "Things stored here. Stacks are grouped by category and name, best quality and freshest spoilage first.",
    ),
    (keys::EJECT_ITEM_TOOLTIP, "Eject this stack from storage."),
    (keys::INFO_CARD_TOOLTIP, "Show details and select."),
    (
        keys::NOT_FORBIDDEN_DESC,
        "Allowed: your colonists will use and haul this stack. Click to forbid it.",
    ),
    (
        keys::FORBIDDEN_DESC,
        "Forbidden: your colonists will not touch this stack. Click to allow it.",
    ),
    (keys::CURRENTLY_FROZEN, "Frozen, not rotting"),
    (keys::CURRENTLY_REFRIGERATED, "Refrigerated: rots in {0}"),
    (keys::NOT_REFRIGERATED, "Not refrigerated: rots in {0}"),
    (keys::ROT_HALTED, "halted"),
    (keys::UNDER_CONSTRUCTION, "Not built yet - nothing stored."),
    (keys::PERIOD_1_SECOND, "1 second"),
    (keys::PERIOD_SECONDS, "{0} seconds"),
    (keys::PERIOD_1_HOUR, "1 hour"),
    (keys::PERIOD_HOURS, "{0} hours"),
    (keys::PERIOD_1_DAY, "1 day"),
    (keys::PERIOD_DAYS, "{0} days"),
    (keys::PERIOD_1_YEAR, "1 year"),
    (keys::PERIOD_YEARS, "{0} years"),
];

/// Unit temperatures are displayed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse unit string from config; unknown values fall back to Celsius
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fahrenheit" | "f" => Self::Fahrenheit,
            "kelvin" | "k" => Self::Kelvin,
            _ => Self::Celsius,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Kelvin => "kelvin",
        }
    }
}

/// Key → template lookup table
#[derive(Debug, Clone)]
pub struct Strings {
    table: HashMap<String, String>,
}

impl Strings {
    pub fn english() -> Self {
        Self {
            table: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// English defaults with `overrides` layered on top
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut strings = Self::english();
        strings
            .table
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        strings
    }

    /// Look up a key; missing keys come back verbatim
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Look up a key and substitute its `{0}` placeholder
    pub fn format(&self, key: &str, arg: &str) -> String {
        self.get(key).replace("{0}", arg)
    }

    /// Human-readable duration for a tick count
    ///
    /// Picks the largest unit (years, days, hours) whose value still reads
    /// as at least 1 once rounded to one decimal, and falls back to whole
    /// seconds.
    pub fn ticks_to_period(&self, ticks: u64) -> String {
        const UNITS: [(u64, &str, &str); 3] = [
            (TICKS_PER_YEAR, keys::PERIOD_1_YEAR, keys::PERIOD_YEARS),
            (TICKS_PER_DAY, keys::PERIOD_1_DAY, keys::PERIOD_DAYS),
            (TICKS_PER_HOUR, keys::PERIOD_1_HOUR, keys::PERIOD_HOURS),
        ];

        let (value, one, many) = UNITS
            .iter()
            .map(|&(per, one, many)| (round_one_decimal(ticks as f64 / per as f64), one, many))
            .find(|(value, _, _)| *value >= 1.0)
            .unwrap_or((
                (ticks as f64 / TICKS_PER_SECOND as f64).round(),
                keys::PERIOD_1_SECOND,
                keys::PERIOD_SECONDS,
            ));

        let number = format_one_decimal(value);
        if number == "1" {
            self.get(one).to_string()
        } else {
            self.format(many, &number)
        }
    }

    /// Temperature with no decimals and the unit symbol, e.g. `4°C`
    pub fn temperature(&self, celsius: f32, unit: TemperatureUnit) -> String {
        match unit {
            TemperatureUnit::Celsius => format!("{}°C", whole_degrees(celsius)),
            TemperatureUnit::Fahrenheit => format!("{}°F", whole_degrees(celsius * 1.8 + 32.0)),
            TemperatureUnit::Kelvin => format!("{}K", whole_degrees(celsius + 273.15)),
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounded to whole degrees, without a `-0`
fn whole_degrees(value: f32) -> String {
    let rounded = value.round();
    // -0.0 == 0.0, so this also clears the sign of negative zero
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.0}", rounded)
}

/// `0.#` style: one decimal, trailing `.0` dropped
fn format_one_decimal(value: f64) -> String {
    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_renders_as_key() {
        let strings = Strings::english();
        assert_eq!(strings.get("NoSuchKey"), "NoSuchKey");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides = HashMap::from([(keys::TAB_CONTENTS.to_string(), "Inhalt".to_string())]);
        let strings = Strings::with_overrides(&overrides);
        assert_eq!(strings.get(keys::TAB_CONTENTS), "Inhalt");
        assert_eq!(strings.get(keys::ITEMS_LOWER), "items");
    }

    #[test]
    fn test_format_substitutes_argument() {
        let strings = Strings::english();
        assert_eq!(
            strings.format(keys::CURRENTLY_REFRIGERATED, "2 days"),
            "Refrigerated: rots in 2 days"
        );
    }

    #[test]
    fn test_period_units() {
        let strings = Strings::english();
        assert_eq!(strings.ticks_to_period(60), "1 second");
        assert_eq!(strings.ticks_to_period(600), "10 seconds");
        assert_eq!(strings.ticks_to_period(2_500), "1 hour");
        assert_eq!(strings.ticks_to_period(3_750), "1.5 hours");
        assert_eq!(strings.ticks_to_period(60_000), "1 day");
        assert_eq!(strings.ticks_to_period(150_000), "2.5 days");
        assert_eq!(strings.ticks_to_period(7_200_000), "2 years");
    }

    #[test]
    fn test_period_unit_follows_rounded_value() {
        let strings = Strings::english();
        assert_eq!(strings.ticks_to_period(59_999), "1 day");
        assert_eq!(strings.ticks_to_period(3_599_999), "1 year");
        assert_eq!(strings.ticks_to_period(2_499), "1 hour");
        assert_eq!(strings.ticks_to_period(2_300), "38 seconds");
    }

    #[test]
    fn test_temperature_units() {
        let strings = Strings::english();
        assert_eq!(strings.temperature(4.0, TemperatureUnit::Celsius), "4°C");
        assert_eq!(strings.temperature(10.0, TemperatureUnit::Fahrenheit), "50°F");
        assert_eq!(strings.temperature(0.0, TemperatureUnit::Kelvin), "273K");
    }

    #[test]
    fn test_temperature_near_zero_has_no_sign() {
        let strings = Strings::english();
        assert_eq!(strings.temperature(-0.3, TemperatureUnit::Celsius), "0°C");
        assert_eq!(strings.temperature(-0.0, TemperatureUnit::Celsius), "0°C");
        assert_eq!(strings.temperature(-0.6, TemperatureUnit::Celsius), "-1°C");
    }

    #[test]
    fn test_unit_parsing_falls_back_to_celsius() {
        assert_eq!(TemperatureUnit::from_str("Fahrenheit"), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::from_str("rankine"), TemperatureUnit::Celsius);
    }
}
