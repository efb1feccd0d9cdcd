/// Display strings for plugin, action and settings names.
/// Ships English; a host can layer its own JSON table on top.
use std::collections::HashMap;

use crate::error::Result;

const EN_US: &[(&str, &str)] = &[
    ("plugin.name", "Clocks"),
    ("actions.analog-clock.name", "Analog Clock"),
    ("actions.analog-clock.hour-hand-color", "Hour hand color"),
    ("actions.analog-clock.minute-hand-color", "Minute hand color"),
    ("actions.analog-clock.second-hand-color", "Second hand color"),
    ("actions.analog-clock.hub-color", "Center color"),
    ("actions.analog-clock.background-color", "Background color"),
    ("actions.analog-clock.markings-color", "Hour markings color"),
    ("actions.digital-clock.name", "Digital Clock"),
    ("actions.digital-clock.twenty-four-format", "24 hour format"),
    (
        "actions.digital-clock.twenty-four-format.tooltip",
        "Show the time in 24 hour format instead of 12 hour format with AM/PM",
    ),
    ("actions.digital-clock.show-seconds", "Show seconds"),
    ("actions.date.name", "Date"),
    ("actions.date.format", "Date time format"),
    ("actions.date.label-position", "Label position"),
    ("actions.date.label-position.top", "Top"),
    ("actions.date.label-position.center", "Center"),
    ("actions.date.label-position.bottom", "Bottom"),
];

#[derive(Debug, Clone)]
pub struct Locale {
    strings: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            strings: EN_US
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Locale {
    /// English strings overridden by a flat `{"key": "text"}` JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: HashMap<String, String> = serde_json::from_str(json)?;
        let mut locale = Self::default();
        locale.strings.extend(overrides);
        Ok(locale)
    }

    /// Look up `key`, falling back to the key itself.
    pub fn get(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        let locale = Locale::default();
        assert_eq!(locale.get("plugin.name"), "Clocks");
        assert_eq!(locale.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_from_json_overrides() {
        let locale = Locale::from_json(r#"{"plugin.name": "Uhren"}"#).unwrap();
        assert_eq!(locale.get("plugin.name"), "Uhren");
        assert_eq!(locale.get("actions.date.name"), "Date");
        assert!(Locale::from_json("[1, 2]").is_err());
    }
}
