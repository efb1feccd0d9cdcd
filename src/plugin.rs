/// Plugin registration: metadata plus the three clock actions and which
/// controller inputs each supports.
use tracing::info;

use crate::actions::{Action, AnalogClock, Date, DigitalClock};
use crate::error::{Error, Result};
use crate::locale::Locale;

pub const PLUGIN_ID: &str = "clocks";
pub const PLUGIN_VERSION: &str = "1.0.0";
pub const APP_VERSION: &str = "1.0.0-alpha";
pub const REPOSITORY: &str = "https://github.com/StreamController/Clocks";

/// Controller input kinds an action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Key,
    Dial,
    Touchscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSupport {
    Supported,
    Untested,
    Unsupported,
}

/// Registered action kind. `create` builds a fresh instance per key.
pub struct ActionHolder {
    pub id_suffix: &'static str,
    pub name: String,
    pub support: [(Input, InputSupport); 3],
    create: fn() -> Box<dyn Action>,
}

impl ActionHolder {
    pub fn id(&self) -> String {
        format!("{PLUGIN_ID}::{}", self.id_suffix)
    }

    pub fn support_for(&self, input: Input) -> InputSupport {
        self.support
            .iter()
            .find(|(i, _)| *i == input)
            .map(|(_, s)| *s)
            .unwrap_or(InputSupport::Unsupported)
    }

    pub fn create(&self) -> Box<dyn Action> {
        (self.create)()
    }
}

impl std::fmt::Debug for ActionHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionHolder")
            .field("id_suffix", &self.id_suffix)
            .field("name", &self.name)
            .field("support", &self.support)
            .finish()
    }
}

fn create_analog_clock() -> Box<dyn Action> {
    Box::new(AnalogClock::new())
}

fn create_digital_clock() -> Box<dyn Action> {
    Box::new(DigitalClock::default())
}

fn create_date() -> Box<dyn Action> {
    Box::new(Date::default())
}

pub struct ClocksPlugin {
    pub name: String,
    locale: Locale,
    holders: Vec<ActionHolder>,
}

impl ClocksPlugin {
    pub fn new(locale: Locale) -> Self {
        use InputSupport::*;

        let holders = vec![
            ActionHolder {
                id_suffix: "AnalogClock",
                name: locale.get("actions.analog-clock.name"),
                support: [
                    (Input::Key, Supported),
                    (Input::Dial, Supported),
                    (Input::Touchscreen, Unsupported),
                ],
                create: create_analog_clock,
            },
            ActionHolder {
                id_suffix: "DigitalClock",
                name: locale.get("actions.digital-clock.name"),
                support: [
                    (Input::Key, Supported),
                    (Input::Dial, Supported),
                    (Input::Touchscreen, Unsupported),
                ],
                create: create_digital_clock,
            },
            ActionHolder {
                id_suffix: "Date",
                name: locale.get("actions.date.name"),
                support: [
                    (Input::Key, Supported),
                    (Input::Dial, Untested),
                    (Input::Touchscreen, Unsupported),
                ],
                create: create_date,
            },
        ];

        let plugin = Self {
            name: locale.get("plugin.name"),
            locale,
            holders,
        };
        info!(
            "Registered plugin '{}' v{} with {} action(s)",
            plugin.name,
            PLUGIN_VERSION,
            plugin.holders.len()
        );
        plugin
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn holders(&self) -> &[ActionHolder] {
        &self.holders
    }

    /// Look up a holder by full id (`clocks::Date`) or bare suffix (`Date`).
    pub fn holder(&self, id: &str) -> Option<&ActionHolder> {
        let suffix = id
            .strip_prefix(PLUGIN_ID)
            .and_then(|rest| rest.strip_prefix("::"))
            .unwrap_or(id);
        self.holders.iter().find(|h| h.id_suffix == suffix)
    }

    pub fn create_action(&self, id: &str) -> Result<Box<dyn Action>> {
        self.holder(id)
            .map(ActionHolder::create)
            .ok_or_else(|| Error::UnknownAction(id.to_string()))
    }
}

impl Default for ClocksPlugin {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
