pub mod analog;
pub mod date;
pub mod digital;
pub mod schema;
pub mod surface;

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::locale::Locale;

pub use analog::AnalogClock;
pub use date::Date;
pub use digital::{DigitalClock, SeparatorBlink};
pub use schema::{ConfigRow, ConfigSchema};
pub use surface::{MemorySurface, Surface};

/// Host lifecycle hooks for one action bound to a key or dial.
///
/// The host owns scheduling: it calls `on_ready` once when the action
/// appears and `on_tick` on every refresh, passing the wall-clock time to
/// show. Actions never read the clock themselves.
pub trait Action: Send {
    fn on_ready(&mut self, now: NaiveDateTime, surface: &mut dyn Surface);

    fn on_tick(&mut self, now: NaiveDateTime, surface: &mut dyn Surface);

    /// Settings rows the host should present, if any.
    fn config_schema(&self, _locale: &Locale) -> ConfigSchema {
        ConfigSchema::default()
    }

    /// Replace the action's settings with the host's settings dictionary
    /// and redraw. Actions without settings just redraw.
    fn apply_settings(
        &mut self,
        _settings: &serde_json::Value,
        now: NaiveDateTime,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        self.on_ready(now, surface);
        Ok(())
    }

    /// Current settings in the host's dictionary shape.
    fn settings(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}
