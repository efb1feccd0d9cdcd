/// Analog clock action: redraws the clock face on every tick.
use chrono::NaiveDateTime;

use crate::actions::{Action, ConfigRow, ConfigSchema, Surface};
use crate::config::{settings_from_json, AnalogClockSettings, ClockFaceConfig};
use crate::error::Result;
use crate::locale::Locale;
use crate::render::{ClockFaceRenderer, ClockReading};

/// Color settings keys with their locale title keys.
const COLOR_ROWS: [(&str, &str); 6] = [
    ("hour-hand-color", "actions.analog-clock.hour-hand-color"),
    ("minute-hand-color", "actions.analog-clock.minute-hand-color"),
    ("second-hand-color", "actions.analog-clock.second-hand-color"),
    ("hub-color", "actions.analog-clock.hub-color"),
    ("background-color", "actions.analog-clock.background-color"),
    ("markings-color", "actions.analog-clock.markings-color"),
];

pub struct AnalogClock {
    settings: AnalogClockSettings,
    renderer: ClockFaceRenderer,
}

impl AnalogClock {
    pub fn new() -> Self {
        Self {
            settings: AnalogClockSettings::default(),
            renderer: ClockFaceRenderer::new(ClockFaceConfig::action_default()),
        }
    }

    pub fn face(&self) -> &ClockFaceConfig {
        self.renderer.config()
    }

    fn show(&self, now: NaiveDateTime, surface: &mut dyn Surface) {
        let image = self.renderer.render_reading(ClockReading::from_time(&now));
        surface.set_media(image);
    }
}

impl Default for AnalogClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for AnalogClock {
    fn on_ready(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        self.show(now, surface);
    }

    fn on_tick(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        self.show(now, surface);
    }

    fn config_schema(&self, locale: &Locale) -> ConfigSchema {
        let defaults = serde_json::to_value(AnalogClockSettings::default()).unwrap_or_default();
        ConfigSchema {
            rows: COLOR_ROWS
                .iter()
                .map(|(key, title)| ConfigRow::Entry {
                    key: key.to_string(),
                    title: locale.get(title),
                    default: defaults[*key].as_str().unwrap_or_default().to_string(),
                })
                .collect(),
        }
    }

    fn apply_settings(
        &mut self,
        settings: &serde_json::Value,
        now: NaiveDateTime,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        let settings: AnalogClockSettings = settings_from_json(settings)?;
        // Keep the previous face when any color is malformed
        self.renderer = ClockFaceRenderer::new(settings.face_config()?);
        self.settings = settings;
        self.show(now, surface);
        Ok(())
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(&self.settings).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::MemorySurface;
    use crate::config::Rgba;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_tick_sets_media() {
        let mut action = AnalogClock::new();
        let mut surface = MemorySurface::new();

        action.on_ready(at(9, 15, 0), &mut surface);
        action.on_tick(at(9, 15, 1), &mut surface);
        assert_eq!(surface.media_updates(), 2);

        let expected = ClockFaceRenderer::new(ClockFaceConfig::action_default()).render(9, 15, 1);
        assert_eq!(surface.media(), Some(&expected));
    }

    #[test]
    fn test_color_settings_redraw() {
        let mut action = AnalogClock::new();
        let mut surface = MemorySurface::new();

        action
            .apply_settings(&json!({ "hub-color": "#ff0000" }), at(6, 0, 0), &mut surface)
            .unwrap();
        assert_eq!(surface.media_updates(), 1);
        assert_eq!(action.face().hub_color, Rgba(255, 0, 0, 255));
        assert_eq!(action.face().hour_hand_width, 15);

        let media = surface.media().unwrap();
        assert_eq!(media.pixel(240, 250), Some(Rgba(255, 0, 0, 255)));
        assert_eq!(action.settings()["hub-color"], "#ff0000");
    }

    #[test]
    fn test_bad_color_keeps_face() {
        let mut action = AnalogClock::new();
        let mut surface = MemorySurface::new();

        let result =
            action.apply_settings(&json!({ "hub-color": "#+f+f+f" }), at(6, 0, 0), &mut surface);
        assert!(result.is_err());
        assert_eq!(action.face(), &ClockFaceConfig::action_default());
        assert_eq!(surface.media_updates(), 0);
    }

    #[test]
    fn test_schema_lists_colors() {
        let schema = AnalogClock::new().config_schema(&Locale::default());
        assert_eq!(schema.rows.len(), 6);
        match schema.row("background-color") {
            Some(ConfigRow::Entry { title, default, .. }) => {
                assert_eq!(title, "Background color");
                assert_eq!(default, "#00000000");
            }
            other => panic!("unexpected row {other:?}"),
        }
    }
}
