/// Digital clock action.
/// Shows `HH:MM` (optionally with seconds) as the center label and blinks
/// the separator once per tick while seconds are hidden.
use chrono::NaiveDateTime;
use tracing::debug;

use crate::actions::{Action, ConfigRow, ConfigSchema, Surface};
use crate::config::{settings_from_json, DigitalClockSettings, LabelPosition};
use crate::error::Result;
use crate::locale::Locale;

const FONT_SIZE: u32 = 18;
const FONT_SIZE_WITH_SECONDS: u32 = FONT_SIZE - 4;

/// Blink phase of the hour/minute separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorBlink {
    #[default]
    Visible,
    Hidden,
}

impl SeparatorBlink {
    pub fn toggled(self) -> Self {
        match self {
            SeparatorBlink::Visible => SeparatorBlink::Hidden,
            SeparatorBlink::Hidden => SeparatorBlink::Visible,
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            SeparatorBlink::Visible => ":",
            SeparatorBlink::Hidden => " ",
        }
    }
}

#[derive(Debug, Default)]
pub struct DigitalClock {
    settings: DigitalClockSettings,
    blink: SeparatorBlink,
}

impl DigitalClock {
    pub fn new(settings: DigitalClockSettings, blink: SeparatorBlink) -> Self {
        Self { settings, blink }
    }

    pub fn blink(&self) -> SeparatorBlink {
        self.blink
    }

    /// Center label text and font size for `now`, given the current blink
    /// phase. Does not advance the blink.
    pub fn label(&self, now: &NaiveDateTime) -> (String, u32) {
        let show_seconds = self.settings.show_seconds;
        let separator = if show_seconds {
            ":"
        } else {
            self.blink.separator()
        };

        let hour = if self.settings.twenty_four_format { "%H" } else { "%I" };
        // Seconds stay in 12 hour mode too, matching the smaller font
        let mut format = format!("{hour}{separator}%M");
        let mut font_size = FONT_SIZE;
        if show_seconds {
            format.push_str(separator);
            format.push_str("%S");
            font_size = FONT_SIZE_WITH_SECONDS;
        }

        (now.format(&format).to_string(), font_size)
    }

    fn show(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        let (label, font_size) = self.label(&now);

        if self.settings.twenty_four_format {
            surface.set_label(LabelPosition::Bottom, None, font_size);
        } else {
            let meridiem = now.format("%p").to_string();
            surface.set_label(LabelPosition::Bottom, Some(meridiem), font_size);
        }

        debug!("Digital clock label '{}'", label);
        surface.set_label(LabelPosition::Center, Some(label), font_size);

        self.blink = self.blink.toggled();
    }
}

impl Action for DigitalClock {
    fn on_ready(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        self.show(now, surface);
    }

    fn on_tick(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        self.show(now, surface);
    }

    fn config_schema(&self, locale: &Locale) -> ConfigSchema {
        let defaults = DigitalClockSettings::default();
        ConfigSchema {
            rows: vec![
                ConfigRow::Switch {
                    key: "twenty-four-format".into(),
                    title: locale.get("actions.digital-clock.twenty-four-format"),
                    tooltip: Some(locale.get("actions.digital-clock.twenty-four-format.tooltip")),
                    default: defaults.twenty_four_format,
                },
                ConfigRow::Switch {
                    key: "show-seconds".into(),
                    title: locale.get("actions.digital-clock.show-seconds"),
                    tooltip: None,
                    default: defaults.show_seconds,
                },
            ],
        }
    }

    fn apply_settings(
        &mut self,
        settings: &serde_json::Value,
        now: NaiveDateTime,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        self.settings = settings_from_json(settings)?;
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
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_blink_state_machine() {
        let blink = SeparatorBlink::default();
        assert_eq!(blink, SeparatorBlink::Visible);
        assert_eq!(blink.toggled(), SeparatorBlink::Hidden);
        assert_eq!(blink.toggled().toggled(), SeparatorBlink::Visible);
        assert_eq!(SeparatorBlink::Hidden.separator(), " ");
    }

    #[test]
    fn test_twenty_four_hour_blinks() {
        let mut action = DigitalClock::default();
        let mut surface = MemorySurface::new();

        action.on_ready(at(14, 5, 9), &mut surface);
        assert_eq!(action.blink(), SeparatorBlink::Hidden);
        let center = surface.label(LabelPosition::Center).unwrap();
        assert_eq!(center.text, "14:05");
        assert_eq!(center.font_size, 18);
        assert_eq!(surface.label(LabelPosition::Bottom), None);

        action.on_tick(at(14, 5, 10), &mut surface);
        assert_eq!(surface.label_text(LabelPosition::Center), Some("14 05"));

        action.on_tick(at(14, 5, 11), &mut surface);
        assert_eq!(surface.label_text(LabelPosition::Center), Some("14:05"));
    }

    #[test]
    fn test_seconds_never_blink() {
        let settings = DigitalClockSettings {
            twenty_four_format: true,
            show_seconds: true,
        };
        let mut action = DigitalClock::new(settings, SeparatorBlink::Hidden);
        let mut surface = MemorySurface::new();

        action.on_tick(at(8, 0, 7), &mut surface);
        let center = surface.label(LabelPosition::Center).unwrap();
        assert_eq!(center.text, "08:00:07");
        assert_eq!(center.font_size, 14);

        action.on_tick(at(8, 0, 8), &mut surface);
        assert_eq!(surface.label_text(LabelPosition::Center), Some("08:00:08"));
    }

    #[test]
    fn test_twelve_hour_keeps_seconds() {
        let mut action = DigitalClock::default();
        let mut surface = MemorySurface::new();

        action
            .apply_settings(
                &json!({ "twenty-four-format": false, "show-seconds": true }),
                at(21, 30, 15),
                &mut surface,
            )
            .unwrap();

        assert_eq!(surface.label_text(LabelPosition::Center), Some("09:30:15"));
        let bottom = surface.label(LabelPosition::Bottom).unwrap();
        assert_eq!(bottom.text, "PM");
        assert_eq!(bottom.font_size, 14);

        action
            .apply_settings(&json!({}), at(21, 30, 16), &mut surface)
            .unwrap();
        assert_eq!(surface.label(LabelPosition::Bottom), None);
        assert_eq!(action.settings(), json!({ "twenty-four-format": true, "show-seconds": false }));
    }

    #[test]
    fn test_schema_rows() {
        let schema = DigitalClock::default().config_schema(&Locale::default());
        assert_eq!(schema.rows.len(), 2);
        assert!(matches!(
            schema.row("twenty-four-format"),
            Some(ConfigRow::Switch { default: true, tooltip: Some(_), .. })
        ));
        assert!(matches!(
            schema.row("show-seconds"),
            Some(ConfigRow::Switch { default: false, .. })
        ));
    }

    #[test]
    fn test_bad_settings_rejected() {
        let mut action = DigitalClock::default();
        let mut surface = MemorySurface::new();
        let result = action.apply_settings(&json!({ "show-seconds": "yes" }), at(1, 2, 3), &mut surface);
        assert!(result.is_err());
        assert_eq!(surface.label(LabelPosition::Center), None);
    }
}
