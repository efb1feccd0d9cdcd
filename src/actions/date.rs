/// Date action: formats the current date with a user strftime key and
/// shows it at the chosen label position.
use std::fmt::Write;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::actions::schema::ComboItem;
use crate::actions::{Action, ConfigRow, ConfigSchema, Surface};
use crate::config::{settings_from_json, DateSettings, LabelPosition};
use crate::error::{Error, Result};
use crate::locale::Locale;

const FONT_SIZE: u32 = 10;

#[derive(Debug, Default)]
pub struct Date {
    settings: DateSettings,
}

impl Date {
    pub fn new(settings: DateSettings) -> Self {
        Self { settings }
    }

    fn show(&self, now: NaiveDateTime, surface: &mut dyn Surface) {
        let Some(position) = self.settings.position() else {
            debug!(
                "Date label hidden, unknown position '{}'",
                self.settings.label_position
            );
            return;
        };

        match format_date(&now, &self.settings.key) {
            Ok(text) => surface.set_label(position, Some(text), FONT_SIZE),
            Err(e) => {
                warn!("{}", e);
                surface.set_label(position, None, FONT_SIZE);
            }
        }
    }
}

/// Format `now` with a strftime key, rejecting unknown specifiers instead of
/// panicking on them.
pub fn format_date(now: &NaiveDateTime, key: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(key)).map_err(|_| Error::InvalidDateFormat(key.to_string()))?;
    Ok(out)
}

impl Action for Date {
    fn on_ready(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        self.show(now, surface);
    }

    fn on_tick(&mut self, now: NaiveDateTime, surface: &mut dyn Surface) {
        self.show(now, surface);
    }

    fn config_schema(&self, locale: &Locale) -> ConfigSchema {
        let defaults = DateSettings::default();
        let items = LabelPosition::ALL
            .iter()
            .map(|p| ComboItem {
                key: p.key().to_string(),
                label: locale.get(&format!("actions.date.label-position.{}", p.key())),
            })
            .collect();

        ConfigSchema {
            rows: vec![
                ConfigRow::Entry {
                    key: "key".into(),
                    title: locale.get("actions.date.format"),
                    default: defaults.key,
                },
                ConfigRow::Combo {
                    key: "label-position".into(),
                    title: locale.get("actions.date.label-position"),
                    items,
                    default: defaults.label_position,
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
        let settings: DateSettings = settings_from_json(settings)?;

        // A moved label must not leave its old copy behind
        if settings.label_position != self.settings.label_position {
            for position in LabelPosition::ALL {
                surface.set_label(position, None, FONT_SIZE);
            }
        }

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
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(y: i32, mo: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_default_format() {
        let mut action = Date::default();
        let mut surface = MemorySurface::new();
        action.on_ready(at(2024, 3, 9), &mut surface);

        let label = surface.label(LabelPosition::Center).unwrap();
        assert_eq!(label.text, "09-03-2024");
        assert_eq!(label.font_size, 10);
    }

    #[test]
    fn test_position_change_clears_labels() {
        let mut action = Date::default();
        let mut surface = MemorySurface::new();
        action.on_tick(at(2024, 3, 9), &mut surface);
        surface.set_label(LabelPosition::Bottom, Some("stale".into()), 10);

        action
            .apply_settings(
                &json!({ "key": "%Y/%m/%d", "label-position": "top" }),
                at(2024, 3, 10),
                &mut surface,
            )
            .unwrap();

        assert_eq!(surface.label_text(LabelPosition::Top), Some("2024/03/10"));
        assert_eq!(surface.label(LabelPosition::Center), None);
        assert_eq!(surface.label(LabelPosition::Bottom), None);
    }

    #[test]
    fn test_unknown_position_shows_nothing() {
        let mut action = Date::new(DateSettings {
            label_position: "left".into(),
            ..DateSettings::default()
        });
        let mut surface = MemorySurface::new();
        action.on_tick(at(2024, 1, 1), &mut surface);
        for position in LabelPosition::ALL {
            assert_eq!(surface.label(position), None);
        }
    }

    #[test]
    fn test_invalid_format_is_not_fatal() {
        assert!(format_date(&at(2024, 1, 1), "%Q").is_err());

        let mut action = Date::default();
        let mut surface = MemorySurface::new();
        action.on_tick(at(2024, 1, 1), &mut surface);
        action
            .apply_settings(&json!({ "key": "%Q" }), at(2024, 1, 2), &mut surface)
            .unwrap();
        assert_eq!(surface.label(LabelPosition::Center), None);
    }

    #[test]
    fn test_schema_rows() {
        let schema = Date::default().config_schema(&Locale::default());
        match schema.row("label-position") {
            Some(ConfigRow::Combo { items, default, .. }) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[2].label, "Bottom");
                assert_eq!(default, "center");
            }
            other => panic!("unexpected row {other:?}"),
        }
        assert!(matches!(schema.row("key"), Some(ConfigRow::Entry { .. })));
    }
}
