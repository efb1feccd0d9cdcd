use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 8-bit RGBA color, straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.0, self.1, self.2, self.3)
    }

    /// `#rrggbbaa`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, self.3)
    }
}

impl std::str::FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_color(color: &str) -> Result<Rgba> {
    let s = color.trim().trim_start_matches('#');
    // from_str_radix alone would let a sign through
    if !(s.len() == 6 || s.len() == 8) || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(color.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| Error::InvalidColor(color.to_string()))
    };

    let alpha = if s.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// Appearance of the analog clock face. Fixed once a renderer is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFaceConfig {
    pub hour_hand_color: Rgba,
    pub minute_hand_color: Rgba,
    pub second_hand_color: Rgba,
    pub hub_color: Rgba,
    pub background_color: Rgba,
    pub markings_color: Rgba,
    pub markings_width: u32,
    pub hour_hand_width: u32,
    pub minute_hand_width: u32,
    pub second_hand_width: u32,
}

impl Default for ClockFaceConfig {
    fn default() -> Self {
        Self {
            hour_hand_color: Rgba::WHITE,
            minute_hand_color: Rgba::WHITE,
            second_hand_color: Rgba::WHITE,
            hub_color: Rgba::WHITE,
            background_color: Rgba::TRANSPARENT,
            markings_color: Rgba::WHITE,
            markings_width: 5,
            hour_hand_width: 7,
            minute_hand_width: 5,
            second_hand_width: 3,
        }
    }
}

impl ClockFaceConfig {
    /// Heavier strokes used by the analog clock action so the face stays
    /// legible when scaled down to a key.
    pub fn action_default() -> Self {
        Self {
            markings_width: 9,
            hour_hand_width: 15,
            minute_hand_width: 11,
            second_hand_width: 6,
            ..Self::default()
        }
    }
}

/// Face colors of the analog clock action, as stored by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalogClockSettings {
    pub hour_hand_color: String,
    pub minute_hand_color: String,
    pub second_hand_color: String,
    pub hub_color: String,
    pub background_color: String,
    pub markings_color: String,
}

impl Default for AnalogClockSettings {
    fn default() -> Self {
        let face = ClockFaceConfig::action_default();
        Self {
            hour_hand_color: face.hour_hand_color.to_hex(),
            minute_hand_color: face.minute_hand_color.to_hex(),
            second_hand_color: face.second_hand_color.to_hex(),
            hub_color: face.hub_color.to_hex(),
            background_color: face.background_color.to_hex(),
            markings_color: face.markings_color.to_hex(),
        }
    }
}

impl AnalogClockSettings {
    /// Action face config with these colors. Fails on the first bad color.
    pub fn face_config(&self) -> Result<ClockFaceConfig> {
        Ok(ClockFaceConfig {
            hour_hand_color: self.hour_hand_color.parse()?,
            minute_hand_color: self.minute_hand_color.parse()?,
            second_hand_color: self.second_hand_color.parse()?,
            hub_color: self.hub_color.parse()?,
            background_color: self.background_color.parse()?,
            markings_color: self.markings_color.parse()?,
            ..ClockFaceConfig::action_default()
        })
    }
}

/// Settings of the digital clock action, as stored by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DigitalClockSettings {
    pub twenty_four_format: bool,
    pub show_seconds: bool,
}

impl Default for DigitalClockSettings {
    fn default() -> Self {
        Self {
            twenty_four_format: true,
            show_seconds: false,
        }
    }
}

pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Settings of the date action, as stored by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DateSettings {
    /// strftime-style format string
    pub key: String,
    /// Raw position key; unknown values disable the label
    pub label_position: String,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            key: DEFAULT_DATE_FORMAT.to_string(),
            label_position: LabelPosition::Center.key().to_string(),
        }
    }
}

impl DateSettings {
    pub fn position(&self) -> Option<LabelPosition> {
        self.label_position.parse().ok()
    }
}

/// Where a label sits on the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    Top,
    Center,
    Bottom,
}

impl LabelPosition {
    pub const ALL: [LabelPosition; 3] =
        [LabelPosition::Top, LabelPosition::Center, LabelPosition::Bottom];

    pub fn key(self) -> &'static str {
        match self {
            LabelPosition::Top => "top",
            LabelPosition::Center => "center",
            LabelPosition::Bottom => "bottom",
        }
    }
}

impl std::str::FromStr for LabelPosition {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top" => Ok(LabelPosition::Top),
            "center" => Ok(LabelPosition::Center),
            "bottom" => Ok(LabelPosition::Bottom),
            _ => Err(format!("Unknown label position: {s}")),
        }
    }
}

/// Decode a host settings dictionary, filling in defaults for missing keys.
pub fn settings_from_json<T>(value: &serde_json::Value) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    if value.is_null() {
        return Ok(serde_json::from_value(serde_json::json!({}))?);
    }
    Ok(serde_json::from_value(value.clone())?)
}
