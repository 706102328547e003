use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::annotation::IndexConfig;
use crate::error::{OverlayError, Result};

/// RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Purple accent used for face boxes.
    pub const ACCENT: Color = Color::rgb(0x80, 0x00, 0x80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::ACCENT
    }
}

impl FromStr for Color {
    type Err = OverlayError;

    /// Parse `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OverlayError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| {
            let digits = &hex[i..i + 2];
            u8::from_str_radix(digits, 16).map_err(|_| invalid())
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = OverlayError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Outline style for face boxes. Boxes are stroked, never filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub line_width: f32,
    pub color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 4.0,
            color: Color::ACCENT,
        }
    }
}

/// Configuration for the overlay: box style and time matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub stroke: StrokeStyle,
    pub index: IndexConfig,
}

impl OverlayConfig {
    /// Load a configuration from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
