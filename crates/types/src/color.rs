use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;
use thiserror::Error;

/// A device color. Components are in `0.0..=1.0` and are not clamped.
///
/// Equality is structural: `Color::Gray(0.0)` and `Color::rgb(0.0, 0.0, 0.0)`
/// paint the same black but are different values.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// 0 is black, 1 is white.
    Gray(f64),
    Rgb { r: f64, g: f64, b: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color is empty")]
    Empty,
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
    #[error("invalid hex color length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::Gray(0.0);
    pub const WHITE: Color = Color::Gray(1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// 25% gray.
    pub const DARK_GRAY: Color = Color::Gray(0.25);
    /// 50% gray.
    pub const GRAY: Color = Color::Gray(0.5);
    /// 75% gray.
    pub const LIGHT_GRAY: Color = Color::Gray(0.75);

    pub const fn gray(value: f64) -> Self {
        Color::Gray(value)
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB`.
    ///
    /// Shorthand digits scale by 15 (`F` is 1.0), full-width bytes by 255.
    /// Any character outside `[0-9a-fA-F]` or any other digit count is an error.
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        let mut value: u32 = 0;
        let mut digits = 0usize;
        for c in hex.chars() {
            let digit = c.to_digit(16).ok_or(ColorParseError::InvalidDigit(c))?;
            value = value.wrapping_mul(16).wrapping_add(digit);
            digits += 1;
        }

        match digits {
            0 => Err(ColorParseError::Empty),
            3 => {
                let nibble = |shift: u32| ((value >> shift) & 0xF) as f64 / 15.0;
                Ok(Color::rgb(nibble(8), nibble(4), nibble(0)))
            }
            6 => {
                let byte = |shift: u32| ((value >> shift) & 0xFF) as f64 / 255.0;
                Ok(Color::rgb(byte(16), byte(8), byte(0)))
            }
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum Tagged {
            Gray(f64),
            Rgb { r: f64, g: f64, b: f64 },
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Tagged(Tagged),
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Color::from_hex(&s).map_err(de::Error::custom),
            ColorDef::Tagged(Tagged::Gray(v)) => Ok(Color::Gray(v)),
            ColorDef::Tagged(Tagged::Rgb { r, g, b }) => Ok(Color::Rgb { r, g, b }),
        }
    }
}
