//! Theme color parsing.
//!
//! Accepts `#RRGGBB`, `#AARRGGBB` and a fixed set of color names. Values are
//! packed as 32-bit ARGB.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid hex color regex")
});

const OPAQUE_ALPHA: u32 = 0xFF00_0000;

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("darkgrey", 0xFF44_4444),
    ("grey", 0xFF88_8888),
    ("lightgrey", 0xFFCC_CCCC),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

/// Packed ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeColor(u32);

impl ThemeColor {
    pub const WHITE: ThemeColor = ThemeColor(0xFFFF_FFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Opaque color from a 24-bit `0xRRGGBB` value.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(OPAQUE_ALPHA | (rgb & 0x00FF_FFFF))
    }

    /// Parses a color spec.
    ///
    /// # Errors
    /// - Returns `ColorParseError::Empty` for blank input.
    /// - Returns `ColorParseError::Unknown` for anything that is neither a
    ///   supported hex form nor a known name.
    pub fn parse(spec: &str) -> Result<Self, ColorParseError> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if HEX_COLOR_RE.is_match(trimmed) {
            let digits = &trimmed[1..];
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::Unknown(trimmed.to_string()))?;
            return Ok(if digits.len() == 6 {
                Self::from_rgb(value)
            } else {
                Self(value)
            });
        }

        let lowered = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, argb)| Self(*argb))
            .ok_or_else(|| ColorParseError::Unknown(trimmed.to_string()))
    }

    /// Parses a color spec, falling back to opaque white.
    pub fn parse_or_default(spec: &str) -> Self {
        Self::parse(spec).unwrap_or(Self::WHITE)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `#AARRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Color spec as written in the document, parsed once on construction.
///
/// Serializes as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ColorSpec {
    raw: String,
    parsed: Result<ThemeColor, ColorParseError>,
}

impl ColorSpec {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = ThemeColor::parse(raw.as_str());
        Self { raw, parsed }
    }

    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    /// Parsed color, opaque white when the spec is invalid.
    pub fn color(&self) -> ThemeColor {
        self.parsed.clone().unwrap_or(ThemeColor::WHITE)
    }

    /// Parse failure, if any.
    pub fn error(&self) -> Option<&ColorParseError> {
        self.parsed.as_ref().err()
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<ColorSpec> for String {
    fn from(value: ColorSpec) -> Self {
        value.raw
    }
}

/// Color spec parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    Unknown(String),
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "color spec must not be empty"),
            Self::Unknown(value) => write!(f, "unknown color spec: `{value}`"),
        }
    }
}

impl Error for ColorParseError {}
