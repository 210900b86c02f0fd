//! Rgb type and the free-standing hex conversion helpers.
//!
//! Channels are stored as `u8`, so every `Rgb` is in range by construction.
//! Parsing accepts exactly `#?[0-9a-fA-F]{6}`; formatting always produces
//! lowercase `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::HEX_DIGITS;
use crate::error::ParseHexError;
use crate::math;

/// 24-bit color as three 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from 0–255 channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack `0xRRGGBB`. Bits above the low 24 are ignored.
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    pub const fn to_u24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u24())
    }

    /// CSS functional notation, `rgb(r, g, b)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Perceptual brightness (0.0–255.0) using 299/587/114 luma weights.
    pub fn brightness(self) -> f64 {
        math::brightness(self.r, self.g, self.b)
    }

    /// True when [`brightness`](Self::brightness) is below 128.
    pub fn is_dark(self) -> bool {
        math::is_dark(self.r, self.g, self.b)
    }

    /// Shift every channel by `amount`, saturating at 0 and 255.
    pub fn adjust(self, amount: i32) -> Self {
        Self {
            r: math::shift_channel(self.r, amount),
            g: math::shift_channel(self.g, amount),
            b: math::shift_channel(self.b, amount),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() {
            return Err(ParseHexError::Empty);
        }
        if digits.len() != HEX_DIGITS {
            return Err(ParseHexError::InvalidLength(digits.chars().count()));
        }

        let mut value = 0u32;
        for c in digits.chars() {
            let nibble = c.to_digit(16).ok_or(ParseHexError::InvalidDigit(c))?;
            value = value << 4 | nibble;
        }

        Ok(Self::from_u24(value))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u24())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

/// Parse `#rrggbb` or `rrggbb` (any case). Shorthand and anything else
/// malformed yield `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}

/// Format three channels as lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Like [`rgb_to_hex`] for callers holding raw integers: each channel is
/// clamped into 0–255 first.
pub fn rgb_to_hex_clamped(r: i32, g: i32, b: i32) -> String {
    rgb_to_hex(
        math::clamp_channel(r),
        math::clamp_channel(g),
        math::clamp_channel(b),
    )
}

/// `Some(true)` when the color's brightness is below 128, `None` if `hex`
/// does not parse.
pub fn is_color_dark(hex: &str) -> Option<bool> {
    hex_to_rgb(hex).map(Rgb::is_dark)
}

/// Brighten (positive `amount`) or darken (negative) every channel, clamping
/// at the ends of the range. `None` if `hex` does not parse.
pub fn adjust_color_brightness(hex: &str, amount: i32) -> Option<String> {
    hex_to_rgb(hex).map(|rgb| rgb.adjust(amount).to_hex())
}
