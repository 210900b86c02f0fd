//! Display format selection.
//!
//! `FormatContext` holds the "current format" that views render swatches in.
//! It is built once by whoever owns the palette view and handed down by
//! reference, so two contexts never share state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::palette::Swatch;

/// How a color is rendered as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#3B82F6`
    #[default]
    Hex,
    /// `rgb(59, 130, 246)`
    Rgb,
}

impl ColorFormat {
    /// The other format.
    pub fn toggled(self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hex,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
        })
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            _ => Err(Error::UnknownColorFormat(s.to_owned())),
        }
    }
}

/// The format currently selected for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatContext {
    current: ColorFormat,
}

impl FormatContext {
    /// Start out rendering in `format`.
    pub fn new(format: ColorFormat) -> Self {
        Self { current: format }
    }

    /// The format used when `format_color` gets no override.
    pub fn current(&self) -> ColorFormat {
        self.current
    }

    /// Switch the current format.
    pub fn set(&mut self, format: ColorFormat) {
        tracing::trace!(from = %self.current, to = %format, "set color format");
        self.current = format;
    }

    /// Flip between hex and rgb, returning the new format.
    pub fn toggle(&mut self) -> ColorFormat {
        self.set(self.current.toggled());
        self.current
    }

    /// Render `swatch` in `format`, or in the current format when `None`.
    ///
    /// Hex is upper-cased for display; rgb uses CSS functional notation.
    pub fn format_color(&self, swatch: &Swatch, format: Option<ColorFormat>) -> String {
        match format.unwrap_or(self.current) {
            ColorFormat::Hex => swatch.hex().to_uppercase(),
            ColorFormat::Rgb => swatch.rgb().to_css_rgb(),
        }
    }
}
