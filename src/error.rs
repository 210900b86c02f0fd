//! Error types.

use crate::color::Rgb;

/// Why a string could not be read as a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// Nothing left after stripping the optional `#`.
    #[error("empty color string")]
    Empty,

    /// Not exactly six digits. Shorthand `#rgb` lands here too.
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),

    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Errors returned by palette, format and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex color {hex:?}: {source}")]
    InvalidHex {
        hex: String,
        #[source]
        source: ParseHexError,
    },

    /// A loaded swatch whose `hex` names a different color than its `rgb`.
    #[error("swatch hex {hex:?} does not match its rgb {rgb}")]
    SwatchMismatch { hex: String, rgb: Rgb },

    #[error("unknown color format {0:?}, expected \"hex\" or \"rgb\"")]
    UnknownColorFormat(String),

    #[error("unknown export format {0:?}, expected \"css\", \"scss\" or \"json\"")]
    UnknownExportFormat(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The system clipboard could not be opened or written.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
