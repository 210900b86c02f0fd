//! # hexpalette
//!
//! Color palette building blocks: hex/RGB conversion, dark/light
//! classification, brightness adjustment, random palettes with pinning, and
//! CSS/SCSS/JSON export.
//!
//! ## Usage
//!
//! ```rust
//! use hexpalette::{adjust_color_brightness, hex_to_rgb, is_color_dark, Rgb};
//!
//! assert_eq!(hex_to_rgb("#3B82F6"), Some(Rgb::new(0x3b, 0x82, 0xf6)));
//! assert_eq!(is_color_dark("#000000"), Some(true));
//! assert_eq!(adjust_color_brightness("#808080", 10).as_deref(), Some("#8a8a8a"));
//! ```
//!
//! Building and exporting a palette:
//!
//! ```rust
//! use hexpalette::export::ExportFormat;
//! use hexpalette::{FormatContext, Palette};
//!
//! let mut palette = Palette::generate("demo", 5, &mut rand::thread_rng());
//! let first = palette.colors()[0].hex().to_owned();
//! palette.pin(&first)?;
//!
//! let css = ExportFormat::Css.render(palette.entries(&FormatContext::default()))?;
//! assert_eq!(css.lines().count(), 5);
//! # Ok::<(), hexpalette::Error>(())
//! ```

mod color;
mod constants;
mod error;
pub mod export;
mod format;
pub mod generator;
mod math;
mod palette;

pub use color::{
    adjust_color_brightness, hex_to_rgb, is_color_dark, rgb_to_hex, rgb_to_hex_clamped, Rgb,
};
pub use error::{Error, ParseHexError, Result};
pub use format::{ColorFormat, FormatContext};
pub use palette::{Palette, PaletteConfig, Swatch};
