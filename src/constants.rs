//! Thresholds, weights and defaults.

/// Luma weights per 1000 for red, green and blue (YIQ).
pub const LUMA_WEIGHTS: (u32, u32, u32) = (299, 587, 114);

/// Colors with brightness strictly below this are dark.
pub const DARK_THRESHOLD: u32 = 128;

/// Largest value a packed 24-bit color can hold.
pub const MAX_U24: u32 = 0x00FF_FFFF;

/// Digits in a hex color, not counting the `#`.
pub const HEX_DIGITS: usize = 6;

/// Number of colors in a freshly generated palette
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Name given to palettes created without one
pub const DEFAULT_PALETTE_NAME: &str = "Untitled";

/// Prefix for the variable names produced by [`Palette::entries`](crate::Palette::entries).
pub const ENTRY_PREFIX: &str = "color";
