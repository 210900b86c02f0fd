//! Channel math: luma weighting and saturating adjustment.
//! Channels are 8-bit; intermediate sums are widened to avoid overflow.

use crate::constants::{DARK_THRESHOLD, LUMA_WEIGHTS};

/// Weighted channel sum, i.e. brightness scaled by 1000.
pub(crate) fn weighted_sum(r: u8, g: u8, b: u8) -> u32 {
    let (wr, wg, wb) = LUMA_WEIGHTS;
    u32::from(r) * wr + u32::from(g) * wg + u32::from(b) * wb
}

/// Perceptual brightness in 0.0–255.0.
pub(crate) fn brightness(r: u8, g: u8, b: u8) -> f64 {
    f64::from(weighted_sum(r, g, b)) / 1000.0
}

/// Dark when brightness < 128. Compared on the scaled integer sum so the
/// boundary is exact.
pub(crate) fn is_dark(r: u8, g: u8, b: u8) -> bool {
    weighted_sum(r, g, b) < DARK_THRESHOLD * 1000
}

/// Add `amount` to a channel, saturating at 0 and 255.
pub(crate) fn shift_channel(channel: u8, amount: i32) -> u8 {
    clamp_channel(i32::from(channel).saturating_add(amount))
}

/// Clamp an arbitrary integer into the 0–255 channel range.
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
