//! Random color generation.
//!
//! Every function takes the RNG explicitly; the `*_colors` wrappers use the
//! thread-local one.

use rand::Rng;

use crate::color::Rgb;
use crate::constants::MAX_U24;
use crate::format::ColorFormat;
use crate::palette::Swatch;

/// A uniformly random color.
pub fn random_rgb_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::from_u24(rng.gen_range(0..=MAX_U24))
}

/// Random lowercase `#rrggbb`.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_rgb_color(rng).to_hex()
}

/// Random `rgb(r, g, b)`.
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> String {
    Rgb::new(rng.gen(), rng.gen(), rng.gen()).to_css_rgb()
}

/// A random color wrapped as a palette [`Swatch`].
pub fn random_swatch<R: Rng + ?Sized>(rng: &mut R) -> Swatch {
    Swatch::from(random_rgb_color(rng))
}

/// `count` fresh colors rendered in `format`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, format: ColorFormat) -> Vec<String> {
    tracing::debug!(count, %format, "generating colors");
    (0..count)
        .map(|_| match format {
            ColorFormat::Hex => random_hex(rng),
            ColorFormat::Rgb => random_rgb(rng),
        })
        .collect()
}

/// [`generate`] with the thread-local RNG.
pub fn generate_colors(count: usize, format: ColorFormat) -> Vec<String> {
    generate(&mut rand::thread_rng(), count, format)
}
