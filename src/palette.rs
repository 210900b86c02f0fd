//! In-memory palette: an ordered list of swatches plus the set of pinned
//! colors that survive regeneration.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{DEFAULT_PALETTE_NAME, DEFAULT_PALETTE_SIZE, ENTRY_PREFIX};
use crate::error::{Error, Result};
use crate::format::{ColorFormat, FormatContext};
use crate::generator;

/// One palette entry. `hex` is always the normalized `#rrggbb` form of `rgb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SwatchRepr")]
pub struct Swatch {
    hex: String,
    rgb: Rgb,
}

/// Swatch as it appears in JSON. `rgb` is authoritative; `hex` may be
/// missing or differently cased but must name the same color.
#[derive(Deserialize)]
struct SwatchRepr {
    hex: Option<String>,
    rgb: Rgb,
}

impl TryFrom<SwatchRepr> for Swatch {
    type Error = Error;

    fn try_from(repr: SwatchRepr) -> Result<Self, Self::Error> {
        let swatch = Self::from(repr.rgb);
        if let Some(hex) = repr.hex {
            if normalize(&hex)? != swatch.hex {
                return Err(Error::SwatchMismatch { hex, rgb: repr.rgb });
            }
        }
        Ok(swatch)
    }
}

impl Swatch {
    /// `None` unless `hex` is a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse::<Rgb>().ok().map(Self::from)
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Channel values.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// See [`Rgb::is_dark`].
    pub fn is_dark(&self) -> bool {
        self.rgb.is_dark()
    }
}

impl From<Rgb> for Swatch {
    fn from(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

/// Settings for a freshly generated palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub name: String,
    pub size: usize,
    /// Format used by views that don't pass their own [`FormatContext`].
    pub format: ColorFormat,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PALETTE_NAME.to_owned(),
            size: DEFAULT_PALETTE_SIZE,
            format: ColorFormat::default(),
        }
    }
}

impl PaletteConfig {
    pub fn format_context(&self) -> FormatContext {
        FormatContext::new(self.format)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaletteRepr")]
pub struct Palette {
    name: String,
    colors: Vec<Swatch>,
    pinned: Vec<String>,
}

/// Palette as it appears in JSON. Pins are re-applied through
/// [`Palette::pin`] so they come out normalized and deduplicated.
#[derive(Deserialize)]
struct PaletteRepr {
    name: String,
    colors: Vec<Swatch>,
    #[serde(default)]
    pinned: Vec<String>,
}

impl TryFrom<PaletteRepr> for Palette {
    type Error = Error;

    fn try_from(repr: PaletteRepr) -> Result<Self, Self::Error> {
        let mut palette = Self::new(repr.name);
        palette.colors = repr.colors;
        for hex in &repr.pinned {
            palette.pin(hex)?;
        }
        Ok(palette)
    }
}

impl Palette {
    /// An empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
            pinned: Vec::new(),
        }
    }

    /// A palette of `count` random swatches.
    pub fn generate<R: Rng + ?Sized>(name: impl Into<String>, count: usize, rng: &mut R) -> Self {
        let mut palette = Self::new(name);
        palette.colors = (0..count).map(|_| generator::random_swatch(rng)).collect();
        tracing::debug!(name = %palette.name, count, "generated palette");
        palette
    }

    pub fn from_config<R: Rng + ?Sized>(config: &PaletteConfig, rng: &mut R) -> Self {
        Self::generate(config.name.clone(), config.size, rng)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Swatches in palette order.
    pub fn colors(&self) -> &[Swatch] {
        &self.colors
    }

    /// Pinned colors in the order they were pinned, as lowercase `#rrggbb`.
    pub fn pinned(&self) -> &[String] {
        &self.pinned
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn push(&mut self, swatch: Swatch) {
        self.colors.push(swatch);
    }

    /// Pin a color. Returns `false` if it was already pinned.
    ///
    /// The color need not be in the palette; pinning is by value, compared
    /// after normalizing case and the `#` prefix.
    pub fn pin(&mut self, hex: &str) -> Result<bool> {
        let hex = normalize(hex)?;
        if self.pinned.contains(&hex) {
            return Ok(false);
        }
        tracing::debug!(%hex, "pinned color");
        self.pinned.push(hex);
        Ok(true)
    }

    /// Unpin a color. Returns whether anything was removed; an unparseable
    /// `hex` was never pinned, so it removes nothing.
    pub fn unpin(&mut self, hex: &str) -> bool {
        let Ok(hex) = normalize(hex) else {
            return false;
        };
        let before = self.pinned.len();
        self.pinned.retain(|pinned| *pinned != hex);
        let removed = self.pinned.len() != before;
        if removed {
            tracing::debug!(%hex, "unpinned color");
        }
        removed
    }

    pub fn is_pinned(&self, hex: &str) -> bool {
        normalize(hex).map_or(false, |hex| self.pinned.contains(&hex))
    }

    /// Replace every unpinned swatch with a random one. Pinned swatches keep
    /// their position; replacements never land on a pinned color, so they
    /// stay unpinned.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut replaced = 0usize;
        for swatch in &mut self.colors {
            if !self.pinned.contains(&swatch.hex) {
                *swatch = unpinned_swatch(rng, &self.pinned);
                replaced += 1;
            }
        }
        tracing::debug!(
            name = %self.name,
            replaced,
            kept = self.colors.len() - replaced,
            "regenerated palette"
        );
    }

    /// `(name, value)` pairs for the exporters: `color-1`, `color-2`, … in
    /// palette order, each rendered in the context's current format.
    pub fn entries(&self, ctx: &FormatContext) -> Vec<(String, String)> {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, swatch)| {
                (
                    format!("{ENTRY_PREFIX}-{}", i + 1),
                    ctx.format_color(swatch, None),
                )
            })
            .collect()
    }

    /// The whole palette, swatches and pins included, as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Draw until the color is not pinned. Pins can never cover the whole
/// 24-bit range in practice, so this terminates.
fn unpinned_swatch<R: Rng + ?Sized>(rng: &mut R, pinned: &[String]) -> Swatch {
    loop {
        let swatch = generator::random_swatch(rng);
        if !pinned.contains(&swatch.hex) {
            return swatch;
        }
    }
}

fn normalize(hex: &str) -> Result<String> {
    hex.parse::<Rgb>()
        .map(Rgb::to_hex)
        .map_err(|source| Error::InvalidHex {
            hex: hex.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::ParseHexError;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn fixed() -> Palette {
        let mut palette = Palette::new("fixed");
        for hex in ["#ff0000", "#00ff00", "#0000ff"] {
            palette.push(Swatch::from_hex(hex).unwrap());
        }
        palette
    }

    #[test]
    fn swatch_normalizes_hex() {
        let swatch = Swatch::from_hex("3B82F6").unwrap();
        assert_eq!(swatch.hex(), "#3b82f6");
        assert_eq!(swatch.rgb(), Rgb::new(0x3b, 0x82, 0xf6));
        assert!(Swatch::from_hex("#abc").is_none());
    }

    #[test]
    fn generate_and_config() {
        let palette = Palette::generate("p", 4, &mut rng());
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.name(), "p");
        assert!(palette.pinned().is_empty());

        let config = PaletteConfig::default();
        let palette = Palette::from_config(&config, &mut rng());
        assert_eq!(palette.len(), DEFAULT_PALETTE_SIZE);
        assert_eq!(palette.name(), DEFAULT_PALETTE_NAME);
    }

    #[test]
    fn pin_is_idempotent_and_case_insensitive() {
        let mut palette = fixed();
        assert!(palette.pin("#FF0000").unwrap());
        assert!(!palette.pin("ff0000").unwrap());
        assert_eq!(palette.pinned(), ["#ff0000"]);
        assert!(palette.is_pinned("#Ff0000"));
    }

    #[test]
    fn pin_rejects_invalid_hex() {
        let mut palette = fixed();
        let err = palette.pin("#f00").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidHex {
                source: ParseHexError::InvalidLength(3),
                ..
            }
        ));
        assert!(palette.pinned().is_empty());
    }

    #[test]
    fn unpin_removes_only_that_color() {
        let mut palette = fixed();
        palette.pin("#ff0000").unwrap();
        palette.pin("#0000ff").unwrap();
        assert!(palette.unpin("#FF0000"));
        assert!(!palette.unpin("#ff0000"));
        assert!(!palette.unpin("garbage"));
        assert_eq!(palette.pinned(), ["#0000ff"]);
    }

    #[test]
    fn regenerate_keeps_pinned_positions() {
        let mut palette = fixed();
        palette.pin("#00ff00").unwrap();
        palette.regenerate(&mut rng());
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.colors()[1].hex(), "#00ff00");
    }

    #[test]
    fn regenerate_with_everything_pinned_is_a_no_op() {
        let mut palette = fixed();
        for hex in ["#ff0000", "#00ff00", "#0000ff"] {
            palette.pin(hex).unwrap();
        }
        let before = palette.clone();
        palette.regenerate(&mut rng());
        assert_eq!(palette, before);
    }

    #[test]
    fn entries_follow_format_context() {
        let palette = fixed();
        let mut ctx = FormatContext::default();
        assert_eq!(
            palette.entries(&ctx),
            vec![
                ("color-1".to_owned(), "#FF0000".to_owned()),
                ("color-2".to_owned(), "#00FF00".to_owned()),
                ("color-3".to_owned(), "#0000FF".to_owned()),
            ]
        );
        ctx.toggle();
        assert_eq!(palette.entries(&ctx)[2].1, "rgb(0, 0, 255)");
    }

    #[test]
    fn json_shape() {
        let mut palette = Palette::new("one");
        palette.push(Swatch::from_hex("#010203").unwrap());
        palette.pin("#010203").unwrap();
        let json: serde_json::Value = serde_json::from_str(&palette.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "one",
                "colors": [{ "hex": "#010203", "rgb": { "r": 1, "g": 2, "b": 3 } }],
                "pinned": ["#010203"],
            })
        );
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: PaletteConfig = serde_json::from_str(r#"{ "size": 8 }"#).unwrap();
        assert_eq!(config.size, 8);
        assert_eq!(config.name, DEFAULT_PALETTE_NAME);
        assert_eq!(config.format_context().current(), ColorFormat::Hex);
    }

    #[test]
    fn regenerate_never_produces_a_pinned_color() {
        let mut palette = fixed();
        let first_draw = generator::random_swatch(&mut rng()).hex().to_owned();
        palette.pin(&first_draw).unwrap();
        palette.regenerate(&mut rng());
        assert!(palette.colors().iter().all(|s| !palette.is_pinned(s.hex())));
    }

    #[test]
    fn load_normalizes_swatches_and_pins() {
        let json = r##"{
            "name": "loaded",
            "colors": [
                { "hex": "#FF0000", "rgb": { "r": 255, "g": 0, "b": 0 } },
                { "rgb": { "r": 1, "g": 2, "b": 3 } }
            ],
            "pinned": ["FF0000", "#ff0000"]
        }"##;
        let mut palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.colors()[0].hex(), "#ff0000");
        assert_eq!(palette.colors()[1].hex(), "#010203");
        assert_eq!(palette.pinned(), ["#ff0000"]);

        palette.regenerate(&mut rng());
        assert_eq!(palette.colors()[0].hex(), "#ff0000");
    }

    #[test]
    fn load_rejects_mismatched_swatch() {
        let json = r##"{
            "name": "bad",
            "colors": [{ "hex": "#FF0000", "rgb": { "r": 0, "g": 0, "b": 255 } }],
            "pinned": ["#ff0000"]
        }"##;
        let err = serde_json::from_str::<Palette>(json).unwrap_err();
        assert!(err.to_string().contains("does not match"), "{err}");
    }

    #[test]
    fn load_rejects_invalid_pin() {
        let json = r##"{ "name": "bad", "colors": [], "pinned": ["#f00"] }"##;
        assert!(serde_json::from_str::<Palette>(json).is_err());
    }

    #[test]
    fn json_reload_is_lossless() {
        let mut palette = Palette::generate("p", 3, &mut rng());
        let first = palette.colors()[0].hex().to_owned();
        palette.pin(&first).unwrap();
        let reloaded: Palette = serde_json::from_str(&palette.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, palette);
    }
}
