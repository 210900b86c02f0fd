//! Standalone demo: generates a palette, pins a color, and prints every export format.
//!
//! Run with `RUST_LOG=hexpalette=debug` to see the library's tracing output.

use hexpalette::export::ExportFormat;
use hexpalette::{ColorFormat, Palette, PaletteConfig};
use tracing_subscriber::EnvFilter;

fn main() -> hexpalette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = PaletteConfig::default();
    let mut rng = rand::thread_rng();
    let mut palette = Palette::from_config(&config, &mut rng);

    let favorite = palette.colors()[0].hex().to_owned();
    palette.pin(&favorite)?;
    palette.regenerate(&mut rng);

    let mut ctx = config.format_context();
    for swatch in palette.colors() {
        let shade = if swatch.is_dark() { "dark" } else { "light" };
        println!(
            "{}  {:<18} {shade}",
            ctx.format_color(swatch, None),
            ctx.format_color(swatch, Some(ColorFormat::Rgb)),
        );
    }

    for format in ExportFormat::ALL {
        println!("\n# {format}");
        println!("{}", format.render(palette.entries(&ctx))?);
    }

    ctx.toggle();
    println!("\n# css ({})", ctx.current());
    let css = ExportFormat::Css.render(palette.entries(&ctx))?;
    println!("{css}");

    #[cfg(feature = "clipboard")]
    match hexpalette::export::copy_to_clipboard(&css) {
        Ok(()) => println!("\n(copied to clipboard)"),
        Err(err) => tracing::warn!(%err, "could not copy export"),
    }

    Ok(())
}
