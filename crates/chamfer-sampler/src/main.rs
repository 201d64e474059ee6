use anyhow::{Context, Result};
use chamfer::coords::Rect;
use chamfer::logging::{LoggingConfig, init_logging};
use chamfer::paint::Color;
use chamfer::surface::RasterSurface;
use chamfer::{Bevel, BevelStyle};

const TILE_W: f32 = 96.0;
const TILE_H: f32 = 64.0;
const GAP: f32 = 16.0;
const BORDER: f32 = 6.0;

/// Paints a sampler sheet of bevel variants and writes it as a PNG.
///
/// Rows are base colors (flat/round x raised/pressed per row), plus a final
/// row sweeping the shading factor. Output path is the first argument,
/// defaulting to `chamfer-sampler.png`.
fn main() -> Result<()> {
    init_logging(LoggingConfig::with_filter("info"));

    let bases = [
        ("steel", Color::from_u8(0x8c, 0x9b, 0xa8, 0xff)),
        ("sand", Color::from_u8(0xb0, 0x8d, 0x57, 0xff)),
        ("moss", Color::from_u8(0x5f, 0x87, 0x4f, 0xff)),
        ("plum", Color::from_u8(0x7a, 0x5a, 0x8c, 0xff)),
    ];
    let variants = [
        (BevelStyle::Flat, false),
        (BevelStyle::Flat, true),
        (BevelStyle::Round, false),
        (BevelStyle::Round, true),
    ];
    let adjust_sweep = [0.2, 0.4, 0.6, 0.8];

    let cols = variants.len();
    let rows = bases.len() + 1;
    let width = (GAP + cols as f32 * (TILE_W + GAP)) as u32;
    let height = (GAP + rows as f32 * (TILE_H + GAP)) as u32;

    let mut surface = RasterSurface::new(width, height);
    surface.clear(Color::gray(0.12));

    for (row, &(name, base)) in bases.iter().enumerate() {
        for (col, &(style, invert)) in variants.iter().enumerate() {
            Bevel::new(tile_bounds(col, row), base, BORDER)
                .invert(invert)
                .paint(style, &mut surface)?;
        }
        log::info!("painted {} tiles (flat/round, raised/pressed)", name);
    }

    for (col, &factor) in adjust_sweep.iter().enumerate() {
        Bevel::new(tile_bounds(col, bases.len()), Color::gray(0.5), BORDER)
            .adjust(factor)
            .paint(BevelStyle::Round, &mut surface)?;
    }
    log::info!("painted shading sweep {:?}", adjust_sweep);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chamfer-sampler.png".into());
    let image = image::RgbaImage::from_raw(width, height, surface.as_rgba_bytes().to_vec())
        .context("pixel buffer does not match the image dimensions")?;
    image.save(&path).with_context(|| format!("writing {}", path))?;

    log::info!("wrote {} ({}x{})", path, width, height);
    Ok(())
}

fn tile_bounds(col: usize, row: usize) -> Rect {
    Rect::new(
        GAP + col as f32 * (TILE_W + GAP),
        GAP + row as f32 * (TILE_H + GAP),
        TILE_W,
        TILE_H,
    )
}
