use std::fmt;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};

use super::Surface;

// ── pixel format ──────────────────────────────────────────────────────────

/// 8-bit straight-alpha RGBA pixel, byte order `r g b a`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Quantizes a [`Color`], clamping each channel into `[0, 1]` first.
    #[inline]
    pub fn from_color(c: Color) -> Self {
        Self::new(quantize(c.r), quantize(c.g), quantize(c.b), quantize(c.a))
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

// ── errors ────────────────────────────────────────────────────────────────

/// Failure from [`RasterSurface`] operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The paint handed to [`Surface::set_paint`] is structurally unusable
    /// (see [`LinearGradient::is_valid`](crate::paint::LinearGradient::is_valid)).
    InvalidPaint { reason: &'static str },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidPaint { reason } => write!(f, "invalid paint: {}", reason),
        }
    }
}

impl std::error::Error for RasterError {}

// ── surface ───────────────────────────────────────────────────────────────

/// CPU raster target: a `width × height` straight-alpha RGBA pixel buffer.
///
/// Semantics:
/// - Pixel centers sit at half-integer coordinates; a fill covers exactly
///   the pixels whose centers fall inside the shape (half-open on the
///   max edges, so abutting fills neither overlap nor leave gaps).
/// - Fills composite source-over with straight alpha.
/// - Geometry outside the buffer is clipped, never an error.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
    paint: Paint,
}

impl RasterSurface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::transparent(); (width as usize) * (height as usize)],
            paint: Paint::Solid(Color::black()),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(Rgba8::from_color(color));
    }

    /// Pixel at `(x, y)`. Row-major, top-left origin.
    ///
    /// # Panics
    /// Panics when `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Raw pixels as `r g b a` bytes, row-major from the top-left.
    #[inline]
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    // ── fill internals ────────────────────────────────────────────────────

    fn fill_span(&mut self, y: u32, xs: Range<u32>, paint: &Paint) {
        match paint {
            Paint::Solid(c) => {
                let src = Rgba8::from_color(*c);
                for x in xs {
                    self.blend_pixel(x, y, src);
                }
            }
            Paint::LinearGradient(g) => {
                let yf = y as f32 + 0.5;
                for x in xs {
                    let src = Rgba8::from_color(g.color_at(Vec2::new(x as f32 + 0.5, yf)));
                    self.blend_pixel(x, y, src);
                }
            }
        }
    }

    #[inline]
    fn blend_pixel(&mut self, x: u32, y: u32, src: Rgba8) {
        let idx = (y * self.width + x) as usize;
        self.pixels[idx] = blend_over(src, self.pixels[idx]);
    }
}

impl Surface for RasterSurface {
    type Error = RasterError;

    /// Rejects structurally unusable paints; the previous paint stays
    /// installed on error.
    fn set_paint(&mut self, paint: Paint) -> Result<(), RasterError> {
        match &paint {
            Paint::Solid(c) if !c.is_finite() => {
                return Err(RasterError::InvalidPaint {
                    reason: "solid color has non-finite channels",
                });
            }
            Paint::LinearGradient(g) if !g.is_valid() => {
                return Err(RasterError::InvalidPaint {
                    reason: "linear gradient needs two finite stops and a non-degenerate axis",
                });
            }
            _ => {}
        }
        self.paint = paint;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), RasterError> {
        let r = rect.normalized();
        if r.is_empty() {
            return Ok(());
        }

        let min = r.min();
        let max = r.max();
        let xs = pixel_span(min.x, max.x, self.width);
        let ys = pixel_span(min.y, max.y, self.height);

        let paint = self.paint.clone();
        for y in ys {
            self.fill_span(y, xs.clone(), &paint);
        }
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2]) -> Result<(), RasterError> {
        if points.len() < 3 {
            log::debug!("RasterSurface: fill_polygon with {} point(s); nothing to fill", points.len());
            return Ok(());
        }

        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for p in points {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let paint = self.paint.clone();
        let mut crossings: Vec<f32> = Vec::new();

        for y in pixel_span(min_y, max_y, self.height) {
            let yf = y as f32 + 0.5;

            // Even-odd: collect edge crossings of the center scanline, then
            // fill between sorted pairs. The half-open test keeps vertices
            // that land exactly on the scanline from double-counting.
            crossings.clear();
            for i in 0..points.len() {
                let p0 = points[i];
                let p1 = points[(i + 1) % points.len()];
                if (p0.y <= yf && p1.y > yf) || (p1.y <= yf && p0.y > yf) {
                    crossings.push(p0.x + (yf - p0.y) * (p1.x - p0.x) / (p1.y - p0.y));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));

            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pixel_span(pair[0], pair[1], self.width), &paint);
            }
        }
        Ok(())
    }
}

// ── span math ─────────────────────────────────────────────────────────────

/// Pixels along one axis whose centers fall in `[min, max)`, clipped to
/// `0..limit`. Degenerate bounds (NaN, inverted) yield an empty or clipped
/// span, never a panic.
fn pixel_span(min: f32, max: f32, limit: u32) -> Range<u32> {
    let limit = limit as f32;
    let lo = (min - 0.5).ceil().clamp(0.0, limit);
    let hi = (max - 0.5).ceil().clamp(0.0, limit);
    lo as u32..hi as u32
}

/// Source-over blend of straight-alpha `src` onto `dst`, in 8-bit fixed
/// point with rounding.
#[inline]
fn blend_over(src: Rgba8, dst: Rgba8) -> Rgba8 {
    if src.a == 255 {
        return src;
    }
    if src.a == 0 {
        return dst;
    }

    let sa = src.a as u32;
    let da = dst.a as u32;
    let inv = 255 - sa;

    // out_a = sa + da * (1 - sa); channels are alpha-weighted then
    // un-premultiplied by out_a. Scaled by 255^2 to stay in integers.
    let oa = sa * 255 + da * inv;
    if oa == 0 {
        return Rgba8::transparent();
    }

    let ch = |s: u8, d: u8| -> u8 {
        ((s as u32 * sa * 255 + d as u32 * da * inv + oa / 2) / oa) as u8
    };

    Rgba8::new(
        ch(src.r, dst.r),
        ch(src.g, dst.g),
        ch(src.b, dst.b),
        ((oa + 127) / 255) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::LinearGradient;

    fn solid(c: Color) -> Paint {
        Paint::Solid(c)
    }

    const RED: Color = Color::opaque(1.0, 0.0, 0.0);

    // ── fill_rect ─────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_covers_pixels_whose_centers_are_inside() {
        let mut s = RasterSurface::new(4, 4);
        s.set_paint(solid(RED)).unwrap();
        s.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0)).unwrap();

        let red = Rgba8::new(255, 0, 0, 255);
        assert_eq!(s.pixel(1, 1), red);
        assert_eq!(s.pixel(2, 2), red);
        assert_eq!(s.pixel(0, 0), Rgba8::transparent());
        assert_eq!(s.pixel(3, 1), Rgba8::transparent());
        assert_eq!(s.pixel(1, 3), Rgba8::transparent());
    }

    #[test]
    fn fill_rect_clips_to_the_buffer() {
        let mut s = RasterSurface::new(4, 4);
        s.set_paint(solid(RED)).unwrap();
        s.fill_rect(Rect::new(-10.0, -10.0, 100.0, 100.0)).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(s.pixel(x, y), Rgba8::new(255, 0, 0, 255));
            }
        }
    }

    #[test]
    fn empty_rect_is_a_no_op() {
        let mut s = RasterSurface::new(4, 4);
        s.set_paint(solid(RED)).unwrap();
        s.fill_rect(Rect::new(2.0, 2.0, 0.0, 5.0)).unwrap();
        assert_eq!(s.pixel(2, 2), Rgba8::transparent());
    }

    // ── fill_polygon ──────────────────────────────────────────────────────

    #[test]
    fn axis_aligned_polygon_matches_fill_rect_exactly() {
        let rect = Rect::new(0.75, 1.25, 5.5, 4.0);

        let mut via_rect = RasterSurface::new(8, 8);
        via_rect.set_paint(solid(RED)).unwrap();
        via_rect.fill_rect(rect).unwrap();

        let mut via_poly = RasterSurface::new(8, 8);
        via_poly.set_paint(solid(RED)).unwrap();
        via_poly.fill_polygon(&rect.corners()).unwrap();

        assert_eq!(via_rect.as_rgba_bytes(), via_poly.as_rgba_bytes());
    }

    #[test]
    fn triangle_covers_centers_under_the_hypotenuse() {
        let mut s = RasterSurface::new(4, 4);
        s.set_paint(solid(RED)).unwrap();
        s.fill_polygon(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        ])
        .unwrap();

        let mut covered = 0;
        for y in 0..4 {
            for x in 0..4 {
                if s.pixel(x, y).a != 0 {
                    covered += 1;
                    // Center must sit strictly inside x + y < 4.
                    assert!((x as f32 + 0.5) + (y as f32 + 0.5) < 4.0);
                }
            }
        }
        assert_eq!(covered, 6);
    }

    #[test]
    fn fewer_than_three_points_is_a_quiet_no_op() {
        let mut s = RasterSurface::new(4, 4);
        s.set_paint(solid(RED)).unwrap();
        s.fill_polygon(&[Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)]).unwrap();
        assert!(s.as_rgba_bytes().iter().all(|&b| b == 0));
    }

    // ── gradients ─────────────────────────────────────────────────────────

    #[test]
    fn horizontal_ramp_samples_at_pixel_centers() {
        let mut s = RasterSurface::new(4, 1);
        let g = LinearGradient::two_stop(
            Vec2::zero(),
            Vec2::new(4.0, 0.0),
            Color::black(),
            Color::white(),
        );
        s.set_paint(Paint::LinearGradient(g)).unwrap();
        s.fill_rect(Rect::new(0.0, 0.0, 4.0, 1.0)).unwrap();

        // Centers at x = 0.5, 1.5, 2.5, 3.5 give t = 0.125, 0.375, 0.625, 0.875.
        assert_eq!(s.pixel(0, 0).r, 32);
        assert_eq!(s.pixel(1, 0).r, 96);
        assert_eq!(s.pixel(2, 0).r, 159);
        assert_eq!(s.pixel(3, 0).r, 223);
        assert!(s.as_rgba_bytes().chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn pad_spread_pins_pixels_beyond_the_axis() {
        let mut s = RasterSurface::new(4, 1);
        let g = LinearGradient::two_stop(
            Vec2::new(1.5, 0.0),
            Vec2::new(2.5, 0.0),
            Color::black(),
            Color::white(),
        );
        s.set_paint(Paint::LinearGradient(g)).unwrap();
        s.fill_rect(Rect::new(0.0, 0.0, 4.0, 1.0)).unwrap();

        assert_eq!(s.pixel(0, 0), Rgba8::new(0, 0, 0, 255));
        assert_eq!(s.pixel(3, 0), Rgba8::new(255, 255, 255, 255));
    }

    // ── blending ──────────────────────────────────────────────────────────

    #[test]
    fn translucent_fill_blends_source_over() {
        let mut s = RasterSurface::new(1, 1);
        s.clear(Color::white());
        s.set_paint(solid(Color::new(1.0, 0.0, 0.0, 0.5))).unwrap();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();

        assert_eq!(s.pixel(0, 0), Rgba8::new(255, 127, 127, 255));
    }

    #[test]
    fn clear_overwrites_without_blending() {
        let mut s = RasterSurface::new(2, 1);
        s.clear(Color::white());
        s.clear(Color::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(s.pixel(0, 0), Rgba8::new(0, 0, 0, 128));
        assert_eq!(s.pixel(1, 0), Rgba8::new(0, 0, 0, 128));
    }

    #[test]
    fn opaque_fill_replaces_destination() {
        let mut s = RasterSurface::new(1, 1);
        s.clear(Color::new(0.2, 0.9, 0.4, 0.7));
        s.set_paint(solid(RED)).unwrap();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(s.pixel(0, 0), Rgba8::new(255, 0, 0, 255));
    }

    // ── set_paint validation ──────────────────────────────────────────────

    #[test]
    fn degenerate_gradient_is_rejected_and_previous_paint_survives() {
        let mut s = RasterSurface::new(1, 1);
        s.set_paint(solid(RED)).unwrap();

        let p = Vec2::new(3.0, 3.0);
        let bad = LinearGradient::two_stop(p, p, Color::black(), Color::white());
        let err = s.set_paint(Paint::LinearGradient(bad)).unwrap_err();
        assert!(matches!(err, RasterError::InvalidPaint { .. }));

        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(s.pixel(0, 0), Rgba8::new(255, 0, 0, 255));
    }

    #[test]
    fn non_finite_solid_is_rejected() {
        let mut s = RasterSurface::new(1, 1);
        let err = s.set_paint(solid(Color::new(f32::NAN, 0.0, 0.0, 1.0))).unwrap_err();
        assert!(matches!(err, RasterError::InvalidPaint { .. }));
    }

    // ── byte export ───────────────────────────────────────────────────────

    #[test]
    fn bytes_are_row_major_rgba() {
        let mut s = RasterSurface::new(2, 1);
        s.set_paint(solid(RED)).unwrap();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        s.set_paint(solid(Color::opaque(0.0, 1.0, 0.0))).unwrap();
        s.fill_rect(Rect::new(1.0, 0.0, 1.0, 1.0)).unwrap();

        assert_eq!(s.as_rgba_bytes(), &[255, 0, 0, 255, 0, 255, 0, 255]);
    }
}
