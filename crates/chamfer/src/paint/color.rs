/// Straight-alpha RGBA color with `f32` channels.
///
/// Semantics:
/// - `r`, `g`, `b` are independent of `a` (straight, not premultiplied).
/// - Channels are nominally in `[0, 1]` but not clamped; shading may
///   extrapolate outside the range, and rasterization clamps on quantize.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque grey with all RGB channels at `v`.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self { r: v, g: v, b: v, a: 1.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::gray(0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::gray(1.0)
    }

    /// Creates a color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Channel-wise linear interpolation from `self` (t = 0) to `to` (t = 1).
    #[inline]
    pub fn lerp(self, to: Color, t: f32) -> Color {
        Color::new(
            self.r + (to.r - self.r) * t,
            self.g + (to.g - self.g) * t,
            self.b + (to.b - self.b) * t,
            self.a + (to.a - self.a) * t,
        )
    }

    /// Decomposes into hue/saturation/value/alpha.
    ///
    /// Hue is in degrees `[0, 360)`, with 0 for achromatic colors.
    pub fn to_hsva(self) -> Hsva {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsva { h, s, v: max, a: self.a }
    }
}

/// Hue/saturation/value/alpha decomposition of a [`Color`].
///
/// Semantics:
/// - `h` in degrees; [`to_color`](Self::to_color) wraps it into `[0, 360)`.
/// - `s`, `v`, `a` nominally in `[0, 1]`; `v` is deliberately not clamped
///   so value-channel shading can extrapolate.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsva {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Hsva {
    /// Recomposes into RGBA. Inverse of [`Color::to_hsva`] for in-range
    /// inputs; out-of-range `v` extrapolates linearly.
    pub fn to_color(self) -> Color {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let c = self.v * self.s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::new(r + m, g + m, b + m, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn colors_close(a: Color, b: Color) -> bool {
        close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b) && close(a.a, b.a)
    }

    // ── to_hsva ───────────────────────────────────────────────────────────

    #[test]
    fn grey_decomposes_with_zero_saturation() {
        let hsva = Color::gray(0.5).to_hsva();
        assert_eq!(hsva.h, 0.0);
        assert_eq!(hsva.s, 0.0);
        assert_eq!(hsva.v, 0.5);
        assert_eq!(hsva.a, 1.0);
    }

    #[test]
    fn known_blue_decomposition() {
        // (0.2, 0.4, 0.8): max 0.8 on blue, delta 0.6.
        let hsva = Color::opaque(0.2, 0.4, 0.8).to_hsva();
        assert!(close(hsva.h, 220.0));
        assert!(close(hsva.s, 0.75));
        assert!(close(hsva.v, 0.8));
    }

    #[test]
    fn primary_hues() {
        assert!(close(Color::opaque(1.0, 0.0, 0.0).to_hsva().h, 0.0));
        assert!(close(Color::opaque(0.0, 1.0, 0.0).to_hsva().h, 120.0));
        assert!(close(Color::opaque(0.0, 0.0, 1.0).to_hsva().h, 240.0));
    }

    #[test]
    fn hue_wraps_into_range_for_red_magenta() {
        // g < b with max on red lands in the (300, 360) sector.
        let hsva = Color::opaque(1.0, 0.0, 0.5).to_hsva();
        assert!(hsva.h > 300.0 && hsva.h < 360.0);
    }

    // ── to_color ──────────────────────────────────────────────────────────

    #[test]
    fn grey_round_trips_exactly() {
        for v in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let c = Color::gray(v);
            assert_eq!(c.to_hsva().to_color(), c);
        }
    }

    #[test]
    fn colored_round_trips_within_epsilon() {
        let samples = [
            Color::opaque(0.2, 0.4, 0.8),
            Color::opaque(0.9, 0.1, 0.3),
            Color::new(0.1, 0.8, 0.4, 0.5),
            Color::opaque(0.33, 0.33, 0.9),
        ];
        for c in samples {
            assert!(colors_close(c.to_hsva().to_color(), c), "{c:?}");
        }
    }

    #[test]
    fn hue_wraps_modulo_360() {
        let a = Hsva { h: 30.0, s: 0.5, v: 0.5, a: 1.0 }.to_color();
        let b = Hsva { h: 390.0, s: 0.5, v: 0.5, a: 1.0 }.to_color();
        let c = Hsva { h: -330.0, s: 0.5, v: 0.5, a: 1.0 }.to_color();
        assert!(colors_close(a, b));
        assert!(colors_close(a, c));
    }

    #[test]
    fn overdriven_value_extrapolates() {
        let c = Hsva { h: 0.0, s: 0.0, v: 1.5, a: 1.0 }.to_color();
        assert_eq!(c.r, 1.5);
        assert_eq!(c.g, 1.5);
        assert_eq!(c.b, 1.5);
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::black();
        let b = Color::white();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::gray(0.5));
    }

    // ── from_u8 ───────────────────────────────────────────────────────────

    #[test]
    fn from_u8_scales_to_unit_range() {
        let c = Color::from_u8(255, 0, 51, 255);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!(close(c.b, 0.2));
        assert_eq!(c.a, 1.0);
    }
}
