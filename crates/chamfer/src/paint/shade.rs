//! Value-channel shading.
//!
//! Shading operates on the HSV value channel only, so a shaded color keeps
//! the hue and saturation of its base. `factor` 0 is the identity; 1 drives
//! the value channel to its extreme; out-of-range factors extrapolate
//! without clamping.

use super::Color;

/// Raises the value channel toward its maximum:
/// `v' = 1 - (1 - factor) * (1 - v)`.
pub fn lighten(base: Color, factor: f32) -> Color {
    let mut hsva = base.to_hsva();
    hsva.v = 1.0 - (1.0 - factor) * (1.0 - hsva.v);
    hsva.to_color()
}

/// Lowers the value channel toward zero: `v' = (1 - factor) * v`.
pub fn darken(base: Color, factor: f32) -> Color {
    let mut hsva = base.to_hsva();
    hsva.v = (1.0 - factor) * hsva.v;
    hsva.to_color()
}

/// The light and dark variants of `base` used for the two facet polarities.
pub fn derive_shades(base: Color, factor: f32) -> (Color, Color) {
    (lighten(base, factor), darken(base, factor))
}
