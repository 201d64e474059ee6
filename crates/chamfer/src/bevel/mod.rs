//! Beveled rectangle painting.
//!
//! A bevel decorates a rectangle with a raised or sunken frame simulating
//! a light from the upper left: the border ring splits into four trapezoid
//! facets ([`edge_trapezoids`]), facet colors derive from the base color by
//! value-channel shading ([`derive_shades`](crate::paint::derive_shades)),
//! and one of two painters draws the result onto any
//! [`Surface`](crate::surface::Surface):
//! - [`Bevel::paint_flat`]: one flat-shaded fill per facet.
//! - [`Bevel::paint_round`]: one border-wide gradient per facet.

mod flat;
mod geometry;
mod round;

pub use geometry::{EdgeTrapezoid, Side, edge_trapezoids};

use crate::coords::Rect;
use crate::paint::{Color, derive_shades};
use crate::surface::Surface;

/// Bevel rendering style.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BevelStyle {
    /// Flat-shaded facets with hard seams.
    Flat,
    /// Per-facet gradients fading into the face color.
    Round,
}

/// Parameters for one beveled rectangle.
///
/// Semantics:
/// - `bounds` is the outer rectangle, border included.
/// - `invert` swaps the lit and shadowed sides (raised vs. pressed).
/// - `adjust` is the shading factor handed to
///   [`derive_shades`](crate::paint::derive_shades); 0 paints everything
///   in the base color, 1 shades to the extremes.
///
/// Degenerate inputs (empty `bounds`, a `border` at or past half the
/// smaller dimension) are painted as-is, not validated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bevel {
    pub bounds: Rect,
    pub base_color: Color,
    pub border: f32,
    pub invert: bool,
    pub adjust: f32,
}

impl Bevel {
    /// New bevel with the default polarity (raised) and shading factor 0.5.
    pub fn new(bounds: Rect, base_color: Color, border: f32) -> Self {
        Self {
            bounds,
            base_color,
            border,
            invert: false,
            adjust: 0.5,
        }
    }

    /// Swapped polarity: light and shadow change sides (pressed look).
    pub fn invert(mut self, on: bool) -> Self {
        self.invert = on;
        self
    }

    /// Shading factor for the derived facet colors.
    pub fn adjust(mut self, factor: f32) -> Self {
        self.adjust = factor;
        self
    }

    /// Paints onto `surface` in the given style.
    pub fn paint<S: Surface>(&self, style: BevelStyle, surface: &mut S) -> Result<(), S::Error> {
        match style {
            BevelStyle::Flat => self.paint_flat(surface),
            BevelStyle::Round => self.paint_round(surface),
        }
    }

    /// Lit and shadowed facet colors for the current polarity.
    fn facet_colors(&self) -> (Color, Color) {
        let (light, dark) = derive_shades(self.base_color, self.adjust);
        if self.invert { (dark, light) } else { (light, dark) }
    }
}
