use crate::coords::Vec2;
use crate::paint::{Color, LinearGradient, Paint};
use crate::surface::Surface;

use super::{Bevel, Side, edge_trapezoids};

impl Bevel {
    /// Paints the round style: the whole face in the base color, then one
    /// border-wide gradient trapezoid per side.
    ///
    /// Each gradient runs perpendicular to its side across exactly the
    /// border width. The lit sides fade from their shaded variant at the
    /// outer frame into the base color; the shadowed sides fade from the
    /// base color out to their variant. The frame reads as rounded while
    /// the face stays flat.
    pub fn paint_round<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        log::trace!("Bevel: round paint, bounds {:?}, border {}", self.bounds, self.border);

        surface.set_paint(Paint::Solid(self.base_color))?;
        surface.fill_rect(self.bounds)?;

        let (lit, shadow) = self.facet_colors();
        for trap in edge_trapezoids(self.bounds, self.border) {
            surface.set_paint(Paint::LinearGradient(self.side_gradient(trap.side, lit, shadow)))?;
            surface.fill_polygon(&trap.points)?;
        }
        Ok(())
    }

    /// Gradient for one side, anchored at the normalized outer frame.
    fn side_gradient(&self, side: Side, lit: Color, shadow: Color) -> LinearGradient {
        let frame = self.bounds.normalized();
        let min = frame.min();
        let max = frame.max();
        let b = self.border;

        match side {
            Side::Left => {
                LinearGradient::two_stop(min, Vec2::new(min.x + b, min.y), lit, self.base_color)
            }
            Side::Top => {
                LinearGradient::two_stop(min, Vec2::new(min.x, min.y + b), lit, self.base_color)
            }
            Side::Right => LinearGradient::two_stop(
                Vec2::new(max.x - b, min.y),
                Vec2::new(max.x, min.y),
                self.base_color,
                shadow,
            ),
            Side::Bottom => LinearGradient::two_stop(
                Vec2::new(min.x, max.y - b),
                Vec2::new(min.x, max.y),
                self.base_color,
                shadow,
            ),
        }
    }
}
