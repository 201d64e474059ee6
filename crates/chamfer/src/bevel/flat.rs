use crate::paint::Paint;
use crate::surface::Surface;

use super::{Bevel, edge_trapezoids};

impl Bevel {
    /// Paints the flat style: the whole face in the base color, then one
    /// flat-shaded trapezoid per border side on top.
    ///
    /// Fill order is face, left, top, right, bottom. The first surface
    /// error aborts the remaining fills.
    pub fn paint_flat<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        log::trace!("Bevel: flat paint, bounds {:?}, border {}", self.bounds, self.border);

        surface.set_paint(Paint::Solid(self.base_color))?;
        surface.fill_rect(self.bounds)?;

        let (lit, shadow) = self.facet_colors();
        for trap in edge_trapezoids(self.bounds, self.border) {
            let color = if trap.side.is_shadow_side() { shadow } else { lit };
            surface.set_paint(Paint::Solid(color))?;
            surface.fill_polygon(&trap.points)?;
        }
        Ok(())
    }
}
