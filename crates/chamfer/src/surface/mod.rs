//! Drawing surfaces the bevel painters target.
//!
//! [`Surface`] is the capability contract: a stateful fill paint plus two
//! fill primitives. The crate ships two implementations:
//! - [`RecordingSurface`] captures commands for inspection and testing.
//! - [`RasterSurface`] fills a CPU pixel buffer.
//!
//! Extending to a new backend (PDF, GPU, ...):
//! - implement [`Surface`] over the target's native drawing calls
//! - map [`Paint`] variants onto the target's fill sources
//! - surface the target's own failure type as `Surface::Error`

mod raster;
mod record;

pub use raster::{RasterError, RasterSurface, Rgba8};
pub use record::{DrawCmd, RecordingSurface};

use crate::coords::{Rect, Vec2};
use crate::paint::Paint;

/// Stateful drawing target.
///
/// Semantics:
/// - [`set_paint`](Self::set_paint) installs the fill source used by every
///   subsequent fill call until replaced.
/// - Fills composite in call order; there is no z-ordering.
/// - Errors are the backend's own; callers propagate them unchanged.
pub trait Surface {
    type Error;

    /// Installs the paint used by subsequent fills.
    fn set_paint(&mut self, paint: Paint) -> Result<(), Self::Error>;

    /// Fills an axis-aligned rectangle with the current paint.
    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    /// Fills a closed polygon with the current paint.
    ///
    /// The outline closes implicitly from the last point back to the first.
    /// Self-intersecting outlines fill even-odd.
    fn fill_polygon(&mut self, points: &[Vec2]) -> Result<(), Self::Error>;
}
