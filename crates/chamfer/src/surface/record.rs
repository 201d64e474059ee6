use std::convert::Infallible;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};

use super::Surface;

/// Backend-agnostic record of one fill call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, paint: Paint },
    FillPolygon { points: Vec<Vec2>, paint: Paint },
}

/// Surface that records fill calls instead of drawing.
///
/// Each recorded command carries the paint that was current when it was
/// issued, so a recorded stream replays identically on any other surface
/// regardless of later `set_paint` calls.
#[derive(Debug)]
pub struct RecordingSurface {
    paint: Paint,
    items: Vec<DrawCmd>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns recorded commands in call order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            paint: Paint::Solid(Color::black()),
            items: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn set_paint(&mut self, paint: Paint) -> Result<(), Infallible> {
        self.paint = paint;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), Infallible> {
        self.items.push(DrawCmd::FillRect {
            rect,
            paint: self.paint.clone(),
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2]) -> Result<(), Infallible> {
        self.items.push(DrawCmd::FillPolygon {
            points: points.to_vec(),
            paint: self.paint.clone(),
        });
        Ok(())
    }
}
