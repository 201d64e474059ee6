use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin, +y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Shrinks every edge inward by `d` (grows outward for negative `d`).
    ///
    /// The result is not clamped: an inset wider than half the rectangle
    /// yields a negative-size rect, which [`is_empty`](Self::is_empty)
    /// reports.
    #[inline]
    #[must_use]
    pub fn inset(self, d: f32) -> Rect {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            self.size.x - 2.0 * d,
            self.size.y - 2.0 * d,
        )
    }

    /// Corner points in clockwise order: top-left, top-right, bottom-right,
    /// bottom-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }
}
