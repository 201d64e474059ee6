use crate::coords::{Rect, Vec2};

/// One side of a rectangular border, in the fixed cyclic order used
/// throughout the crate: left, top, right, bottom.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// All sides in cyclic order. Side `i` spans outer corners `i - 1`
    /// and `i` of the clockwise corner walk starting at top-left.
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Top => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }

    /// True for the sides that face away from an upper-left light source
    /// (right and bottom).
    #[inline]
    pub const fn is_shadow_side(self) -> bool {
        self.index() / 2 == 1
    }
}

/// One border side as a filled quad between the outer and inner rectangle
/// edges.
///
/// `points` is a closed outline: the side's outer edge walked clockwise,
/// then the matching inner edge walked back. The slanted ends are the
/// diagonal seams shared with the neighbouring sides.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeTrapezoid {
    pub side: Side,
    pub points: [Vec2; 4],
}

/// Splits the border ring between `bounds` and `bounds.inset(border)` into
/// one trapezoid per side.
///
/// Neighbouring trapezoids share their diagonal seams exactly, so the four
/// outlines partition the ring. `bounds` is normalized first; a `border`
/// of half the smaller dimension or more collapses the inner rectangle
/// and with it the trapezoids, which is left to the caller to avoid.
pub fn edge_trapezoids(bounds: Rect, border: f32) -> [EdgeTrapezoid; 4] {
    let frame = bounds.normalized();
    let outer = frame.corners();
    let inner = frame.inset(border).corners();

    Side::ALL.map(|side| {
        let i = side.index();
        let prev = (i + 3) % 4;
        EdgeTrapezoid {
            side,
            points: [outer[prev], outer[i], inner[i], inner[prev]],
        }
    })
}
