use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside the [0, 1] axis range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Maps a raw axis parameter into `[0, 1]` according to the mode.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t.rem_euclid(1.0),
            SpreadMode::Reflect => {
                let cycle = t.rem_euclid(2.0);
                if cycle > 1.0 { 2.0 - cycle } else { cycle }
            }
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stop lists are expected sorted ascending;
/// [`LinearGradient::color_at`] treats out-of-order stops as hard edges
/// rather than failing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as
///   geometry; the axis is `end - start`.
/// - Stops hold straight-alpha colors.
/// - `spread` defines behavior for points projecting outside the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Two-stop gradient from `from` at `start` to `to` at `end`, padded
    /// (clamped to the end colors) outside the axis.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            SpreadMode::Pad,
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Renderers may still impose additional constraints (stop sorting,
    /// stop count limits, etc.).
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Gradient axis vector (`end - start`).
    #[inline]
    pub fn axis(&self) -> Vec2 {
        self.end - self.start
    }

    /// Color at an arbitrary point: projects `p` onto the axis, applies the
    /// spread mode, then samples the stop list.
    ///
    /// Callers are expected to have checked [`is_valid`](Self::is_valid);
    /// a degenerate axis divides by zero here and yields the NaN-path
    /// result of [`SpreadMode::apply`].
    pub fn color_at(&self, p: Vec2) -> Color {
        let axis = self.axis();
        let t = (p - self.start).dot(axis) / axis.dot(axis);
        self.sample(self.spread.apply(t))
    }

    /// Samples the stop list at `t` in [0, 1].
    fn sample(&self, t: f32) -> Color {
        let mut prev = match self.stops.first() {
            Some(s) => *s,
            None => return Color::default(),
        };
        if t <= prev.t {
            return prev.color;
        }
        for &stop in &self.stops[1..] {
            if t <= stop.t {
                let span = stop.t - prev.t;
                if span <= 0.0 {
                    return stop.color;
                }
                return prev.color.lerp(stop.color, (t - prev.t) / span);
            }
            prev = stop;
        }
        prev.color
    }
}
