//! Paint model shared by the bevel painters and drawing surfaces.
//!
//! Scope:
//! - color representation (straight alpha) and HSV decomposition
//! - value-channel shading helpers
//! - paint sources (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod shade;

pub use color::{Color, Hsva};
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use shade::{darken, derive_shades, lighten};

/// Paint source for filling geometry.
///
/// This is intentionally a small enum. Extend by adding variants:
/// - `RadialGradient`
/// - `Pattern`
///
/// while keeping the enum stable for surface dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}
