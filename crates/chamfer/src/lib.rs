//! Beveled rectangle rendering for widget frames.
//!
//! Draws the classic raised / sunken button relief: a filled rectangle
//! with a four-facet border frame, either flat-shaded (hard facet seams)
//! or rounded (per-side gradients). Facet colors derive from the base
//! color in HSV space, so any base hue gets a matching highlight and
//! shadow. Painting targets a small [`surface::Surface`] trait; the crate
//! ships a command recorder and a CPU rasterizer, and other backends plug
//! in by implementing the trait.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`bevel`] | `Bevel`, `BevelStyle`, `Side`, `edge_trapezoids` |
//! | [`coords`] | `Vec2`, `Rect` |
//! | [`paint`] | `Color`, `Hsva`, shading, `LinearGradient`, `Paint` |
//! | [`surface`] | `Surface`, `RecordingSurface`, `RasterSurface` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use chamfer::coords::Rect;
//! use chamfer::paint::Color;
//! use chamfer::surface::RecordingSurface;
//! use chamfer::{Bevel, BevelStyle};
//!
//! let bevel = Bevel::new(Rect::new(0.0, 0.0, 100.0, 50.0), Color::gray(0.5), 5.0);
//!
//! let mut surface = RecordingSurface::new();
//! bevel.paint(BevelStyle::Flat, &mut surface).unwrap();
//!
//! // One face fill plus one facet per side.
//! assert_eq!(surface.items().len(), 5);
//! ```

pub mod bevel;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod surface;

pub use bevel::{Bevel, BevelStyle};
