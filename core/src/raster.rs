//! Translation of geometric shapes into discrete pixels.
//!
//! Lines and circles are rasterized with integer-only decision-variable
//! algorithms in the Bresenham family and produce lists of pixel positions.
//! Filled triangles are converted into *scanlines*, horizontal spans of
//! pixels covered by the triangle on a given row.
//!
//! Pixel positions are [`Vec2i`][crate::math::Vec2i]s with the origin at
//! the top left corner and y increasing downwards. Shapes are specified in
//! [normalized device coordinates][Ndc] and mapped to pixels by a
//! [`Viewport`].

pub use {
    circle::{circle, octants},
    fill::{Scanline, tri_fill, tri_fill_clipped},
    line::{clip_line, line, polyline, tri_outline},
    ndc::Viewport,
};

pub mod circle;
pub mod fill;
pub mod line;
pub mod ndc;

/// Normalized device coordinates.
///
/// Both x and y range from -1.0 to 1.0, with y pointing up. Everything
/// outside of that range is off-canvas.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ndc;

/// Screen space, or continuous pixel coordinates.
///
/// The pixel at integer position (x, y) covers the unit square from
/// (x, y) to (x + 1, y + 1), so its center lies at (x + 0.5, y + 0.5).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Screen;
