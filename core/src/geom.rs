//! Basic geometric primitives.
//!
//! Shapes are described the way a GPU vertex buffer would describe them:
//! a list of colored [vertices][Vertex] plus a [topology][Topology] that
//! says how consecutive vertices form points, lines, or triangles.

use core::fmt;

use crate::math::{color::Color3f, vec::Vec2};
use crate::raster::Ndc;

pub use mesh::Mesh;
pub use shape::{points, rect, rect_centered, triangle};
#[cfg(feature = "fp")]
pub use shape::circle_fan;

pub mod mesh;
pub mod shape;

/// Vertex with a position and a color.
pub struct Vertex<Sp = Ndc> {
    pub pos: Vec2<Sp>,
    pub color: Color3f,
}

/// Triangle, defined by three vertices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// How the vertices of a [`Mesh`] are assembled into primitives.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Each vertex is a separate point.
    Points,
    /// Each pair of vertices is a separate line segment.
    Lines,
    /// Each triplet of vertices is a separate triangle.
    #[default]
    Triangles,
    /// The first vertex is shared by all triangles; each further pair of
    /// consecutive vertices forms a triangle with it.
    TriangleFan,
}

/// Error type returned when building a mesh from flat arrays fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The number of position components is not a multiple of two.
    PositionLength(usize),
    /// The number of color components is not a multiple of three.
    ColorLength(usize),
    /// The number of positions and colors differ.
    CountMismatch { positions: usize, colors: usize },
}

/// Returns a new vertex with the given position and color.
#[inline]
pub const fn vertex<Sp>(pos: Vec2<Sp>, color: Color3f) -> Vertex<Sp> {
    Vertex { pos, color }
}

impl<Sp> Vertex<Sp> {
    /// Linearly interpolates both the position and the color of `self`
    /// towards `other`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            pos: self.pos + (other.pos - self.pos) * t,
            color: self.color.lerp(&other.color, t),
        }
    }
}

impl<Sp> Copy for Vertex<Sp> {}

impl<Sp> Clone for Vertex<Sp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Sp> PartialEq for Vertex<Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.color == other.color
    }
}

impl Topology {
    /// Returns the number of primitives formed by `n` vertices.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::geom::Topology;
    /// assert_eq!(Topology::Triangles.count(7), 2);
    /// assert_eq!(Topology::TriangleFan.count(5), 3);
    /// assert_eq!(Topology::TriangleFan.count(2), 0);
    /// ```
    pub fn count(self, n: usize) -> usize {
        match self {
            Self::Points => n,
            Self::Lines => n / 2,
            Self::Triangles => n / 3,
            Self::TriangleFan => n.saturating_sub(2),
        }
    }
}

impl<Sp: fmt::Debug + Default> fmt::Debug for Vertex<Sp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("pos", &self.pos)
            .field("color", &self.color)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionLength(n) => {
                write!(f, "{n} position components is not a multiple of 2")
            }
            Self::ColorLength(n) => {
                write!(f, "{n} color components is not a multiple of 3")
            }
            Self::CountMismatch { positions, colors } => write!(
                f,
                "vertex count mismatch: {positions} positions, {colors} colors"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::math::{color::consts::*, vec::vec2};

    use super::*;

    #[test]
    fn vertex_lerp() {
        let a: Vertex = vertex(vec2(0.0, 0.0), BLACK);
        let b = vertex(vec2(2.0, -4.0), WHITE);
        let m = a.lerp(&b, 0.5);
        assert_eq!(m.pos, vec2(1.0, -2.0));
        assert_eq!(m.color, GRAY);
    }

    #[test]
    fn topology_counts() {
        assert_eq!(Topology::Points.count(3), 3);
        assert_eq!(Topology::Lines.count(5), 2);
        assert_eq!(Topology::Triangles.count(6), 2);
        assert_eq!(Topology::TriangleFan.count(0), 0);
        assert_eq!(Topology::TriangleFan.count(62), 60);
    }

    #[test]
    fn error_display() {
        use alloc::string::ToString;
        let e = Error::CountMismatch { positions: 3, colors: 2 };
        assert_eq!(e.to_string(), "vertex count mismatch: 3 positions, 2 colors");
    }
}
