//! Vertex meshes.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};

use crate::math::{color::Color3f, mat::Apply, vec::Vec2, vec::vec2};
use crate::raster::Ndc;

use super::{Error, Topology, Tri, Vertex, vertex};

/// A list of vertices and the topology they are assembled with.
///
/// Corresponds to a single draw call of a GPU API: a vertex buffer with a
/// position and a color attribute, drawn with a given primitive mode.
#[derive(Clone, PartialEq)]
pub struct Mesh<Sp = Ndc> {
    /// How the vertices are assembled into primitives.
    pub topology: Topology,
    /// The vertices of the mesh.
    pub verts: Vec<Vertex<Sp>>,
}

impl<Sp> Mesh<Sp> {
    /// Creates a new mesh with the given topology and vertices.
    pub fn new<V>(topology: Topology, verts: V) -> Self
    where
        V: IntoIterator<Item = Vertex<Sp>>,
    {
        let verts = verts.into_iter().collect();
        Self { topology, verts }
    }

    /// Creates a mesh from flat component arrays: two floats per position
    /// and three floats per color, one position and one color per vertex.
    ///
    /// # Errors
    /// If `positions.len()` is not a multiple of 2, if `colors.len()`
    /// is not a multiple of 3, or if the number of positions and colors
    /// differ.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::geom::{Mesh, Topology, Error};
    ///
    /// let tri: Mesh = Mesh::from_flat(
    ///     Topology::Triangles,
    ///     &[0.0, 0.5, -0.5, -0.5, 0.5, -0.5],
    ///     &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    /// )?;
    /// assert_eq!(tri.verts.len(), 3);
    ///
    /// let bad = Mesh::<()>::from_flat(Topology::Points, &[0.0; 4], &[0.0; 3]);
    /// assert_eq!(bad, Err(Error::CountMismatch { positions: 2, colors: 1 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_flat(
        topology: Topology,
        positions: &[f32],
        colors: &[f32],
    ) -> Result<Self, Error> {
        if positions.len() % 2 != 0 {
            return Err(Error::PositionLength(positions.len()));
        }
        if colors.len() % 3 != 0 {
            return Err(Error::ColorLength(colors.len()));
        }
        let (n_pos, n_col) = (positions.len() / 2, colors.len() / 3);
        if n_pos != n_col {
            return Err(Error::CountMismatch {
                positions: n_pos,
                colors: n_col,
            });
        }
        let verts = positions
            .chunks_exact(2)
            .zip(colors.chunks_exact(3))
            .map(|(p, c)| {
                let color: Color3f = [c[0], c[1], c[2]].into();
                vertex(vec2(p[0], p[1]), color)
            });
        Ok(Self::new(topology, verts))
    }

    /// Returns the number of vertices in `self`.
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Returns whether `self` has no vertices.
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Returns the vertex index triplets of the triangles of `self`.
    ///
    /// Returns an empty list unless the topology is
    /// [`Triangles`][Topology::Triangles] or
    /// [`TriangleFan`][Topology::TriangleFan]. Incomplete trailing
    /// primitives are ignored.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::geom::{Mesh, Topology, Tri};
    ///
    /// let fan = Mesh::<()>::from_flat(Topology::TriangleFan, &[0.0; 10], &[0.0; 15])?;
    /// assert_eq!(fan.triangles(), [Tri([0, 1, 2]), Tri([0, 2, 3]), Tri([0, 3, 4])]);
    /// # Ok::<(), rasterlab_core::geom::Error>(())
    /// ```
    pub fn triangles(&self) -> Vec<Tri<usize>> {
        let n = self.verts.len();
        match self.topology {
            Topology::Triangles => (0..n / 3)
                .map(|i| Tri([3 * i, 3 * i + 1, 3 * i + 2]))
                .collect(),
            Topology::TriangleFan => {
                (1..n.saturating_sub(1)).map(|i| Tri([0, i, i + 1])).collect()
            }
            Topology::Points | Topology::Lines => Vec::new(),
        }
    }

    /// Returns the vertex index pairs of the line segments of `self`.
    ///
    /// Returns an empty list unless the topology is
    /// [`Lines`][Topology::Lines].
    pub fn segments(&self) -> Vec<[usize; 2]> {
        match self.topology {
            Topology::Lines => {
                (0..self.verts.len() / 2).map(|i| [2 * i, 2 * i + 1]).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Returns a copy of `self` with every vertex position mapped by `m`.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::geom::{rect_centered, Mesh};
    /// use rasterlab_core::math::{color::consts::RED, mat::translate2, vec2};
    ///
    /// let square: Mesh = rect_centered(0.5, 0.5, RED);
    /// let moved = square.transform(&translate2(0.5, 0.0));
    /// assert_eq!(moved.verts[0].pos, vec2(0.0, 0.5));
    /// ```
    pub fn transform<M, Dst>(&self, m: &M) -> Mesh<Dst>
    where
        M: Apply<Vec2<Sp>, Output = Vec2<Dst>>,
    {
        let verts = self.verts.iter().map(|v| Vertex {
            pos: m.apply(&v.pos),
            color: v.color,
        });
        Mesh::new(self.topology, verts)
    }

    /// Appends the vertices of `other` to `self`.
    ///
    /// # Panics
    /// If the topologies differ or either is a triangle fan, which cannot
    /// be concatenated.
    pub fn merge(&mut self, other: Self) {
        assert!(
            self.topology == other.topology
                && self.topology != Topology::TriangleFan,
            "cannot merge {:?} and {:?} meshes",
            self.topology,
            other.topology
        );
        self.verts.extend(other.verts);
    }
}

impl<Sp: Debug + Default> Debug for Mesh<Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("topology", &self.topology)
            .field("verts", &self.verts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::math::{color::consts::*, mat::translate2, mat::Mat3};

    use super::*;

    #[test]
    fn from_flat_builds_vertices() {
        let m: Mesh = Mesh::from_flat(
            Topology::Lines,
            &[0.0, 1.0, 2.0, 3.0],
            &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        )
        .unwrap();
        assert_eq!(m.verts[0], vertex(vec2(0.0, 1.0), RED));
        assert_eq!(m.verts[1], vertex(vec2(2.0, 3.0), BLUE));
        assert_eq!(m.segments(), [[0, 1]]);
        assert!(m.triangles().is_empty());
    }

    #[test]
    fn from_flat_rejects_bad_lengths() {
        type M = Mesh<()>;
        let t = Topology::Triangles;
        assert_eq!(M::from_flat(t, &[0.0; 3], &[]), Err(Error::PositionLength(3)));
        assert_eq!(M::from_flat(t, &[0.0; 2], &[0.0; 4]), Err(Error::ColorLength(4)));
        assert_eq!(
            M::from_flat(t, &[0.0; 6], &[0.0; 6]),
            Err(Error::CountMismatch { positions: 3, colors: 2 })
        );
        assert_eq!(M::from_flat(t, &[], &[]).map(|m| m.len()), Ok(0));
    }

    #[test]
    fn triangle_indices() {
        let verts = vec![vertex(vec2(0.0, 0.0), RED); 7];
        let tris: Mesh<()> = Mesh::new(Topology::Triangles, verts.clone());
        assert_eq!(tris.triangles(), [Tri([0, 1, 2]), Tri([3, 4, 5])]);

        let fan: Mesh<()> = Mesh::new(Topology::TriangleFan, verts);
        assert_eq!(fan.triangles().len(), 5);
        assert_eq!(fan.triangles()[4], Tri([0, 5, 6]));
    }

    #[test]
    fn transform_keeps_colors_and_topology() {
        let m: Mesh = Mesh::new(
            Topology::Points,
            [vertex(vec2(1.0, 1.0), GREEN), vertex(vec2(-1.0, 0.0), CYAN)],
        );
        let tf: Mat3<_> = translate2(0.5, -0.5);
        let moved = m.transform(&tf);

        assert_eq!(moved.topology, Topology::Points);
        assert_eq!(moved.verts[0], vertex(vec2(1.5, 0.5), GREEN));
        assert_eq!(moved.verts[1], vertex(vec2(-0.5, -0.5), CYAN));
    }

    #[test]
    fn merge_appends() {
        let mut a: Mesh = Mesh::new(Topology::Points, [vertex(vec2(0.0, 0.0), RED)]);
        let b = Mesh::new(Topology::Points, [vertex(vec2(1.0, 0.0), RED)]);
        a.merge(b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    #[should_panic]
    fn merge_mismatched_topologies_panics() {
        let mut a: Mesh = Mesh::new(Topology::Points, []);
        a.merge(Mesh::new(Topology::Lines, []));
    }
}
