//! Generators for simple flat-colored shapes.

use crate::math::{color::Color3f, vec::Vec2, vec::vec2};
#[cfg(feature = "fp")]
use crate::math::angle::turns;

use super::{Mesh, Topology, vertex};

/// Returns an axis-aligned rectangle with its bottom left corner at
/// (`x`, `y`), made of two triangles.
///
/// The six vertices are, in order: top left, top right, bottom right,
/// bottom left, bottom right, top left.
///
/// # Examples
/// ```
/// use rasterlab_core::geom::{rect, Mesh, Topology};
/// use rasterlab_core::math::{color::consts::BLUE, vec2};
///
/// let cabin: Mesh = rect(-0.4, 0.4, 0.8, 0.4, BLUE);
/// assert_eq!(cabin.topology, Topology::Triangles);
/// assert_eq!(cabin.verts[0].pos, vec2(-0.4, 0.8));
/// assert_eq!(cabin.verts[2].pos, vec2(0.4, 0.4));
/// ```
pub fn rect<Sp>(x: f32, y: f32, w: f32, h: f32, color: Color3f) -> Mesh<Sp> {
    let (l, r, b, t) = (x, x + w, y, y + h);
    let tl = vertex(vec2(l, t), color);
    let tr = vertex(vec2(r, t), color);
    let br = vertex(vec2(r, b), color);
    let bl = vertex(vec2(l, b), color);
    Mesh::new(Topology::Triangles, [tl, tr, br, bl, br, tl])
}

/// Returns an axis-aligned rectangle centered at the origin, with
/// half-width `hw` and half-height `hh`.
pub fn rect_centered<Sp>(hw: f32, hh: f32, color: Color3f) -> Mesh<Sp> {
    rect(-hw, -hh, 2.0 * hw, 2.0 * hh, color)
}

/// Returns a filled circle approximated by a triangle fan.
///
/// The first vertex is the center, followed by `segments + 1` vertices
/// on the rim, counterclockwise starting from angle zero. The first and
/// last rim vertices coincide, closing the fan.
///
/// # Examples
/// ```
/// use rasterlab_core::geom::{circle_fan, Mesh};
/// use rasterlab_core::math::{color::consts::WHITE, vec2};
///
/// let wheel: Mesh = circle_fan(60, 0.2, vec2(-0.35, -0.3), WHITE);
/// assert_eq!(wheel.verts.len(), 62);
/// assert_eq!(wheel.triangles().len(), 60);
/// ```
#[cfg(feature = "fp")]
pub fn circle_fan<Sp>(
    segments: u32,
    radius: f32,
    center: Vec2<Sp>,
    color: Color3f,
) -> Mesh<Sp> {
    let rim = (0..=segments).map(|i| {
        let (sin, cos) = turns(i as f32 / segments as f32).sin_cos();
        vertex(center + vec2(cos, sin) * radius, color)
    });
    let center = vertex(center, color);
    Mesh::new(Topology::TriangleFan, core::iter::once(center).chain(rim))
}

/// Returns a single triangle.
pub fn triangle<Sp>(pts: [Vec2<Sp>; 3], color: Color3f) -> Mesh<Sp> {
    Mesh::new(Topology::Triangles, pts.map(|p| vertex(p, color)))
}

/// Returns a mesh of separate points.
pub fn points<Sp, I>(pts: I, color: Color3f) -> Mesh<Sp>
where
    I: IntoIterator<Item = Vec2<Sp>>,
{
    Mesh::new(Topology::Points, pts.into_iter().map(|p| vertex(p, color)))
}

#[cfg(test)]
mod tests {
    use crate::math::color::consts::*;

    use super::*;

    struct Bare;

    #[test]
    fn shapes_in_any_space() {
        let m: Mesh<Bare> = rect(0.0, 0.0, 1.0, 1.0, RED);
        assert!(m.verts[0] == m.verts[5]);
        assert!(m.verts[2] == m.verts[4]);

        let v = m.verts[0].lerp(&m.verts[2], 0.5);
        assert_eq!((v.pos.x(), v.pos.y()), (0.5, 0.5));
    }

    #[test]
    fn rect_vertex_order() {
        let m: Mesh = rect(0.0, 0.0, 2.0, 1.0, RED);
        let pos: alloc::vec::Vec<_> = m.verts.iter().map(|v| v.pos).collect();
        assert_eq!(
            pos,
            [
                vec2(0.0, 1.0),
                vec2(2.0, 1.0),
                vec2(2.0, 0.0),
                vec2(0.0, 0.0),
                vec2(2.0, 0.0),
                vec2(0.0, 1.0),
            ]
        );
        assert!(m.verts.iter().all(|v| v.color == RED));
    }

    #[test]
    fn centered_rect() {
        let m: Mesh = rect_centered(0.8, 0.4, BLUE);
        assert_eq!(m.verts[0].pos, vec2(-0.8, 0.4));
        assert_eq!(m.verts[2].pos, vec2(0.8, -0.4));
    }

    #[test]
    fn triangle_and_points() {
        let t: Mesh = triangle([vec2(0.0, 0.1), vec2(-0.1, -0.1), vec2(0.1, -0.1)], RED);
        assert_eq!(t.triangles().len(), 1);

        let p: Mesh = points([vec2(0.0, 0.0), vec2(0.5, 0.5)], BLACK);
        assert_eq!(p.topology, Topology::Points);
        assert_eq!(p.len(), 2);
    }

    #[cfg(feature = "fp")]
    #[test]
    fn circle_fan_rim() {
        use crate::assert_approx_eq;

        let c = vec2(0.25, 0.15);
        let m: Mesh = circle_fan(60, 0.1, c, BLACK);

        assert_eq!(m.topology, Topology::TriangleFan);
        assert_eq!(m.verts[0].pos, c);
        assert_approx_eq!(m.verts[1].pos, vec2(0.35, 0.15));
        assert_approx_eq!(m.verts[61].pos, m.verts[1].pos, eps = 1e-5);
        for v in &m.verts[1..] {
            let r = (v.pos - c).dot(&(v.pos - c));
            assert_approx_eq!(r, 0.01, eps = 1e-4);
        }
    }
}
