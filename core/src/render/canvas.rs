//! A framebuffer that meshes and point lists can be drawn into.

use crate::geom::{Mesh, Topology, Tri, Vertex};
use crate::math::{
    color::{Color3, Color3f},
    mat::{Apply, Mat3},
    vec::{Vec2, Vec2i, vec2i},
};
use crate::raster::{Screen, Viewport, clip_line, line, tri_fill_clipped};
use crate::util::{Dims, buf::Buf2};

use super::{DrawState, ModelToNdc, Stats};

/// A pixel buffer plus the viewport that maps NDC onto it.
///
/// Pixels are stored as `0xFF_RR_GG_BB` words, the format expected by
/// window frontends.
#[derive(Clone, Debug)]
pub struct Canvas {
    buf: Buf2<u32>,
    viewport: Viewport,
}

impl Canvas {
    /// Returns a new canvas of the given size, filled with black.
    pub fn new(dims: Dims) -> Self {
        let buf = Buf2::new_with(dims, |_, _| 0xFF_00_00_00);
        Self { buf, viewport: Viewport::new(dims) }
    }

    /// Returns the width and height of `self`.
    pub fn dims(&self) -> Dims {
        self.buf.dims()
    }
    /// Returns the viewport of `self`.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
    /// Returns the pixel buffer of `self`.
    pub fn buf(&self) -> &Buf2<u32> {
        &self.buf
    }
    /// Returns the pixel buffer of `self` as a linear slice.
    pub fn pixels(&self) -> &[u32] {
        self.buf.data()
    }

    /// Returns the color of the pixel at `p`, or `None` if `p` is outside
    /// `self`.
    pub fn get(&self, p: Vec2i) -> Option<Color3> {
        self.buf.get(p).map(|&c| Color3::from_argb_u32(c))
    }

    /// Fills the whole canvas with `color`.
    pub fn clear(&mut self, color: Color3f) {
        self.buf.fill(color.to_argb_u32());
    }

    /// Draws a square point of side `size` centered at `p`, clipped to
    /// the bounds of `self`.
    ///
    /// For odd sizes, `p` is the exact center; for even sizes, the square
    /// extends one pixel further up and to the left. A size of zero is
    /// treated as one.
    ///
    /// Returns the number of pixels written.
    pub fn plot(&mut self, p: Vec2i, size: u32, color: Color3f) -> usize {
        let size = size.max(1) as i32;
        let (x0, y0) = (p.x() - size / 2, p.y() - size / 2);
        let argb = color.to_argb_u32();

        let mut n = 0;
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                if let Some(px) = self.buf.get_mut(vec2i(x, y)) {
                    *px = argb;
                    n += 1;
                }
            }
        }
        n
    }

    /// Draws each point in `pts` with the color and point size of `state`.
    ///
    /// Returns the number of pixels written.
    pub fn draw_points<I>(&mut self, pts: I, state: &DrawState) -> usize
    where
        I: IntoIterator<Item = Vec2i>,
    {
        pts.into_iter()
            .map(|p| self.plot(p, state.point_size, state.color))
            .sum()
    }

    /// Draws `mesh` with its vertices transformed by `tf`.
    ///
    /// Points are drawn with the point size of `state`, lines one pixel
    /// thick, and triangles filled with interpolated vertex colors.
    ///
    /// Returns the statistics of the draw call.
    pub fn draw_mesh(
        &mut self,
        mesh: &Mesh,
        tf: &Mat3<ModelToNdc>,
        state: &DrawState,
    ) -> Stats {
        let ndc_to_screen = self.viewport.matrix();
        let verts: alloc::vec::Vec<Vertex<Screen>> = mesh
            .verts
            .iter()
            .map(|v| Vertex {
                pos: ndc_to_screen.apply(&tf.apply(&v.pos)),
                color: v.color,
            })
            .collect();

        let mut stats = Stats::new();
        stats.calls = 1.0;
        stats.verts.i = verts.len();
        stats.verts.o = verts
            .iter()
            .filter(|v| self.viewport.contains(to_pixel(v.pos)))
            .count();

        match mesh.topology {
            Topology::Points => {
                for v in &verts {
                    let n = self.plot(to_pixel(v.pos), state.point_size, v.color);
                    count_prim(&mut stats, n);
                }
            }
            Topology::Lines => {
                for [i, j] in mesh.segments() {
                    let (a, b) = (&verts[i], &verts[j]);
                    let n = match clip_line(a.pos, b.pos, self.dims()) {
                        Some([p, q]) => line(to_pixel(p), to_pixel(q))
                            .into_iter()
                            .map(|p| self.plot(p, 1, a.color))
                            .sum(),
                        None => 0,
                    };
                    count_prim(&mut stats, n);
                }
            }
            Topology::Triangles | Topology::TriangleFan => {
                for Tri(idx) in mesh.triangles() {
                    let n = self.fill(idx.map(|i| verts[i]));
                    count_prim(&mut stats, n);
                }
            }
        }
        stats
    }

    /// Fills a triangle in screen space, returning the number of pixels
    /// written.
    fn fill(&mut self, verts: [Vertex<Screen>; 3]) -> usize {
        let mut n = 0;
        tri_fill_clipped(verts, self.dims(), |sl| {
            let row = &mut self.buf[sl.y as usize];
            for (x, c) in sl.pixels() {
                row[x as usize] = c.to_argb_u32();
                n += 1;
            }
        });
        n
    }
}

fn count_prim(stats: &mut Stats, pixels: usize) {
    stats.prims.i += 1;
    stats.prims.o += (pixels > 0) as usize;
    stats.pixels += pixels;
}

/// Returns the pixel containing the screen-space point `p`.
#[inline]
fn to_pixel(p: Vec2<Screen>) -> Vec2i {
    use crate::math::float::f32 as fp;
    vec2i(fp::floor(p.x()) as i32, fp::floor(p.y()) as i32)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::geom::{points, rect, triangle, vertex};
    use crate::math::{color::consts::*, vec::vec2};

    use super::*;

    fn count_color(c: &Canvas, color: Color3f) -> usize {
        let argb = color.to_argb_u32();
        c.pixels().iter().filter(|&&p| p == argb).count()
    }

    #[test]
    fn new_canvas_is_black() {
        let c = Canvas::new((4, 3));
        assert_eq!(c.dims(), (4, 3));
        assert_eq!(count_color(&c, BLACK), 12);
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut c = Canvas::new((4, 3));
        c.clear(WHITE);
        assert_eq!(count_color(&c, WHITE), 12);
        assert_eq!(c.get(vec2i(3, 2)), Some(WHITE.to_color3()));
        assert_eq!(c.get(vec2i(4, 2)), None);
    }

    #[test]
    fn plot_square_points() {
        let mut c = Canvas::new((20, 20));
        assert_eq!(c.plot(vec2i(10, 10), 5, RED), 25);
        assert_eq!(c.get(vec2i(8, 8)), Some(RED.to_color3()));
        assert_eq!(c.get(vec2i(12, 12)), Some(RED.to_color3()));
        assert_eq!(c.get(vec2i(13, 12)), Some(BLACK.to_color3()));

        assert_eq!(c.plot(vec2i(0, 0), 1, GREEN), 1);
        assert_eq!(c.plot(vec2i(5, 5), 0, GREEN), 1);
        assert_eq!(c.plot(vec2i(5, 5), 4, BLUE), 16);
        assert_eq!(c.get(vec2i(3, 3)), Some(BLUE.to_color3()));
        assert_eq!(c.get(vec2i(6, 6)), Some(BLUE.to_color3()));
    }

    #[test]
    fn plot_is_clipped() {
        let mut c = Canvas::new((10, 10));
        assert_eq!(c.plot(vec2i(0, 0), 3, RED), 4);
        assert_eq!(c.plot(vec2i(9, 5), 5, RED), 15);
        assert_eq!(c.plot(vec2i(-10, 5), 5, RED), 0);
    }

    #[test]
    fn draw_points_uses_state() {
        let mut c = Canvas::new((10, 10));
        let st = DrawState { color: MAGENTA, point_size: 3, ..DrawState::default() };
        let n = c.draw_points(vec![vec2i(2, 2), vec2i(7, 7)], &st);
        assert_eq!(n, 18);
        assert_eq!(count_color(&c, MAGENTA), 18);
    }

    #[test]
    fn draw_full_screen_rect() {
        let mut c = Canvas::new((16, 8));
        let m: Mesh = rect(-1.0, -1.0, 2.0, 2.0, YELLOW);
        let stats = c.draw_mesh(&m, &Mat3::identity(), &DrawState::default());

        assert_eq!(count_color(&c, YELLOW), 16 * 8);
        assert_eq!(stats.pixels, 16 * 8);
        assert_eq!(stats.prims.i, 2);
        assert_eq!(stats.prims.o, 2);
        assert_eq!(stats.verts.i, 6);
    }

    #[test]
    fn draw_offscreen_triangle() {
        let mut c = Canvas::new((8, 8));
        let m: Mesh = triangle([vec2(2.0, 2.0), vec2(3.0, 2.0), vec2(2.0, 3.0)], RED);
        let stats = c.draw_mesh(&m, &Mat3::identity(), &DrawState::default());

        assert_eq!(stats.pixels, 0);
        assert_eq!(stats.prims.o, 0);
        assert_eq!(stats.verts.o, 0);
        assert_eq!(count_color(&c, RED), 0);
    }

    #[test]
    fn draw_partially_visible_triangle() {
        let mut c = Canvas::new((8, 8));
        // Covers the lower left half of the canvas and beyond
        let m: Mesh =
            triangle([vec2(-3.0, 3.0), vec2(3.0, -3.0), vec2(-3.0, -3.0)], RED);
        let stats = c.draw_mesh(&m, &Mat3::identity(), &DrawState::default());

        assert_eq!(stats.pixels, count_color(&c, RED));
        assert!(stats.pixels > 0 && stats.pixels < 64);
        assert_eq!(c.get(vec2i(0, 7)), Some(RED.to_color3()));
        assert_eq!(c.get(vec2i(7, 0)), Some(BLACK.to_color3()));
    }

    #[test]
    fn draw_far_off_canvas_geometry() {
        let mut c = Canvas::new((50, 50));
        let st = DrawState::default();

        let across: Mesh = Mesh::new(
            Topology::Lines,
            [vertex(vec2(-1e8, 0.0), GREEN), vertex(vec2(1e8, 0.0), GREEN)],
        );
        let stats = c.draw_mesh(&across, &Mat3::identity(), &st);
        assert_eq!(stats.pixels, 50);
        assert_eq!(c.get(vec2i(0, 25)), Some(GREEN.to_color3()));
        assert_eq!(c.get(vec2i(49, 25)), Some(GREEN.to_color3()));

        let beside: Mesh = Mesh::new(
            Topology::Lines,
            [vertex(vec2(-1e8, 1e8), RED), vertex(vec2(-1e8, -1e8), RED)],
        );
        let stats = c.draw_mesh(&beside, &Mat3::identity(), &st);
        assert_eq!(stats.pixels, 0);
        assert_eq!(stats.prims.o, 0);

        let huge: Mesh =
            triangle([vec2(-1e9, -1e9), vec2(1e9, -1e9), vec2(0.0, 1e9)], BLUE);
        let stats = c.draw_mesh(&huge, &Mat3::identity(), &st);
        assert_eq!(stats.pixels, 50 * 50);
        assert_eq!(count_color(&c, BLUE), 50 * 50);
    }

    #[test]
    fn draw_lines_and_points() {
        let mut c = Canvas::new((10, 10));
        let st = DrawState { point_size: 1, ..DrawState::default() };

        let lines: Mesh = Mesh::new(
            Topology::Lines,
            [vertex(vec2(-1.0, 0.9), GREEN), vertex(vec2(0.99, 0.9), GREEN)],
        );
        let stats = c.draw_mesh(&lines, &Mat3::identity(), &st);
        assert_eq!(stats.pixels, 10);
        assert_eq!(count_color(&c, GREEN), 10);

        let pts: Mesh = points([vec2(0.0, 0.0), vec2(0.5, -0.5)], CYAN);
        let stats = c.draw_mesh(&pts, &Mat3::identity(), &st);
        assert_eq!(stats.pixels, 2);
        assert_eq!(c.get(vec2i(5, 5)), Some(CYAN.to_color3()));
        assert_eq!(c.get(vec2i(7, 7)), Some(CYAN.to_color3()));
    }

}
