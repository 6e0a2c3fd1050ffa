//! Scan conversion of filled, Gouraud-shaded triangles.

use core::fmt::{Debug, Formatter};
use core::ops::Range;

use crate::geom::Vertex;
use crate::math::color::Color3f;
use crate::util::Dims;

use super::Screen;

/// A horizontal, 1-pixel-thick "slice" of a triangle being rasterized.
#[derive(Clone, PartialEq)]
pub struct Scanline {
    /// The y coordinate of the row.
    pub y: i32,
    /// The range of x coordinates covered on the row.
    pub xs: Range<i32>,
    /// The interpolated color at the center of pixel `xs.start`.
    pub color: Color3f,
    /// The change in color per pixel to the right.
    pub dc_dx: Color3f,
}

impl Scanline {
    /// Returns an iterator over the pixels of `self`, along with their
    /// interpolated colors.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, Color3f)> + '_ {
        self.xs
            .clone()
            .enumerate()
            .map(|(i, x)| (x, self.color + self.dc_dx * i as f32))
    }
}

impl Debug for Scanline {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scanline")
            .field("y", &self.y)
            .field("xs", &self.xs)
            .finish_non_exhaustive()
    }
}

/// Rasterizes a filled triangle defined by three vertices in screen space.
///
/// Converts the triangle into [scanlines][Scanline] and invokes
/// `scanline_fn` for each of them, top to bottom. A pixel is covered, and
/// drawn, if and only if its center point lies inside the triangle. If two
/// triangles share an edge, every pixel on the edge belongs to exactly one
/// of them, so there are neither gaps nor overdrawn pixels.
///
/// Vertex colors are linearly interpolated across the triangle.
/// Triangles with zero area produce no scanlines.
///
/// Scanlines are only clipped to ±2^23, beyond which `f32` can no
/// longer step by whole pixels; use [`tri_fill_clipped`] to restrict them
/// to a buffer.
pub fn tri_fill<F>(verts: [Vertex<Screen>; 3], scanline_fn: F)
where
    F: FnMut(Scanline),
{
    let lim = -MAX_COORD..MAX_COORD;
    scan(verts, lim.clone(), lim, scanline_fn);
}

/// Like [`tri_fill`], but only emits the parts of scanlines that lie
/// within a buffer of size `dims`.
///
/// Every emitted scanline has `0 <= y < h` and `xs` within `0..w`, and the
/// work done is proportional to the visible area, however far the vertices
/// lie outside the buffer.
pub fn tri_fill_clipped<F>(
    verts: [Vertex<Screen>; 3],
    (w, h): Dims,
    scanline_fn: F,
) where
    F: FnMut(Scanline),
{
    scan(verts, 0.0..w as f32, 0.0..h as f32, scanline_fn);
}

/// The largest magnitude at which consecutive integers are representable
/// as `f32`.
const MAX_COORD: f32 = 8_388_608.0;

fn scan<F>(
    mut verts: [Vertex<Screen>; 3],
    xlim: Range<f32>,
    ylim: Range<f32>,
    mut scanline_fn: F,
) where
    F: FnMut(Scanline),
{
    let [a, b, c] = verts.map(|v| v.pos);
    let area2 = (b - a).perp_dot(&(c - a));
    if area2 == 0.0 || !area2.is_finite() {
        return;
    }

    // Sort by y coordinate, start from the top
    verts.sort_by(|a, b| a.pos.y().total_cmp(&b.pos.y()));
    let [top, mid, bot] = verts;

    //                       X <--top
    //                     ***
    //                   ******
    //                 ********
    //               ** upper **
    //       mid--> X***********  <--long edge
    //                ** lower **
    //                   ********
    //                      ******
    //                         ***
    //                            X <--bot

    // Rows are half-open: a row is drawn iff top.y < its center <= bot.y.
    // Columns follow the same rule horizontally.
    let mut yc = round_up_to_half(top.pos.y()).max(ylim.start + 0.5);
    let y_end = round_up_to_half(bot.pos.y()).min(ylim.end + 0.5);

    while yc < y_end {
        let long = edge_at(&top, &bot, yc);
        let short = if yc <= mid.pos.y() {
            edge_at(&top, &mid, yc)
        } else {
            edge_at(&mid, &bot, yc)
        };
        let (l, r) = if long.pos.x() < short.pos.x() {
            (long, short)
        } else {
            (short, long)
        };
        let (lx, rx) = (l.pos.x(), r.pos.x());
        let x0 = round_up_to_half(lx).max(xlim.start + 0.5);
        let x1 = round_up_to_half(rx).min(xlim.end + 0.5);

        if x0 < x1 {
            let dc_dx = (r.color - l.color) * (rx - lx).recip();
            scanline_fn(Scanline {
                y: (yc - 0.5) as i32,
                xs: (x0 - 0.5) as i32..(x1 - 0.5) as i32,
                color: l.color + dc_dx * (x0 - lx),
                dc_dx,
            });
        }
        yc += 1.0;
    }
}

/// Returns the point on the edge from `v0` down to `v1` at height `y`,
/// with its color interpolated.
///
/// Depends only on the endpoints and `y`, so triangles sharing an edge
/// see exactly the same values along it.
#[inline]
fn edge_at(v0: &Vertex<Screen>, v1: &Vertex<Screen>, y: f32) -> Vertex<Screen> {
    let t = (y - v0.pos.y()) / (v1.pos.y() - v0.pos.y());
    v0.lerp(v1, t)
}

/// Returns the smallest pixel center coordinate (n + 0.5) greater than `x`.
#[inline]
fn round_up_to_half(x: f32) -> f32 {
    crate::math::float::f32::floor(x + 0.5) + 0.5
}
