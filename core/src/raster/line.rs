//! Bresenham line rasterization.

use alloc::vec::Vec;

use crate::math::vec::{Vec2, Vec2i, vec2, vec2i};
use crate::util::Dims;

use super::Screen;

/// Rasterizes a one-pixel-thick line from `p0` to `p1`, inclusive.
///
/// Uses the all-octant integer variant of Bresenham's algorithm: a single
/// error term tracks the distance from the ideal line, and each step
/// advances along x, y, or both, depending on the sign of the error.
///
/// The result always contains `max(|dx|, |dy|) + 1` points. The first is
/// `p0`, the last is `p1`, and each point is an 8-neighbor of the previous
/// one. Plain Bresenham breaks ties differently depending on direction, so
/// the line is always traced from the lexicographically smaller endpoint;
/// as a result `line(a, b)` is exactly `line(b, a)` reversed.
///
/// # Examples
/// ```
/// use rasterlab_core::{math::vec2i, raster::line};
///
/// let pts = line(vec2i(0, 0), vec2i(4, 2));
/// assert_eq!(
///     pts,
///     [vec2i(0, 0), vec2i(1, 0), vec2i(2, 1), vec2i(3, 1), vec2i(4, 2)]
/// );
/// ```
pub fn line(p0: Vec2i, p1: Vec2i) -> Vec<Vec2i> {
    if p1 < p0 {
        let mut pts = bresenham(p1, p0);
        pts.reverse();
        pts
    } else {
        bresenham(p0, p1)
    }
}

/// Rasterizes a polyline through `pts`, in order.
///
/// Each joint is emitted once. A single point yields that point and an
/// empty slice yields nothing.
pub fn polyline(pts: &[Vec2i]) -> Vec<Vec2i> {
    let mut res = Vec::new();
    if let Some(&first) = pts.first() {
        res.push(first);
    }
    for seg in pts.windows(2) {
        res.extend(line(seg[0], seg[1]).into_iter().skip(1));
    }
    res
}

/// Rasterizes the outline of the triangle `abc`.
///
/// # Examples
/// ```
/// use rasterlab_core::{math::vec2i, raster::tri_outline};
///
/// let pts = tri_outline(vec2i(0, 0), vec2i(2, 0), vec2i(0, 2));
/// assert_eq!(pts.len(), 6);
/// ```
pub fn tri_outline(a: Vec2i, b: Vec2i, c: Vec2i) -> Vec<Vec2i> {
    let mut pts = polyline(&[a, b, c, a]);
    // The last point closes the loop
    pts.pop();
    if pts.is_empty() {
        pts.push(a);
    }
    pts
}

/// Clips the segment from `p0` to `p1` to the rectangle from the origin
/// to `dims`, using the Liang–Barsky algorithm.
///
/// Returns the endpoints of the visible part, in the original direction,
/// or `None` if no part is visible or a coordinate is not finite. A
/// segment entirely inside is returned unchanged.
///
/// # Examples
/// ```
/// use rasterlab_core::{math::vec2, raster::{Screen, clip_line}};
///
/// let [a, b] = clip_line(vec2::<Screen>(-10.0, 5.0), vec2(30.0, 5.0), (20, 10))
///     .unwrap();
/// assert_eq!((a.x(), b.x()), (0.0, 20.0));
///
/// assert_eq!(clip_line(vec2::<Screen>(-1.0, 0.0), vec2(-5.0, 3.0), (20, 10)), None);
/// ```
pub fn clip_line(
    p0: Vec2<Screen>,
    p1: Vec2<Screen>,
    (w, h): Dims,
) -> Option<[Vec2<Screen>; 2]> {
    let [x0, y0, x1, y1] = [p0.x(), p0.y(), p1.x(), p1.y()].map(f64::from);
    if ![x0, y0, x1, y1].iter().all(|c| c.is_finite()) {
        return None;
    }
    let (w, h) = (f64::from(w), f64::from(h));
    let (dx, dy) = (x1 - x0, y1 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    // Each edge as (-d·n, distance from p0 to the edge along n)
    for (p, q) in [(-dx, x0), (dx, w - x0), (-dy, y0), (dy, h - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    if t0 > t1 {
        return None;
    }
    // Rounding may leave a clipped point a hair outside the rectangle
    let at = |t: f64| {
        if t == 0.0 {
            p0
        } else if t == 1.0 {
            p1
        } else {
            vec2(
                (x0 + dx * t).clamp(0.0, w) as f32,
                (y0 + dy * t).clamp(0.0, h) as f32,
            )
        }
    };
    Some([at(t0), at(t1)])
}

fn bresenham(p0: Vec2i, p1: Vec2i) -> Vec<Vec2i> {
    let [x0, y0] = p0.0;
    let [x1, y1] = p1.0;

    let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut pts = Vec::with_capacity(dx.max(dy) as usize + 1);
    let (mut x, mut y) = (x0, y0);
    let mut err = dx - dy;
    loop {
        pts.push(vec2i(x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    pts
}
