//! Midpoint circle rasterization.

use alloc::vec::Vec;

use crate::math::vec::{Vec2i, vec2i};

/// Rasterizes the outline of a circle of radius `r` centered at `center`.
///
/// Walks the second octant, from the top of the circle towards the
/// diagonal, with an integer decision variable, and mirrors each point
/// into the other seven octants. The returned points are sorted and
/// contain no duplicates, so the result is mirror-symmetric across both
/// the horizontal and vertical lines through `center`.
///
/// A radius of zero yields just the center point.
///
/// # Examples
/// ```
/// use rasterlab_core::{math::vec2i, raster::circle};
///
/// let pts = circle(vec2i(0, 0), 1);
/// assert_eq!(pts, [vec2i(-1, 0), vec2i(0, -1), vec2i(0, 1), vec2i(1, 0)]);
/// ```
pub fn circle(center: Vec2i, r: u32) -> Vec<Vec2i> {
    let r = r as i32;
    let (mut x, mut y) = (0, r);
    let mut d = 3 - 2 * r;

    let mut pts = Vec::with_capacity(8 * (r as usize + 1));
    while x <= y {
        pts.extend(octants(center, x, y));
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
    pts.sort_unstable();
    pts.dedup();
    pts
}

/// Returns the eight reflections of the offset (`x`, `y`) about `center`,
/// one in each octant.
///
/// # Examples
/// ```
/// use rasterlab_core::{math::vec2i, raster::octants};
///
/// let pts = octants(vec2i(10, 10), 1, 2);
/// assert_eq!(pts[0], vec2i(11, 12));
/// assert_eq!(pts[7], vec2i(8, 9));
/// ```
pub fn octants(center: Vec2i, x: i32, y: i32) -> [Vec2i; 8] {
    let [cx, cy] = center.0;
    [
        vec2i(cx + x, cy + y),
        vec2i(cx - x, cy + y),
        vec2i(cx + x, cy - y),
        vec2i(cx - x, cy - y),
        vec2i(cx + y, cy + x),
        vec2i(cx - y, cy + x),
        vec2i(cx + y, cy - x),
        vec2i(cx - y, cy - x),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_is_center() {
        let c = vec2i(5, -5);
        assert_eq!(circle(c, 0), [c]);
    }

    #[test]
    fn radius_two() {
        let pts = circle(vec2i(0, 0), 2);
        // d = -1 at (0, 2), d = 5 at (1, 2), then x > y
        assert_eq!(
            pts,
            [
                vec2i(-2, -1),
                vec2i(-2, 0),
                vec2i(-2, 1),
                vec2i(-1, -2),
                vec2i(-1, 2),
                vec2i(0, -2),
                vec2i(0, 2),
                vec2i(1, -2),
                vec2i(1, 2),
                vec2i(2, -1),
                vec2i(2, 0),
                vec2i(2, 1),
            ]
        );
    }

    #[test]
    fn points_are_unique_and_sorted() {
        for r in 0..20 {
            let pts = circle(vec2i(3, 4), r);
            assert!(pts.windows(2).all(|w| w[0] < w[1]), "r = {r}");
        }
    }

    #[test]
    fn circle_is_mirror_symmetric() {
        let c = vec2i(-7, 12);
        for r in 0..40 {
            let pts = circle(c, r);
            for p in &pts {
                let d = *p - c;
                let h = c + vec2i(-d.x(), d.y());
                let v = c + vec2i(d.x(), -d.y());
                assert!(pts.contains(&h), "r = {r}, {p:?}");
                assert!(pts.contains(&v), "r = {r}, {p:?}");
            }
        }
    }

    #[test]
    fn points_lie_near_radius() {
        for r in 1..50u32 {
            for p in circle(vec2i(0, 0), r) {
                let dist_sq = (p.x() * p.x() + p.y() * p.y()) as f32;
                let r = r as f32;
                assert!(
                    (r - 1.0) * (r - 1.0) < dist_sq
                        && dist_sq < (r + 1.0) * (r + 1.0),
                    "r = {r}, {p:?}"
                );
            }
        }
    }
}
