use rasterlab_core::prelude::*;
use rasterlab_core::raster::{octants, polyline};

const GRID: std::ops::RangeInclusive<i32> = -6..=6;

fn sorted(mut pts: Vec<Vec2i>) -> Vec<Vec2i> {
    pts.sort();
    pts
}

#[test]
fn line_contains_both_endpoints() {
    for (ax, ay) in GRID.flat_map(|x| GRID.map(move |y| (x, y))) {
        for (bx, by) in [(0, 0), (5, 2), (-3, 6), (6, -6), (1, -5)] {
            let (a, b) = (vec2i(ax, ay), vec2i(bx, by));
            let pts = line(a, b);
            assert_eq!(pts.first(), Some(&a), "{a:?} -> {b:?}");
            assert_eq!(pts.last(), Some(&b), "{a:?} -> {b:?}");
        }
    }
}

#[test]
fn line_is_symmetric_in_its_endpoints() {
    for (ax, ay) in GRID.flat_map(|x| GRID.map(move |y| (x, y))) {
        for (bx, by) in [(0, 0), (4, 1), (-2, 5), (6, 6), (3, -4)] {
            let (a, b) = (vec2i(ax, ay), vec2i(bx, by));
            assert_eq!(
                sorted(line(a, b)),
                sorted(line(b, a)),
                "{a:?} <-> {b:?}"
            );
        }
    }
}

#[test]
fn line_is_eight_connected_without_gaps() {
    for (bx, by) in GRID.flat_map(|x| GRID.map(move |y| (x, y))) {
        let pts = line(vec2i(0, 0), vec2i(bx, by));
        let n = bx.abs().max(by.abs()) as usize + 1;
        assert_eq!(pts.len(), n, "to ({bx}, {by})");
        for w in pts.windows(2) {
            let d = w[1] - w[0];
            assert!(d.x().abs() <= 1 && d.y().abs() <= 1, "{w:?}");
            assert_ne!(d, vec2i(0, 0));
        }
    }
}

#[test]
fn polyline_visits_every_vertex_once() {
    let vs = [vec2i(0, 0), vec2i(5, 0), vec2i(5, 5), vec2i(0, 0)];
    let pts = polyline(&vs);
    assert_eq!(pts.len(), 5 + 5 + 5 + 1);
    for v in &vs[1..3] {
        assert_eq!(pts.iter().filter(|p| *p == v).count(), 1);
    }
}

#[test]
fn circle_is_mirror_symmetric() {
    let center = vec2i(7, -3);
    for r in 0..=20 {
        let pts = circle(center, r);
        for &p in &pts {
            let d = p - center;
            for m in [
                vec2i(-d.x(), d.y()),
                vec2i(d.x(), -d.y()),
                vec2i(d.y(), d.x()),
            ] {
                assert!(pts.contains(&(center + m)), "r = {r}: {p:?}");
            }
        }
    }
}

#[test]
fn circle_points_lie_near_radius() {
    for r in 1..=30u32 {
        for p in circle(vec2i(0, 0), r) {
            let d2 = p.x() * p.x() + p.y() * p.y();
            let d = (d2 as f32).sqrt();
            assert!((d - r as f32).abs() < 1.0, "r = {r}: {p:?}");
        }
    }
}

#[test]
fn octants_are_mirror_images() {
    let pts = octants(vec2i(10, 10), 2, 5);
    assert_eq!(pts[0], vec2i(12, 15));
    assert_eq!(pts[3], vec2i(8, 5));
    assert_eq!(pts[4], vec2i(15, 12));
    assert_eq!(pts[7], vec2i(5, 8));
}

#[test]
fn rotation_then_inverse_is_identity() {
    for deg in (-720..=720).step_by(15) {
        let rot: Mat3 = rotate2(degs(deg as f32));
        let id = rot.then(&rot.inverse());
        rasterlab_core::assert_approx_eq!(id, Mat3::identity(), eps = 1e-5);

        let back: Mat3 = rotate2(degs(-deg as f32));
        rasterlab_core::assert_approx_eq!(
            rot.then(&back),
            Mat3::identity(),
            eps = 1e-5
        );
    }
}

#[test]
fn filled_rects_tile_the_canvas() {
    // Four quadrants, every pixel covered exactly once
    let mut canvas = Canvas::new((33, 17));
    let st = DrawState::default();
    let quads = [
        rect(-1.0, -1.0, 1.0, 1.0, RED),
        rect(0.0, -1.0, 1.0, 1.0, GREEN),
        rect(-1.0, 0.0, 1.0, 1.0, BLUE),
        rect(0.0, 0.0, 1.0, 1.0, YELLOW),
    ];
    let mut pixels = 0;
    for q in &quads {
        pixels += canvas.draw_mesh(q, &Mat3::identity(), &st).pixels;
    }
    assert_eq!(pixels, 33 * 17);
    assert_eq!(canvas.get(vec2i(0, 0)), Some(BLUE.to_color3()));
    assert_eq!(canvas.get(vec2i(32, 16)), Some(GREEN.to_color3()));
}
