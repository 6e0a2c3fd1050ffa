//! Turning meshes into pixels.
//!
//! A [`Canvas`] owns a framebuffer of `0xAA_RR_GG_BB` words. Meshes are
//! drawn into it one [`DrawCall`] at a time: vertex positions are mapped by
//! the call's model matrix, then from normalized device coordinates to
//! pixels, and finally rasterized according to the mesh topology.

use alloc::vec::Vec;

use crate::geom::Mesh;
use crate::math::{
    color::{Color3f, consts},
    mat::{Mat3, RealToReal},
};
use crate::raster::Ndc;

pub use canvas::Canvas;
pub use stats::Stats;

pub mod canvas;
pub mod stats;

/// Mapping from NDC space to itself, the type of model matrices.
pub type ModelToNdc = RealToReal<2, Ndc>;

/// Per-canvas drawing parameters, the equivalent of shader uniforms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawState {
    /// Color of rasterized points and lines.
    pub color: Color3f,
    /// Side length of each drawn point in pixels, 1 to 9.
    pub point_size: u32,
    /// Color the canvas is cleared with.
    pub clear_color: Color3f,
}

/// A mesh and the model matrix to draw it with.
#[derive(Clone, Debug)]
pub struct DrawCall {
    pub mesh: Mesh,
    pub transform: Mat3<ModelToNdc>,
}

impl DrawState {
    /// The largest supported point size.
    pub const MAX_POINT_SIZE: u32 = 9;

    /// Returns `self` with the point size set to `size`, clamped to
    /// `1..=MAX_POINT_SIZE`.
    #[must_use]
    pub fn with_point_size(self, size: u32) -> Self {
        Self {
            point_size: size.clamp(1, Self::MAX_POINT_SIZE),
            ..self
        }
    }
}

impl Default for DrawState {
    /// Blue five-pixel points on a white background.
    fn default() -> Self {
        Self {
            color: consts::BLUE,
            point_size: 5,
            clear_color: consts::WHITE,
        }
    }
}

impl DrawCall {
    /// Returns a draw call that renders `mesh` untransformed.
    pub fn new(mesh: Mesh) -> Self {
        Self::with_transform(mesh, Mat3::identity())
    }

    /// Returns a draw call that renders `mesh` transformed by `tf`.
    pub fn with_transform(mesh: Mesh, transform: Mat3<ModelToNdc>) -> Self {
        Self { mesh, transform }
    }
}

impl From<Mesh> for DrawCall {
    fn from(mesh: Mesh) -> Self {
        Self::new(mesh)
    }
}

/// Clears `canvas` with `state.clear_color` and draws every call in
/// `calls` in order, later calls painting over earlier ones.
///
/// Returns the statistics of the frame.
pub fn draw_all<'a, I>(canvas: &mut Canvas, calls: I, state: &DrawState) -> Stats
where
    I: IntoIterator<Item = &'a DrawCall>,
{
    let mut stats = Stats::start();
    canvas.clear(state.clear_color);
    for call in calls {
        stats += canvas.draw_mesh(&call.mesh, &call.transform, state);
    }
    stats.frames += 1.0;
    stats.finish()
}

/// Collects the meshes of `calls` with their transforms applied.
pub fn flatten(calls: &[DrawCall]) -> Vec<Mesh> {
    calls
        .iter()
        .map(|c| c.mesh.transform(&c.transform))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::geom::rect_centered;
    use crate::math::{color::Color3, mat::translate2, vec::vec2i};

    use super::*;

    #[test]
    fn default_state() {
        let st = DrawState::default();
        assert_eq!(st.color, consts::BLUE);
        assert_eq!(st.point_size, 5);
        assert_eq!(st.clear_color, consts::WHITE);
    }

    #[test]
    fn point_size_is_clamped() {
        let st = DrawState::default();
        assert_eq!(st.with_point_size(0).point_size, 1);
        assert_eq!(st.with_point_size(7).point_size, 7);
        assert_eq!(st.with_point_size(12).point_size, 9);
    }

    #[test]
    fn later_calls_paint_over_earlier() {
        let mut canvas = Canvas::new((10, 10));
        let calls = [
            DrawCall::new(rect_centered(1.0, 1.0, consts::RED)),
            DrawCall::new(rect_centered(0.5, 0.5, consts::GREEN)),
        ];
        let stats = draw_all(&mut canvas, &calls, &DrawState::default());

        let red: Color3 = consts::RED.to_color3();
        let green: Color3 = consts::GREEN.to_color3();
        assert_eq!(canvas.get(vec2i(0, 0)), Some(red));
        assert_eq!(canvas.get(vec2i(5, 5)), Some(green));
        assert_eq!(stats.calls, 2.0);
        assert_eq!(stats.frames, 1.0);
        assert_eq!(stats.prims.i, 4);
        assert_eq!(stats.pixels, 100 + 25);
    }

    #[test]
    fn flatten_applies_transforms() {
        let calls = [DrawCall::with_transform(
            rect_centered(0.25, 0.25, consts::RED),
            translate2(0.5, 0.0),
        )];
        let meshes = flatten(&calls);
        assert_eq!(meshes[0].verts[0].pos.x(), 0.25);
    }
}
