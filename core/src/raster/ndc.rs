//! Mapping between pixel and normalized device coordinates.

use crate::math::mat::{Mat3, RealToReal, scale2, translate2};
use crate::math::vec::{Vec2, Vec2i, vec2};
use crate::util::Dims;

use super::{Ndc, Screen};

/// A rectangular pixel area that normalized device coordinates map onto.
///
/// NDC (-1, 1) corresponds to the top left corner of the viewport and
/// NDC (1, -1) to the bottom right corner.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Returns a viewport of the given width and height in pixels.
    pub const fn new((width, height): Dims) -> Self {
        Self { width, height }
    }

    /// Returns the width and height of `self`.
    pub const fn dims(&self) -> Dims {
        (self.width, self.height)
    }

    /// Maps the pixel position `p` to normalized device coordinates.
    ///
    /// Computes `nx = 2x / w - 1` and `ny = 1 - 2y / h`; note the flipped
    /// y axis. The top left corner of pixel `p` maps to the result.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::{math::{vec2, vec2i}, raster::Viewport};
    ///
    /// let vp = Viewport::new((500, 500));
    /// assert_eq!(vp.to_ndc(vec2i(0, 0)), vec2(-1.0, 1.0));
    /// assert_eq!(vp.to_ndc(vec2i(250, 250)), vec2(0.0, 0.0));
    /// assert_eq!(vp.to_ndc(vec2i(500, 500)), vec2(1.0, -1.0));
    /// ```
    pub fn to_ndc(&self, p: Vec2i) -> Vec2<Ndc> {
        let (w, h) = (self.width as f32, self.height as f32);
        vec2(
            2.0 * p.x() as f32 / w - 1.0,
            1.0 - 2.0 * p.y() as f32 / h,
        )
    }

    /// Maps the NDC point `p` to continuous pixel coordinates.
    ///
    /// The inverse of [`to_ndc`][Self::to_ndc]:
    /// `x = (nx + 1) w / 2`, `y = (1 - ny) h / 2`.
    pub fn to_pixel(&self, p: Vec2<Ndc>) -> Vec2<Screen> {
        let (w, h) = (self.width as f32, self.height as f32);
        vec2((p.x() + 1.0) * w / 2.0, (1.0 - p.y()) * h / 2.0)
    }

    /// Returns the NDC-to-screen mapping of `self` as a matrix.
    pub fn matrix(&self) -> Mat3<RealToReal<2, Ndc, Screen>> {
        let (hw, hh) = (self.width as f32 / 2.0, self.height as f32 / 2.0);
        let m: Mat3<RealToReal<2, Ndc, Ndc>> =
            translate2(1.0, -1.0).then(&scale2(hw, -hh));
        m.to()
    }

    /// Returns whether pixel `p` lies inside `self`.
    pub fn contains(&self, p: Vec2i) -> bool {
        (0..self.width as i32).contains(&p.x())
            && (0..self.height as i32).contains(&p.y())
    }
}

impl From<Dims> for Viewport {
    fn from(dims: Dims) -> Self {
        Self::new(dims)
    }
}
