//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat], [colors][color] and
//! [angles][angle], as well as approximate equality comparisons.
//!
//! Vectors and colors are tagged with a type that represents the *space*
//! they're embedded in, and values in different spaces cannot be mixed
//! without explicit conversion. Matrices, similarly, are tagged by both
//! source and destination space, and can only be applied to matching
//! vectors. Angles are strongly typed as well, so that degrees and radians
//! cannot be confused.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    color::{Color, Color3, Color3f, rgb},
    mat::{
        Apply, Mat3, Mat4, Matrix, RealToReal, scale2, translate2,
        translate3,
    },
    vec::{Vec2, Vec2i, Vec3, Vector, splat, vec2, vec2i, vec3},
};
#[cfg(feature = "fp")]
pub use mat::{rotate_z, rotate2};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod vec;

/// Linearly interpolates between `a` and `b`.
///
/// # Examples
/// ```
/// use rasterlab_core::math::lerp;
/// assert_eq!(lerp(0.25, 2.0, 4.0), 2.5);
/// ```
#[inline]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Returns the inverse of [`lerp`]: the `t` such that `lerp(t, a, b) == x`.
///
/// Returns 0.0 if `a == b`.
#[inline]
pub fn inv_lerp(x: f32, a: f32, b: f32) -> f32 {
    if a == b { 0.0 } else { (x - a) / (b - a) }
}
