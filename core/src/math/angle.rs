//! Angular quantities.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
///
/// # Examples
/// ```
/// # use rasterlab_core::math::angle::*;
/// assert_eq!(turns(0.25), Angle::RIGHT);
/// ```
pub const fn turns(a: f32) -> Angle {
    Angle(a * RADS_PER_TURN)
}

const RADS_PER_DEG: f32 = PI / 180.0;
const RADS_PER_TURN: f32 = TAU;

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(RADS_PER_TURN / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(RADS_PER_TURN / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(RADS_PER_TURN);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    ///
    /// # Examples
    /// ```
    /// # use rasterlab_core::math::angle::turns;
    /// assert_eq!(turns(2.0).to_degs(), 720.0);
    /// ```
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / RADS_PER_TURN
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        super::float::f32::sin(self.0)
    }
    /// Returns the cosine of `self`.
    ///
    /// # Examples
    /// ```
    /// # use rasterlab_core::assert_approx_eq;
    /// # use rasterlab_core::math::angle::*;
    /// assert_approx_eq!(degs(60.0).cos(), 0.5)
    /// ```
    pub fn cos(self) -> f32 {
        super::float::f32::cos(self.0)
    }
    /// Computes both the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        (self.sin(), self.cos())
    }
    /// Returns `self` wrapped around to the range `0..360°`.
    #[must_use]
    pub fn wrap(self) -> Self {
        Self(super::float::f32::rem_euclid(self.0, RADS_PER_TURN))
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f32::relative_epsilon())
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}°)", self.to_degs())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degs())
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn unit_conversions() {
        assert_approx_eq!(degs(90.0).to_rads(), PI / 2.0);
        assert_approx_eq!(rads(PI).to_degs(), 180.0);
        assert_approx_eq!(turns(0.5).to_rads(), PI);
        assert_approx_eq!(degs(450.0).to_turns(), 1.25);
    }

    #[test]
    fn arithmetic() {
        assert_approx_eq!(degs(30.0) + degs(60.0), Angle::RIGHT);
        assert_approx_eq!(Angle::FULL - Angle::STRAIGHT, Angle::STRAIGHT);
        assert_approx_eq!(Angle::RIGHT * 2.0, Angle::STRAIGHT);
        assert_approx_eq!(Angle::FULL / 4.0, Angle::RIGHT);
        assert_eq!(-degs(10.0), degs(-10.0));
    }

    #[cfg(feature = "fp")]
    #[test]
    fn trig() {
        assert_approx_eq!(degs(90.0).sin(), 1.0, eps = 1e-3);
        assert_approx_eq!(Angle::STRAIGHT.cos(), -1.0, eps = 1e-3);
        assert_approx_eq!(degs(400.0).wrap().to_degs(), 40.0, eps = 1e-3);
    }
}
