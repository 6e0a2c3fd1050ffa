//! Real and integer vectors, tagged with the space they live in.

use core::array;
use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

//
// Types
//

/// A generic vector type.
///
/// # Type parameters
/// * `Repr`: the representation of the components, typically an array.
/// * `Space`: a zero-sized tag type naming the space `Self` is embedded in.
///   Vectors in different spaces cannot be mixed without an explicit
///   conversion, either with a matrix or with [`to`][Self::to].
#[repr(transparent)]
#[derive(Hash, PartialOrd, Ord)]
pub struct Vector<Repr, Space = ()>(pub Repr, PhantomData<Space>);

/// A 2-vector with `f32` components.
pub type Vec2<Space = ()> = Vector<[f32; 2], Space>;
/// A 3-vector with `f32` components.
pub type Vec3<Space = ()> = Vector<[f32; 3], Space>;
/// A 2-vector with `i32` components, typically a pixel position.
pub type Vec2i<Space = ()> = Vector<[i32; 2], Space>;

/// Returns a real 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<Sp>(x: f32, y: f32) -> Vec2<Sp> {
    Vector([x, y], PhantomData)
}

/// Returns a real 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<Sp>(x: f32, y: f32, z: f32) -> Vec3<Sp> {
    Vector([x, y, z], PhantomData)
}

/// Returns an integer 2-vector with components `x` and `y`.
///
/// # Examples
/// ```
/// use rasterlab_core::math::vec::{vec2i, Vec2i};
/// let p: Vec2i = vec2i(3, -4);
/// assert_eq!(p.x(), 3);
/// assert_eq!(p.y(), -4);
/// ```
#[inline]
pub const fn vec2i<Sp>(x: i32, y: i32) -> Vec2i<Sp> {
    Vector([x, y], PhantomData)
}

/// Returns a vector with every component equal to `s`.
#[inline]
pub fn splat<Sc: Copy, Sp, const N: usize>(s: Sc) -> Vector<[Sc; N], Sp> {
    Vector([s; N], PhantomData)
}

//
// Inherent impls
//

impl<Repr, Sp> Vector<Repr, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: Repr) -> Self {
        Self(repr, PhantomData)
    }

    /// Returns `self` re-tagged to space `S`, with components unchanged.
    #[inline]
    pub fn to<S>(self) -> Vector<Repr, S> {
        Vector(self.0, PhantomData)
    }
}

impl<Sc: Copy, Sp> Vector<[Sc; 2], Sp> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
}

impl<Sc: Copy, Sp> Vector<[Sc; 3], Sp> {
    #[inline]
    pub fn x(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub fn y(&self) -> Sc {
        self.0[1]
    }
    #[inline]
    pub fn z(&self) -> Sc {
        self.0[2]
    }
}

impl<Sp, const N: usize> Vector<[f32; N], Sp> {
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }
}

impl<Sp> Vec2i<Sp> {
    /// Returns `self` with components converted to `f32`.
    #[inline]
    pub fn to_f32(self) -> Vec2<Sp> {
        vec2(self.x() as f32, self.y() as f32)
    }
}

impl<Sp> Vec2<Sp> {
    /// Returns a 3-vector with the components of `self` and the given z.
    #[inline]
    pub fn extend(self, z: f32) -> Vec3<Sp> {
        vec3(self.x(), self.y(), z)
    }

    /// Returns the z component of the cross product of `self` and `other`
    /// extended to 3D. Positive if `other` is counterclockwise from `self`
    /// in a y-up space.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }
}

//
// Foreign trait impls
//

impl<Sc: Debug, Sp: Debug + Default, const N: usize> Debug
    for Vector<[Sc; N], Sp>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>{:?}", Sp::default(), self.0)
    }
}

// The space tag is a marker, so these impls must not require anything of it.

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), PhantomData)
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Eq, Sp> Eq for Vector<R, Sp> {}

impl<Sc, Sp, const N: usize> From<[Sc; N]> for Vector<[Sc; N], Sp> {
    #[inline]
    fn from(els: [Sc; N]) -> Self {
        Self(els, PhantomData)
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Vector<[Sc; N], Sp> {
    type Output = Sc;
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<Sc, Sp, const N: usize> Add for Vector<[Sc; N], Sp>
where
    Sc: Copy + Add<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<Sc, Sp, const N: usize> Sub for Vector<[Sc; N], Sp>
where
    Sc: Copy + Sub<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<Sc, Sp, const N: usize> Mul<Sc> for Vector<[Sc; N], Sp>
where
    Sc: Copy + Mul<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Sc) -> Self {
        Self::new(self.0.map(|c| c * rhs))
    }
}

impl<Sc, Sp, const N: usize> Neg for Vector<[Sc; N], Sp>
where
    Sc: Copy + Neg<Output = Sc>,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.0.map(|c| -c))
    }
}

impl<Sc, Sp, const N: usize> AddAssign for Vector<[Sc; N], Sp>
where
    Sc: Copy + Add<Output = Sc>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = array::from_fn(|i| self.0[i] + rhs.0[i]);
    }
}

impl<Sc, Sp, const N: usize> SubAssign for Vector<[Sc; N], Sp>
where
    Sc: Copy + Sub<Output = Sc>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = array::from_fn(|i| self.0[i] - rhs.0[i]);
    }
}

impl<Sp, const N: usize> ApproxEq<f32> for Vector<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
