//! Matrices and affine transforms.
//!
//! Matrices are stored in row-major order and use the column-vector
//! convention: a matrix `M` maps a vector `v` to `M * v`, and `A * B`
//! applies `B` first, then `A`. [`then`][Matrix::then] reads the other
//! way around, in the order the transforms are applied.
//!
//! A 2D affine transform is a 3x3 matrix acting on homogeneous points
//! `(x, y, 1)`; the 4x4 variants do the same for 3D points `(x, y, z, 1)`.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::Mul;

use crate::math::approx::ApproxEq;
use crate::math::vec::{Vec2, Vec3, vec2, vec3};

#[cfg(feature = "fp")]
use crate::math::angle::Angle;

//
// Types
//

/// A linear map from space `Src` to space `Dst`, both of dimension `DIM`.
///
/// Used as the `Map` tag of a [`Matrix`] so that matrices can only be
/// composed and applied when their spaces line up.
pub struct RealToReal<const DIM: usize, Src = (), Dst = Src>(
    PhantomData<(Src, Dst)>,
);

/// A generic matrix type.
#[repr(transparent)]
pub struct Matrix<Repr, Map>(pub Repr, PhantomData<Map>);

/// A 3x3 matrix, representing a 2D affine transform.
pub type Mat3<Map = RealToReal<2>> = Matrix<[[f32; 3]; 3], Map>;

/// A 4x4 matrix, representing a 3D affine transform.
pub type Mat4<Map = RealToReal<3>> = Matrix<[[f32; 4]; 4], Map>;

/// Trait for applying a transform to a value.
pub trait Apply<T> {
    type Output;

    /// Returns the result of applying `self` to `t`.
    fn apply(&self, t: &T) -> Self::Output;
}

//
// Inherent impls
//

impl<M, const N: usize> Matrix<[[f32; N]; N], M> {
    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(rows: [[f32; N]; N]) -> Self {
        Self(rows, PhantomData)
    }

    /// Returns the `N`x`N` identity matrix.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::math::mat::Mat3;
    /// let id: Mat3 = Mat3::identity();
    /// assert_eq!(id.0, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    /// ```
    pub fn identity() -> Self {
        let mut els = [[0.0; N]; N];
        for (i, row) in els.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self::new(els)
    }

    /// Returns row `i` of `self`.
    #[inline]
    pub fn row(&self, i: usize) -> [f32; N] {
        self.0[i]
    }

    /// Returns column `j` of `self`.
    #[inline]
    pub fn col(&self, j: usize) -> [f32; N] {
        self.0.map(|row| row[j])
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(core::array::from_fn(|i| self.col(i)))
    }

    /// Returns `self` re-tagged with the map type `Mp`.
    pub fn to<Mp>(&self) -> Matrix<[[f32; N]; N], Mp> {
        Matrix(self.0, PhantomData)
    }

    fn mul_els(a: &[[f32; N]; N], b: &[[f32; N]; N]) -> [[f32; N]; N] {
        let mut els = [[0.0; N]; N];
        for (i, row) in els.iter_mut().enumerate() {
            for (j, el) in row.iter_mut().enumerate() {
                *el = (0..N).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        els
    }
}

impl<const N: usize, const DIM: usize, Src, Dst>
    Matrix<[[f32; N]; N], RealToReal<DIM, Src, Dst>>
{
    /// Returns the composite `self * other`: a transform that first applies
    /// `other` and then `self`.
    pub fn compose<Inner>(
        &self,
        other: &Matrix<[[f32; N]; N], RealToReal<DIM, Inner, Src>>,
    ) -> Matrix<[[f32; N]; N], RealToReal<DIM, Inner, Dst>> {
        Matrix::new(Self::mul_els(&self.0, &other.0))
    }

    /// Returns the composite `other * self`: a transform that first applies
    /// `self` and then `other`.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::math::{mat::*, vec::*};
    ///
    /// let m = translate2(1.0, 0.0).then(&scale2(2.0, 2.0));
    /// let p: Vec2 = vec2(1.0, 1.0);
    /// assert_eq!(m.apply(&p), vec2(4.0, 2.0));
    /// ```
    pub fn then<Outer>(
        &self,
        other: &Matrix<[[f32; N]; N], RealToReal<DIM, Dst, Outer>>,
    ) -> Matrix<[[f32; N]; N], RealToReal<DIM, Src, Outer>> {
        other.compose(self)
    }
}

impl<Src, Dst> Mat3<RealToReal<2, Src, Dst>> {
    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Returns the inverse of `self`, a transform from `Dst` back to `Src`.
    ///
    /// # Panics
    /// In debug mode, if `self` is singular or nearly so.
    #[must_use]
    pub fn inverse(&self) -> Mat3<RealToReal<2, Dst, Src>> {
        let det = self.determinant();
        debug_assert!(
            det.abs() > f32::EPSILON,
            "singular matrix has no inverse: {:?}",
            self.0
        );
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        let r = 1.0 / det;
        Matrix::new([
            [(e * i - f * h) * r, (c * h - b * i) * r, (b * f - c * e) * r],
            [(f * g - d * i) * r, (a * i - c * g) * r, (c * d - a * f) * r],
            [(d * h - e * g) * r, (b * g - a * h) * r, (a * e - b * d) * r],
        ])
    }

    /// Returns `self` embedded in a 4x4 matrix that leaves z unchanged.
    pub fn to_mat4(&self) -> Mat4<RealToReal<3, Src, Dst>> {
        let [[a, b, tx], [c, d, ty], _] = self.0;
        Matrix::new([
            [a, b, 0.0, tx],
            [c, d, 0.0, ty],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Applies `self` to the direction vector `v`, ignoring translation.
    pub fn apply_vec(&self, v: &Vec2<Src>) -> Vec2<Dst> {
        let [[a, b, _], [c, d, _], _] = self.0;
        vec2(a * v.x() + b * v.y(), c * v.x() + d * v.y())
    }
}

impl<M> Mat3<M> {
    /// Returns the elements of `self` in column-major order, the layout
    /// expected by GPU matrix uniforms.
    pub fn to_cols_array(&self) -> [f32; 9] {
        let [c0, c1, c2] = [self.col(0), self.col(1), self.col(2)];
        [
            c0[0], c0[1], c0[2], //
            c1[0], c1[1], c1[2], //
            c2[0], c2[1], c2[2],
        ]
    }
}

impl<M> Mat4<M> {
    /// Returns the elements of `self` in column-major order, the layout
    /// expected by GPU matrix uniforms.
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut res = [0.0; 16];
        for (j, chunk) in res.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.col(j));
        }
        res
    }
}

//
// Free functions
//

/// Returns a matrix translating 2D points by (`tx`, `ty`).
pub const fn translate2<Sp>(tx: f32, ty: f32) -> Mat3<RealToReal<2, Sp, Sp>> {
    Matrix::new([
        [1.0, 0.0, tx], //
        [0.0, 1.0, ty],
        [0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix scaling 2D vectors by `sx` horizontally and `sy`
/// vertically.
pub const fn scale2<Sp>(sx: f32, sy: f32) -> Mat3<RealToReal<2, Sp, Sp>> {
    Matrix::new([
        [sx, 0.0, 0.0], //
        [0.0, sy, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating 2D vectors counterclockwise (y pointing up)
/// about the origin by angle `a`.
#[cfg(feature = "fp")]
pub fn rotate2<Sp>(a: Angle) -> Mat3<RealToReal<2, Sp, Sp>> {
    let (s, c) = a.sin_cos();
    Matrix::new([
        [c, -s, 0.0], //
        [s, c, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix translating 3D points by (`tx`, `ty`, `tz`).
pub const fn translate3<Sp>(
    tx: f32,
    ty: f32,
    tz: f32,
) -> Mat4<RealToReal<3, Sp, Sp>> {
    Matrix::new([
        [1.0, 0.0, 0.0, tx],
        [0.0, 1.0, 0.0, ty],
        [0.0, 0.0, 1.0, tz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix rotating 3D vectors about the z axis by angle `a`.
#[cfg(feature = "fp")]
pub fn rotate_z<Sp>(a: Angle) -> Mat4<RealToReal<3, Sp, Sp>> {
    let (s, c) = a.sin_cos();
    Matrix::new([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

//
// Trait impls
//

impl<const DIM: usize, Src, Dst> Copy for RealToReal<DIM, Src, Dst> {}

impl<const DIM: usize, Src, Dst> Clone for RealToReal<DIM, Src, Dst> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const DIM: usize, Src, Dst> Default for RealToReal<DIM, Src, Dst> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<const DIM: usize, Src, Dst> PartialEq for RealToReal<DIM, Src, Dst> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<const DIM: usize, Src, Dst> Eq for RealToReal<DIM, Src, Dst> {}

impl<R: Copy, M> Copy for Matrix<R, M> {}

impl<R: Clone, M> Clone for Matrix<R, M> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<R: PartialEq, M> PartialEq for Matrix<R, M> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Eq, M> Eq for Matrix<R, M> {}

impl<Src, Dst> Apply<Vec2<Src>> for Mat3<RealToReal<2, Src, Dst>> {
    type Output = Vec2<Dst>;

    /// Maps the point `p` by `self`, treating it as `(x, y, 1)`.
    fn apply(&self, p: &Vec2<Src>) -> Vec2<Dst> {
        let [[a, b, tx], [c, d, ty], _] = self.0;
        vec2(a * p.x() + b * p.y() + tx, c * p.x() + d * p.y() + ty)
    }
}

impl<Src, Dst> Apply<Vec3<Src>> for Mat4<RealToReal<3, Src, Dst>> {
    type Output = Vec3<Dst>;

    /// Maps the point `p` by `self`, treating it as `(x, y, z, 1)`.
    fn apply(&self, p: &Vec3<Src>) -> Vec3<Dst> {
        let v = [p.x(), p.y(), p.z(), 1.0];
        let dot = |row: [f32; 4]| row.iter().zip(&v).map(|(a, b)| a * b).sum();
        vec3(dot(self.0[0]), dot(self.0[1]), dot(self.0[2]))
    }
}

impl<Src, Dst> Apply<Vec2<Src>> for Mat4<RealToReal<3, Src, Dst>> {
    type Output = Vec2<Dst>;

    /// Maps the point `p` by `self`, treating it as `(x, y, 0, 1)` and
    /// discarding the resulting z.
    fn apply(&self, p: &Vec2<Src>) -> Vec2<Dst> {
        let v: Vec3<Dst> = self.apply(&p.extend(0.0));
        vec2(v.x(), v.y())
    }
}

impl<const N: usize, const DIM: usize, Inner, Src, Dst>
    Mul<Matrix<[[f32; N]; N], RealToReal<DIM, Inner, Src>>>
    for Matrix<[[f32; N]; N], RealToReal<DIM, Src, Dst>>
{
    type Output = Matrix<[[f32; N]; N], RealToReal<DIM, Inner, Dst>>;

    fn mul(self, rhs: Matrix<[[f32; N]; N], RealToReal<DIM, Inner, Src>>) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<M: Debug + Default, const N: usize> Debug for Matrix<[[f32; N]; N], M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix<{:?}>[", M::default())?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl<const DIM: usize, Src, Dst> Debug for RealToReal<DIM, Src, Dst>
where
    Src: Debug + Default,
    Dst: Debug + Default,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "R{DIM}<{:?}>→R{DIM}<{:?}>", Src::default(), Dst::default())
    }
}

impl<M, const N: usize> From<[[f32; N]; N]> for Matrix<[[f32; N]; N], M> {
    fn from(rows: [[f32; N]; N]) -> Self {
        Self::new(rows)
    }
}

impl<Src, Dst> From<Mat3<RealToReal<2, Src, Dst>>>
    for Mat4<RealToReal<3, Src, Dst>>
{
    fn from(m: Mat3<RealToReal<2, Src, Dst>>) -> Self {
        m.to_mat4()
    }
}

impl<M, const N: usize> ApproxEq<f32> for Matrix<[[f32; N]; N], M> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
