//! Approximate equality of floating-point values.

/// Comparison within a tolerance that scales with the magnitude of the
/// values compared.
///
/// Transforms built from sines and cosines, or composed from many steps,
/// rarely equal their ideal counterparts exactly, so tests compare them
/// with this trait instead of `==`.
pub trait ApproxEq<Eps = Self> {
    /// Returns whether `self` and `other` differ by at most `eps` times
    /// the larger of 1 and `|self|`, component by component.
    fn approx_eq_eps(&self, other: &Self, eps: &Eps) -> bool;

    /// Returns the tolerance used by [`approx_eq`][Self::approx_eq].
    fn relative_epsilon() -> Eps;

    /// Like [`approx_eq_eps`][Self::approx_eq_eps] with the default
    /// tolerance.
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        (self - other).abs() <= eps * self.abs().max(1.0)
    }

    fn relative_epsilon() -> Self {
        // The approximate micromath functions need more slack
        if cfg!(any(feature = "std", feature = "libm")) {
            1e-6
        } else {
            5e-3
        }
    }
}

impl<E, T: ApproxEq<E>, const N: usize> ApproxEq<E> for [T; N] {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.iter().zip(other).all(|(a, b)| a.approx_eq_eps(b, eps))
    }

    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal, optionally with a
/// custom relative epsilon.
///
/// # Panics
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// # use rasterlab_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {{
        use $crate::math::approx::ApproxEq;
        let (a, b) = (&$a, &$b);
        assert!(ApproxEq::approx_eq(a, b), "assertion failed: `{a:?} ≅ {b:?}`");
    }};
    ($a:expr, $b:expr, eps = $eps:literal) => {{
        use $crate::math::approx::ApproxEq;
        let (a, b) = (&$a, &$b);
        assert!(
            ApproxEq::approx_eq_eps(a, b, &$eps),
            "assertion failed: `{a:?} ≅ {b:?}` (eps = {})",
            $eps
        );
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn zero_and_negative_zero() {
        assert_approx_eq!(0.0f32, -0.0);
    }

    #[test]
    fn tolerance_is_relative() {
        assert_approx_eq!(1.0e10f32, 1.0000001e10);
        assert_approx_eq!(-1.0f32, -1.0000001);
        assert_approx_eq!(0.0f32, 0.001, eps = 0.01);
        assert_approx_eq!(100.0f32, 99.9, eps = 0.01);
    }

    #[test]
    fn nested_arrays() {
        use super::ApproxEq;
        let a = [[0.1f32 + 0.2, 1.0], [0.0, -2.0]];
        assert_approx_eq!(a, [[0.3, 1.0], [0.0, -2.0]]);
        assert!(!a.approx_eq(&[[0.3, 1.0], [0.0, -2.1]]));
    }
}
