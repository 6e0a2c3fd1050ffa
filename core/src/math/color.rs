//! Colors and color spaces.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Index, Mul, Sub};

use crate::math::approx::ApproxEq;

//
// Types
//

/// A generic color type, similar to [`Vector`][crate::math::vec::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
///   Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The (s)RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGB color with `f32` components in the range 0.0..=1.0.
pub type Color3f<Space = Rgb> = Color<[f32; 3], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}

/// Named colors used by the exercises.
pub mod consts {
    use super::{Color3f, rgb};

    pub const BLACK: Color3f = rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color3f = rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color3f = rgb(0.5, 0.5, 0.5);
    pub const RED: Color3f = rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color3f = rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color3f = rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color3f = rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color3f = rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color3f = rgb(1.0, 0.0, 1.0);
    pub const LAVENDER: Color3f = rgb(0.5, 0.5, 1.0);
    pub const SALMON: Color3f = rgb(1.0, 0.5, 0.5);
    pub const LIME: Color3f = rgb(0.8, 1.0, 0.0);
}

/// Returns the palette color bound to the digit key `key`, if any.
///
/// | key | color             |
/// |-----|-------------------|
/// | `1` | red               |
/// | `2` | green             |
/// | `3` | blue              |
/// | `4` | yellow            |
/// | `5` | cyan              |
/// | `6` | magenta           |
/// | `7` | black             |
/// | `8` | (0.5, 0.5, 1.0)   |
/// | `9` | (1.0, 0.5, 0.5)   |
///
/// # Examples
/// ```
/// use rasterlab_core::math::color::{consts, palette};
/// assert_eq!(palette('3'), Some(consts::BLUE));
/// assert_eq!(palette('0'), None);
/// assert_eq!(palette('x'), None);
/// ```
pub fn palette(key: char) -> Option<Color3f> {
    use consts::*;
    Some(match key {
        '1' => RED,
        '2' => GREEN,
        '3' => BLUE,
        '4' => YELLOW,
        '5' => CYAN,
        '6' => MAGENTA,
        '7' => BLACK,
        '8' => LAVENDER,
        '9' => SALMON,
        _ => return None,
    })
}

//
// Inherent impls
//

impl<Ch: Copy> Color<[Ch; 3], Rgb> {
    /// Returns the red component of `self`.
    pub fn r(&self) -> Ch {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Ch {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Ch {
        self.0[2]
    }
}

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0xFF_RR_GG_BB`, that is, with an opaque alpha channel.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0xFF, r, g, b])
    }
    /// Returns the color whose components are the lowest three bytes
    /// of `argb`.
    #[inline]
    pub const fn from_argb_u32(argb: u32) -> Self {
        let [_, r, g, b] = argb.to_be_bytes();
        rgb(r, g, b)
    }
}

impl Color3f {
    /// Returns a `Color3` with the components of `self` mapped to `u8`
    /// with `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        self.0
            .map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
            .into()
    }
    /// Returns `self` converted to an opaque `0xFF_RR_GG_BB` pixel value.
    #[inline]
    pub fn to_argb_u32(self) -> u32 {
        self.to_color3().to_argb_u32()
    }
    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }
}

//
// Trait impls
//

impl<R: Debug, Space: Debug + Default> Debug for Color<R, Space> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>{:?}", Space::default(), self.0)
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}

impl From<u32> for Color3 {
    /// Returns the color whose components are the lowest three bytes of
    /// `argb`, as in [`Color3::from_argb_u32`].
    #[inline]
    fn from(argb: u32) -> Self {
        Self::from_argb_u32(argb)
    }
}

impl<Ch, Sp, const N: usize> Index<usize> for Color<[Ch; N], Sp> {
    type Output = Ch;
    fn index(&self, i: usize) -> &Ch {
        &self.0[i]
    }
}

impl<Sp, const N: usize> Add for Color<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        array::from_fn(|i| self.0[i] + rhs.0[i]).into()
    }
}

impl<Sp, const N: usize> Sub for Color<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        array::from_fn(|i| self.0[i] - rhs.0[i]).into()
    }
}

impl<Sp, const N: usize> Mul<f32> for Color<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.0.map(|c| c * rhs).into()
    }
}

impl<Sp, const N: usize> ApproxEq<f32> for Color<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn color_components() {
        assert_eq!(rgb(0xFF, 0, 0).r(), 0xFF);
        assert_eq!(rgb(0, 0xFF, 0).g(), 0xFF);
        assert_eq!(rgb(0, 0, 0xFF).b(), 0xFF);
    }

    #[test]
    fn rgb_to_u32() {
        let c: Color3 = rgb(0x11, 0x22, 0x33);
        assert_eq!(c.to_rgb_u32(), 0x00_11_22_33);
        assert_eq!(c.to_argb_u32(), 0xFF_11_22_33);
        assert_eq!(Color3::from_argb_u32(0xFF_11_22_33), rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn rgbf_to_rgb_clamps() {
        let c: Color3f = rgb(1.0, 0.5, -1.0);
        assert_eq!(c.to_color3(), rgb(0xFF, 0x7F, 0));
        let c: Color3f = rgb(2.0, 0.0, 0.0);
        assert_eq!(c.to_color3(), rgb(0xFF, 0, 0));
    }

    #[test]
    fn lerp_colors() {
        let c = consts::BLACK.lerp(&consts::WHITE, 0.25);
        assert_approx_eq!(c, rgb(0.25, 0.25, 0.25));
    }

    #[test]
    fn palette_covers_digits_one_to_nine() {
        let colors: alloc::vec::Vec<_> =
            ('1'..='9').filter_map(palette).collect();
        assert_eq!(colors.len(), 9);
        assert_eq!(palette('1'), Some(consts::RED));
        assert_eq!(palette('8'), Some(rgb(0.5, 0.5, 1.0)));
        assert_eq!(palette('9'), Some(rgb(1.0, 0.5, 0.5)));
        assert_eq!(palette('0'), None);
        assert_eq!(palette('r'), None);
    }
}
