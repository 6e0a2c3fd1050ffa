//! Two-dimensional buffers.

use alloc::{vec, vec::Vec};
use core::fmt::{Debug, Formatter};
use core::ops::{Index, IndexMut};

use crate::math::vec::Vec2i;

use super::Dims;

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use rasterlab_core::util::buf::Buf2;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new((4, 4));
/// // Indexing with an array [x, y] yields element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// // Thus you can also do this, row first, column second:
/// assert_eq!(buf[1usize][2], 123)
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Buf2<T> {
    w: usize,
    h: usize,
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer of size `w` × `h`, with every element initialized
    /// by calling `T::default()`.
    pub fn new((w, h): Dims) -> Self
    where
        T: Clone + Default,
    {
        let (w, h) = (w as usize, h as usize);
        Self { w, h, data: vec![T::default(); w * h] }
    }

    /// Returns a buffer of size `w` × `h`, with every element initialized
    /// by calling `init_fn(x, y)` where x is the column index and y the
    /// row index of the element being initialized.
    pub fn new_with<F>((w, h): Dims, mut init_fn: F) -> Self
    where
        F: FnMut(u32, u32) -> T,
    {
        let data = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| init_fn(x, y))
            .collect();
        Self { w: w as usize, h: h as usize, data }
    }

    /// Returns a buffer of size `w` × `h` backed by `data`, or `None` if
    /// `data.len() != w * h`.
    pub fn from_vec((w, h): Dims, data: Vec<T>) -> Option<Self> {
        let (w, h) = (w as usize, h as usize);
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    /// Returns the width of `self`.
    #[inline]
    pub fn width(&self) -> u32 {
        self.w as u32
    }
    /// Returns the height of `self`.
    #[inline]
    pub fn height(&self) -> u32 {
        self.h as u32
    }
    /// Returns the width and height of `self`.
    #[inline]
    pub fn dims(&self) -> Dims {
        (self.width(), self.height())
    }

    /// Returns a view of the backing data of `self`.
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns a mutable view of the backing data of `self`.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
    /// Consumes `self`, returning the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over the rows of `self` as `&[T]` slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `max` avoids a zero chunk size panic on an empty buffer
        self.data.chunks(self.w.max(1))
    }
    /// Returns an iterator over the rows of `self` as `&mut [T]` slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_mut(self.w.max(1))
    }

    /// Returns a reference to the element at `pos`, or `None` if `pos` is
    /// out of bounds.
    pub fn get(&self, pos: Vec2i) -> Option<&T> {
        self.to_index_checked(pos).map(|i| &self.data[i])
    }
    /// Returns a mutable reference to the element at `pos`, or `None` if
    /// `pos` is out of bounds.
    pub fn get_mut(&mut self, pos: Vec2i) -> Option<&mut T> {
        self.to_index_checked(pos).map(|i| &mut self.data[i])
    }

    /// Sets every element of `self` to `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }

    #[inline]
    fn to_index_checked(&self, pos: Vec2i) -> Option<usize> {
        let [x, y] = pos.0;
        let x = usize::try_from(x).ok().filter(|&x| x < self.w)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.h)?;
        Some(y * self.w + x)
    }

    #[inline]
    #[track_caller]
    fn to_index_strict(&self, x: usize, y: usize) -> usize {
        if x >= self.w || y >= self.h {
            position_out_of_bounds(x, y, self.w, self.h)
        }
        y * self.w + x
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn position_out_of_bounds(x: usize, y: usize, w: usize, h: usize) -> ! {
    panic!("position (x={x}, y={y}) out of bounds (0..{w}, 0..{h})")
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buf2")
            .field("w", &self.w)
            .field("h", &self.h)
            .finish_non_exhaustive()
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns a reference to the row at index `i`.
    ///
    /// # Panics
    /// If `i >= self.height()`.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        let idx = self.to_index_strict(0, i);
        &self.data[idx..idx + self.w]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    /// Returns a mutable reference to the row at index `i`.
    ///
    /// # Panics
    /// If `i >= self.height()`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        let idx = self.to_index_strict(0, i);
        &mut self.data[idx..idx + self.w]
    }
}

impl<T> Index<[u32; 2]> for Buf2<T> {
    type Output = T;

    /// Returns a reference to the element at position `[x, y]`.
    ///
    /// # Panics
    /// If the position is out of bounds.
    #[inline]
    fn index(&self, [x, y]: [u32; 2]) -> &T {
        &self.data[self.to_index_strict(x as usize, y as usize)]
    }
}

impl<T> IndexMut<[u32; 2]> for Buf2<T> {
    /// Returns a mutable reference to the element at position `[x, y]`.
    ///
    /// # Panics
    /// If the position is out of bounds.
    #[inline]
    fn index_mut(&mut self, [x, y]: [u32; 2]) -> &mut T {
        let idx = self.to_index_strict(x as usize, y as usize);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use crate::math::vec::vec2i;

    use super::*;

    #[test]
    fn buf_new() {
        let buf: Buf2<i32> = Buf2::new((3, 2));
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.data(), &[0; 6]);
    }

    #[test]
    fn buf_new_with() {
        let buf = Buf2::new_with((3, 2), |x, y| x + 10 * y);
        assert_eq!(buf.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(buf[[2, 1]], 12);
        assert_eq!(&buf[0usize], &[0, 1, 2]);
    }

    #[test]
    fn buf_from_vec() {
        assert!(Buf2::from_vec((2, 2), alloc::vec![0u8; 4]).is_some());
        assert!(Buf2::from_vec((2, 2), alloc::vec![0u8; 5]).is_none());
    }

    #[test]
    fn buf_rows() {
        let mut buf = Buf2::new_with((2, 3), |x, y| (x, y));
        let rows: Vec<_> = buf.rows().collect();
        assert_eq!(rows[2], &[(0, 2), (1, 2)]);

        for row in buf.rows_mut() {
            row[0] = (9, 9);
        }
        assert_eq!(buf[[0, 1]], (9, 9));
    }

    #[test]
    fn buf_get_checks_bounds() {
        let mut buf: Buf2<u8> = Buf2::new((4, 3));
        assert_eq!(buf.get(vec2i(3, 2)), Some(&0));
        assert_eq!(buf.get(vec2i(4, 2)), None);
        assert_eq!(buf.get(vec2i(-1, 0)), None);

        *buf.get_mut(vec2i(1, 1)).unwrap() = 7;
        assert_eq!(buf[[1, 1]], 7);
        assert!(buf.get_mut(vec2i(0, 3)).is_none());
    }

    #[test]
    fn buf_fill() {
        let mut buf: Buf2<u32> = Buf2::new((2, 2));
        buf.fill(0xFF);
        assert!(buf.data().iter().all(|&c| c == 0xFF));
    }

    #[test]
    #[should_panic = "position (x=4, y=0) out of bounds (0..4, 0..3)"]
    fn buf_index_out_of_bounds() {
        let buf: Buf2<u8> = Buf2::new((4, 3));
        let _val = buf[[4, 0]];
    }

    #[test]
    #[should_panic]
    fn buf_row_out_of_bounds() {
        let buf: Buf2<u8> = Buf2::new((4, 3));
        let _ = &buf[3usize];
    }
}
