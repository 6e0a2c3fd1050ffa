//! Reading and writing PPM images.
//!
//! PPM is the RGB member of the NetPBM family: a short text header
//! (`P6 <width> <height> <max>`) followed by the pixel data. Canvases are
//! saved in the binary `P6` variant with one byte per channel. Both the
//! binary and the plain-text `P3` variant can be read back, which is
//! enough for comparing rendered frames in tests.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::math::color::{Color3, rgb};
use crate::util::buf::Buf2;

/// Error returned when decoding a PPM image fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The magic number is not `P3` or `P6`.
    Unsupported([u8; 2]),
    /// The input ended before the header or all pixels were read.
    UnexpectedEnd,
    /// A header field or text sample is not a valid number.
    InvalidNumber(String),
    /// The maximum sample value is not in `1..=255`.
    UnsupportedDepth(u32),
    /// The image has more than [`MAX_PIXELS`] pixels.
    TooLarge(u32, u32),
}

/// The largest number of pixels [`read_pnm`] accepts.
pub const MAX_PIXELS: u64 = 1 << 26;

/// Result of decoding a PPM image.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Encoding {
    Text,
    Binary,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    enc: Encoding,
    width: u32,
    height: u32,
    max: u32,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported([a, b]) => write!(
                f,
                "unsupported image type {:?}",
                [char::from(*a), char::from(*b)]
            ),
            Self::UnexpectedEnd => f.write_str("unexpected end of image data"),
            Self::InvalidNumber(s) => write!(f, "invalid number {s:?}"),
            Self::UnsupportedDepth(m) => {
                write!(f, "unsupported maximum sample value {m}")
            }
            Self::TooLarge(w, h) => write!(f, "image too large: {w}x{h}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Header {
    fn read(it: &mut impl Iterator<Item = u8>) -> Result<Self> {
        let magic = [
            it.next().ok_or(Error::UnexpectedEnd)?,
            it.next().ok_or(Error::UnexpectedEnd)?,
        ];
        let enc = match &magic {
            b"P3" => Encoding::Text,
            b"P6" => Encoding::Binary,
            _ => return Err(Error::Unsupported(magic)),
        };
        let width = next_num(it)?;
        let height = next_num(it)?;
        let max = next_num(it)?;
        if !(1..=255).contains(&max) {
            return Err(Error::UnsupportedDepth(max));
        }
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(Error::TooLarge(width, height));
        }
        Ok(Self { enc, width, height, max })
    }
}

/// Returns the next whitespace-delimited number in `it`, skipping
/// `#` comments. Consumes the single whitespace byte after the number.
fn next_num(it: &mut impl Iterator<Item = u8>) -> Result<u32> {
    let mut s = String::new();
    let mut comment = false;
    for b in it.by_ref() {
        match b {
            b'\n' | b'\r' if comment => comment = false,
            _ if comment => {}
            b'#' if s.is_empty() => comment = true,
            _ if b.is_ascii_whitespace() => {
                if !s.is_empty() {
                    break;
                }
            }
            _ => s.push(char::from(b)),
        }
    }
    if s.is_empty() {
        return Err(Error::UnexpectedEnd);
    }
    s.parse().map_err(|_| Error::InvalidNumber(s))
}

/// Decodes a `P3` or `P6` image from a stream of bytes.
///
/// Samples are rescaled to 0–255 if the header declares a smaller maximum.
///
/// # Errors
/// If the data is not a complete, supported PPM image.
pub fn read_pnm(src: impl IntoIterator<Item = u8>) -> Result<Buf2<Color3>> {
    let it = &mut src.into_iter();
    let Header { enc, width, height, max } = Header::read(it)?;

    let scale = |s: u32| (s.min(max) * 255 / max) as u8;
    let mut sample = || match enc {
        Encoding::Binary => {
            it.next().map(|b| scale(b.into())).ok_or(Error::UnexpectedEnd)
        }
        Encoding::Text => next_num(&mut *it).map(scale),
    };

    let n = width as usize * height as usize;
    let mut data = Vec::with_capacity(n.min(1 << 16));
    for _ in 0..n {
        data.push(rgb(sample()?, sample()?, sample()?));
    }
    Buf2::from_vec((width, height), data).ok_or(Error::UnexpectedEnd)
}

/// Encodes `buf` as a binary `P6` image with 8 bits per channel.
///
/// Pixels can be anything convertible to [`Color3`], such as the
/// `0xAA_RR_GG_BB` words of a canvas.
///
/// # Errors
/// If writing to `out` fails.
#[cfg(feature = "std")]
pub fn write_ppm<T>(mut out: impl Write, buf: &Buf2<T>) -> io::Result<()>
where
    T: Copy + Into<Color3>,
{
    writeln!(out, "P6 {} {} 255", buf.width(), buf.height())?;
    for &px in buf.data() {
        let c: Color3 = px.into();
        out.write_all(&c.0)?;
    }
    Ok(())
}

/// Writes `buf` to the file at `path` as a `P6` image, replacing the file
/// if it exists.
///
/// # Errors
/// If the file cannot be created or written.
#[cfg(feature = "std")]
pub fn save_ppm<T>(path: impl AsRef<Path>, buf: &Buf2<T>) -> io::Result<()>
where
    T: Copy + Into<Color3>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, buf)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &[u8]) -> Result<u32> {
        next_num(&mut s.iter().copied())
    }

    #[test]
    fn numbers_skip_whitespace_and_comments() {
        assert_eq!(num(b"42"), Ok(42));
        assert_eq!(num(b" \n\t 7 8"), Ok(7));
        assert_eq!(num(b"# size\n500"), Ok(500));
        assert_eq!(num(b"   "), Err(Error::UnexpectedEnd));
        assert_eq!(num(b"x1"), Err(Error::InvalidNumber("x1".into())));
    }

    #[test]
    fn header_variants() {
        let mut it = b"P6 # canvas\n500 250\n255\n".iter().copied();
        assert_eq!(
            Header::read(&mut it),
            Ok(Header {
                enc: Encoding::Binary,
                width: 500,
                height: 250,
                max: 255,
            })
        );
        assert_eq!(it.next(), None);

        let mut it = b"P2 1 1 1 ".iter().copied();
        assert_eq!(Header::read(&mut it), Err(Error::Unsupported(*b"P2")));

        let mut it = b"P3 1 1 1000 ".iter().copied();
        assert_eq!(Header::read(&mut it), Err(Error::UnsupportedDepth(1000)));
    }

    #[test]
    fn read_text_image() {
        let img = read_pnm(*b"P3 2 1 15\n15 0 0  0 15 5").unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img[[0, 0]], rgb(255, 0, 0));
        assert_eq!(img[[1, 0]], rgb(0, 255, 85));
    }

    #[test]
    fn read_binary_image() {
        let img = read_pnm(*b"P6 1 2 255\n\x01\x02\x03\xFA\xFB\xFC").unwrap();
        assert_eq!(img[[0, 0]], rgb(1, 2, 3));
        assert_eq!(img[[0, 1]], rgb(0xFA, 0xFB, 0xFC));
    }

    #[test]
    fn truncated_image() {
        let res = read_pnm(*b"P6 2 2 255\n\x00\x00\x00");
        assert_eq!(res.err(), Some(Error::UnexpectedEnd));

        let res = read_pnm(*b"P6 4000 4000 255\n\x01\x02\x03");
        assert_eq!(res.err(), Some(Error::UnexpectedEnd));
    }

    #[test]
    fn oversized_header() {
        let res = read_pnm(*b"P6 65536 65536 255\n\x01\x02\x03");
        assert_eq!(res.err(), Some(Error::TooLarge(65536, 65536)));

        let res = read_pnm(*b"P3 8192 8193 255\n0 0 0");
        assert_eq!(res.err(), Some(Error::TooLarge(8192, 8193)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_canvas_words() {
        let buf = Buf2::new_with((2, 1), |x, _| {
            if x == 0 { 0xFF_11_22_33u32 } else { 0xFF_44_55_66 }
        });
        let mut out = Vec::new();
        write_ppm(&mut out, &buf).unwrap();
        assert_eq!(&out, b"P6 2 1 255\n\x11\x22\x33\x44\x55\x66");

        let back = read_pnm(out).unwrap();
        assert_eq!(back[[1, 0]], rgb(0x44, 0x55, 0x66));
    }
}
