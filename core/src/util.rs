//! Various utility types and functions.

pub mod buf;
pub mod pnm;

/// Width and height in pixels.
pub type Dims = (u32, u32);

/// 640 × 480, the standard VGA resolution.
pub const VGA_640_480: Dims = (640, 480);
/// 800 × 600, the standard SVGA resolution.
pub const SVGA_800_600: Dims = (800, 600);
/// 500 × 500, the size of the canvas the exercises were written for.
pub const CANVAS_500: Dims = (500, 500);
