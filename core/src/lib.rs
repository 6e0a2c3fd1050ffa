//! Core functionality of the `rasterlab` project.
//!
//! Includes a small math library with typed vectors, matrices, colors, and
//! angles; Bresenham-style line and circle rasterizers and a scanline
//! triangle filler; colored 2D meshes and shape generators; a software
//! canvas that draws meshes the way a minimal GPU pipeline would; animated
//! scenes; and the interactive line, triangle, and circle drawing tools.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O, timekeeping, or any floating-point
//!   functions not included in `core`. In particular this means trigonometric
//!   functions, which rotations and circle meshes need.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! All features are disabled by default.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod interact;
pub mod math;
pub mod raster;
pub mod render;
#[cfg(feature = "fp")]
pub mod scene;
pub mod util;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{rotate_z, rotate2};
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        color::{Color3, Color3f, consts::*, palette, rgb},
        mat::{Apply, Mat3, Mat4, Matrix, scale2, translate2, translate3},
        vec::{Vec2, Vec2i, Vec3, Vector, splat, vec2, vec2i, vec3},
    };

    #[cfg(feature = "fp")]
    pub use crate::geom::circle_fan;
    pub use crate::geom::{
        Mesh, Topology, Tri, Vertex, points, rect, rect_centered, triangle,
        vertex,
    };

    pub use crate::raster::{Ndc, Screen, Viewport, circle, line, tri_outline};

    pub use crate::render::{Canvas, DrawCall, DrawState, Stats, draw_all};

    pub use crate::interact::{CircleTool, Event, Mode, Rasterizer, Tool};

    #[cfg(feature = "fp")]
    pub use crate::scene::{Anim, Scene};

    pub use crate::util::{Dims, buf::Buf2};
}
