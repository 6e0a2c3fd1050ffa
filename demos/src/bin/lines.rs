//! Draws Bresenham lines and triangle outlines between mouse clicks.
//!
//! Press `r` for line mode, `t` for triangle mode, and `e` or `k` followed
//! by a digit to set the point size. Other digits pick a color.

use rl::interact::Rasterizer;

fn main() -> anyhow::Result<()> {
    rasterlab_demos::init_logging();
    rasterlab_demos::window::run_tool("lines", Rasterizer::new())
}
