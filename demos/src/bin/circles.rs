//! Draws a midpoint circle of radius 30 around each mouse click.
//! Digits pick a color.

use rl::interact::CircleTool;

fn main() -> anyhow::Result<()> {
    rasterlab_demos::init_logging();
    rasterlab_demos::window::run_tool("circles", CircleTool::new())
}
