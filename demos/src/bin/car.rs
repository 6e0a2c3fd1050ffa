//! The animated car. Space pauses and resumes, `r` reverses.

use rl::scene::Car;

fn main() -> anyhow::Result<()> {
    rasterlab_demos::init_logging();
    rasterlab_demos::window::run_scene(&Car)
}
