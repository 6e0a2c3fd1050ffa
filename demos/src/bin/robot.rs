//! A robot face whose nose spins in place. Space pauses and resumes,
//! `r` reverses.

use rl::scene::Robot;

fn main() -> anyhow::Result<()> {
    rasterlab_demos::init_logging();
    rasterlab_demos::window::run_scene(&Robot)
}
