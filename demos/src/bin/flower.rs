//! A flower of six magenta petals turning around a yellow center.
//!
//! Space pauses and resumes, `r` reverses the spin.

use rl::scene::Flower;

fn main() -> anyhow::Result<()> {
    rasterlab_demos::init_logging();
    rasterlab_demos::window::run_scene(&Flower)
}
