//! Renders every scene into a PPM image without opening a window.
//!
//! Usage: `ppm [OUT_DIR] [T]`, where `T` is the animation time in seconds.
//! Defaults to the current directory and time zero.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use log::info;

use rl::render::{Canvas, DrawState, draw_all};
use rl::scene::all_scenes;
use rl::util::{CANVAS_500, pnm::save_ppm};

fn main() -> Result<()> {
    rasterlab_demos::init_logging();

    let mut args = env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".into()));
    let t: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid time {s:?}"))?,
        None => 0.0,
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("could not create {}", out_dir.display()))?;

    let mut canvas = Canvas::new(CANVAS_500);
    for scene in all_scenes() {
        let state = DrawState {
            clear_color: scene.clear_color(),
            ..DrawState::default()
        };
        let stats = draw_all(&mut canvas, &scene.draw(t), &state);

        let path = out_dir.join(format!("{}.ppm", scene.name()));
        save_ppm(&path, canvas.buf())
            .with_context(|| format!("could not write {}", path.display()))?;
        info!(
            "{}: {} calls, {} pixels in {:.1?}",
            path.display(),
            stats.calls,
            stats.pixels,
            stats.time
        );
    }
    Ok(())
}
