//! The static pictures: a pinwheel, a robot, and a car.
//!
//! Keys `1` to `3` switch between them.

use std::ops::ControlFlow::Continue;

use anyhow::Context;
use log::info;

use rl::interact::Event;
use rl::render::DrawState;
use rl::scene::{Pinwheel, Scene, StaticCar, StaticRobot};
use rl_front::minifb::Window;

fn main() -> anyhow::Result<()> {
    rasterlab_demos::init_logging();

    let scenes: [&dyn Scene; 3] = [&Pinwheel, &StaticRobot, &StaticCar];
    let mut current = 0;
    let mut dirty = true;

    let mut win = Window::builder()
        .title("rasterlab//shapes")
        .build()
        .context("could not create window")?;

    win.run(|frame| {
        for &e in frame.events {
            let Event::Key(k) = e else { continue };
            if let Some(i @ 0..=2) = k.to_digit(10).and_then(|d| d.checked_sub(1)) {
                current = i as usize;
                dirty = true;
                info!("showing {}", scenes[current].name());
            }
        }
        if dirty {
            let scene = scenes[current];
            let state = DrawState {
                clear_color: scene.clear_color(),
                ..DrawState::default()
            };
            frame.draw(&scene.draw(0.0), &state);
            dirty = false;
        }
        Continue(())
    })
    .context("main loop failed")
}
