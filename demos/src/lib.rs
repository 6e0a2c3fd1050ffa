//! Shared setup for the demo programs.

use std::sync::Once;

pub use logging::init_logging;

pub mod logging {
    use super::Once;

    static INIT: Once = Once::new();

    /// Initializes the global logger once.
    ///
    /// Logs at `info` level unless `RUST_LOG` says otherwise, using the
    /// `env_logger` filter syntax (e.g. "debug" or "rasterlab_front=debug").
    /// Subsequent calls are ignored.
    pub fn init_logging() {
        INIT.call_once(|| {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .init();
            log::debug!("logging initialized");
        });
    }
}

#[cfg(feature = "minifb")]
pub mod window {
    use std::ops::ControlFlow::Continue;

    use anyhow::{Context, Result};
    use log::{debug, info};

    use rl::interact::{Event, Tool};
    use rl::render::DrawState;
    use rl::scene::{Anim, Scene};
    use rl_front::minifb::Window;

    /// Opens a window that animates `scene` until closed.
    ///
    /// Space pauses and resumes the animation, `r` reverses it.
    pub fn run_scene(scene: &dyn Scene) -> Result<()> {
        let title = format!("rasterlab//{}", scene.name());
        let mut win = Window::builder()
            .title(&title)
            .clear_color(scene.clear_color())
            .build()
            .context("could not create window")?;

        let state = DrawState {
            clear_color: scene.clear_color(),
            ..DrawState::default()
        };
        let mut anim = Anim::new();
        let mut first = true;

        win.run(|frame| {
            for &e in frame.events {
                if let Event::Key(k) = e {
                    if anim.on_key(k) {
                        let (run, dir) = (anim.is_running(), anim.direction());
                        info!("running: {run}, direction: {dir}");
                    }
                }
            }
            let t = if scene.is_animated() {
                anim.tick(frame.dt_secs())
            } else {
                first.then_some(0.0)
            };
            if let Some(t) = t {
                frame.draw(&scene.draw(t), &state);
                first = false;
            }
            Continue(())
        })
        .context("main loop failed")
    }

    /// Opens a window that feeds mouse and keyboard input to `tool` and
    /// shows the pictures it produces.
    pub fn run_tool(name: &str, mut tool: impl Tool) -> Result<()> {
        let title = format!("rasterlab//{name}");
        let mut win = Window::builder()
            .title(&title)
            .clear_color(DrawState::default().clear_color)
            .build()
            .context("could not create window")?;

        win.run(|frame| {
            if frame.apply_tool(&mut tool) {
                debug!("redrawn, {} pixels total", frame.stats.pixels);
            }
            Continue(())
        })
        .context("main loop failed")
    }
}
