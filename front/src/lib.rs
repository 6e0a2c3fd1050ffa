//! Frontends for running `rasterlab` programs in a window or a browser.
//!
//! A frontend owns the main loop. On every iteration it collects input
//! events, passes a [`Frame`] to the user callback to draw into, and
//! presents the resulting canvas.

use std::time::Duration;

use rasterlab_core::interact::{Event, Output, Tool};
use rasterlab_core::render::{Canvas, DrawCall, DrawState, Stats, draw_all};

#[cfg(feature = "minifb")]
pub mod minifb;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Canvas in which to draw. Its contents persist between frames.
    pub canvas: &'a mut Canvas,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Input events received since the previous frame, oldest first.
    pub events: &'a [Event],
    /// Accumulated rendering statistics.
    pub stats: &'a mut Stats,
}

impl<Win> Frame<'_, Win> {
    /// Returns the time elapsed since the previous frame in seconds.
    pub fn dt_secs(&self) -> f32 {
        self.dt.as_secs_f32()
    }

    /// Clears the canvas and draws `calls` on it.
    pub fn draw(&mut self, calls: &[DrawCall], state: &DrawState) {
        *self.stats += draw_all(self.canvas, calls, state);
    }

    /// Feeds the events of this frame to `tool`, redrawing the canvas
    /// whenever the tool reports a new picture.
    ///
    /// Returns whether the canvas was redrawn.
    pub fn apply_tool(&mut self, tool: &mut impl Tool) -> bool {
        let last: Option<Output> = self
            .events
            .iter()
            .filter_map(|&e| {
                log::debug!("event: {e:?}");
                tool.handle(e)
            })
            .last();
        match last {
            Some(out) => {
                let mut stats = out.draw(self.canvas);
                stats.frames = 1.0;
                *self.stats += stats;
                true
            }
            None => false,
        }
    }
}
