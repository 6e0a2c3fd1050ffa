//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{debug, info};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, WindowOptions};

use rasterlab_core::interact::Event;
use rasterlab_core::math::{color::Color3f, color::consts::WHITE, vec::vec2i};
use rasterlab_core::render::{Canvas, Stats};
use rasterlab_core::util::{CANVAS_500, Dims};

use crate::Frame;

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
    /// The color the canvas is initially filled with.
    pub clear_color: Color3f,
    mouse_down: bool,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub clear_color: Color3f,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: CANVAS_500,
            title: "// rasterlab //",
            target_fps: Some(60),
            clear_color: WHITE,
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets the initial background color.
    pub fn clear_color(mut self, color: Color3f) -> Self {
        self.clear_color = color;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self {
            dims,
            title,
            target_fps,
            clear_color,
            opts,
        } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        debug!("created {}x{} window {title:?}", dims.0, dims.1);
        Ok(Window {
            imp,
            dims,
            clear_color,
            mouse_down: false,
        })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder<'t>() -> Builder<'t> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    pub fn present(&mut self, fb: &[u32]) -> minifb::Result<()> {
        let (w, h) = self.dims;
        self.imp.update_with_buffer(fb, w as usize, h as usize)
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// If presenting a frame fails.
    pub fn run<F>(&mut self, mut frame_fn: F) -> minifb::Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let mut canvas = Canvas::new(self.dims);
        canvas.clear(self.clear_color);
        let mut stats = Stats::new();

        let start = Instant::now();
        let mut last = start;
        loop {
            if self.should_quit() {
                break;
            }
            let events = self.poll_events();
            let now = Instant::now();
            let frame = &mut Frame {
                t: now - start,
                dt: now - last,
                canvas: &mut canvas,
                win: self,
                events: &events,
                stats: &mut stats,
            };
            last = now;

            if let Break(_) = frame_fn(frame) {
                break;
            }
            self.present(canvas.pixels())?;
        }
        info!("\n{stats}");
        Ok(())
    }

    /// Returns the input events since the last call: a click when the
    /// left mouse button goes down, followed by the pressed keys.
    fn poll_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();

        let down = self.imp.get_mouse_down(MouseButton::Left);
        if down && !self.mouse_down {
            if let Some((x, y)) = self.imp.get_mouse_pos(MouseMode::Discard) {
                events.push(Event::Click(vec2i(x as i32, y as i32)));
            }
        }
        self.mouse_down = down;

        let shift = self.imp.is_key_down(Key::LeftShift)
            || self.imp.is_key_down(Key::RightShift);
        events.extend(
            self.imp
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .filter_map(|k| key_to_char(k, shift))
                .map(Event::Key),
        );
        events
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}

/// Returns the character typed by `key`, if it is a letter, a digit, or
/// space. Letters are uppercase if `shift` is held.
pub fn key_to_char(key: Key, shift: bool) -> Option<char> {
    use Key::*;
    let digit = |n: u8| Some(char::from(b'0' + n));
    match key {
        Key0 | NumPad0 => digit(0),
        Key1 | NumPad1 => digit(1),
        Key2 | NumPad2 => digit(2),
        Key3 | NumPad3 => digit(3),
        Key4 | NumPad4 => digit(4),
        Key5 | NumPad5 => digit(5),
        Key6 | NumPad6 => digit(6),
        Key7 | NumPad7 => digit(7),
        Key8 | NumPad8 => digit(8),
        Key9 | NumPad9 => digit(9),
        Space => Some(' '),
        _ => {
            let i = [
                A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T,
                U, V, W, X, Y, Z,
            ]
            .iter()
            .position(|&k| k == key)?;
            let c = char::from(b'a' + i as u8);
            Some(if shift { c.to_ascii_uppercase() } else { c })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_chars() {
        assert_eq!(key_to_char(Key::R, false), Some('r'));
        assert_eq!(key_to_char(Key::R, true), Some('R'));
        assert_eq!(key_to_char(Key::Z, false), Some('z'));
        assert_eq!(key_to_char(Key::Key7, true), Some('7'));
        assert_eq!(key_to_char(Key::NumPad3, false), Some('3'));
        assert_eq!(key_to_char(Key::Space, false), Some(' '));
        assert_eq!(key_to_char(Key::Escape, false), None);
        assert_eq!(key_to_char(Key::F1, false), None);
    }
}
