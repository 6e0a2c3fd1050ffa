//! Mouse and keyboard driven drawing tools.
//!
//! A tool consumes input [events][Event] and, whenever the picture
//! changes, returns the new picture as an [`Output`]. Each output replaces
//! the previous one entirely.

use alloc::vec::Vec;

use crate::geom::{Mesh, points};
use crate::math::{
    color::palette,
    mat::Mat3,
    vec::{Vec2i, vec2},
};
use crate::raster::{Viewport, circle, line, tri_outline};
use crate::render::{Canvas, DrawState, Stats};

/// Radius in pixels of the circles drawn by [`CircleTool`].
pub const CIRCLE_RADIUS: u32 = 30;

/// What the next clicks of a [`Rasterizer`] will draw.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Clicks are ignored.
    #[default]
    Idle,
    /// Every two clicks draw a line.
    Line,
    /// Every three clicks draw a triangle outline.
    Triangle,
    /// The next digit key sets the point size.
    Thickness,
}

/// An input event, in pixel coordinates with y pointing down.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A mouse button was pressed at the given pixel.
    Click(Vec2i),
    /// A key producing the given character was pressed.
    Key(char),
}

/// A picture made of pixel points, all drawn with the same style.
#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    pub pixels: Vec<Vec2i>,
    pub state: DrawState,
}

/// An interactive drawing tool.
pub trait Tool {
    /// Handles `event`, returning the new picture if it changed.
    fn handle(&mut self, event: Event) -> Option<Output>;
}

/// The interactive line and triangle rasterizer.
///
/// | input              | effect                                       |
/// |--------------------|----------------------------------------------|
/// | `r`, `R`           | line mode                                    |
/// | `t`, `T`           | triangle mode                                |
/// | `e`, `E`, `k`, `K` | thickness mode                               |
/// | `1`–`9`            | point size in thickness mode, else a color   |
/// | click              | collects a vertex in line or triangle mode   |
#[derive(Clone, Debug, Default)]
pub struct Rasterizer {
    mode: Mode,
    state: DrawState,
    clicks: Vec<Vec2i>,
    picture: Vec<Vec2i>,
}

/// Draws a midpoint circle around each click.
#[derive(Clone, Debug, Default)]
pub struct CircleTool {
    state: DrawState,
    picture: Vec<Vec2i>,
}

impl Output {
    /// Returns the pixels of `self` as a point mesh in normalized device
    /// coordinates, one point at the center of each pixel.
    pub fn to_mesh(&self, vp: &Viewport) -> Mesh {
        let half_px = vec2(1.0 / vp.width as f32, -1.0 / vp.height as f32);
        points(
            self.pixels.iter().map(|&p| vp.to_ndc(p) + half_px),
            self.state.color,
        )
    }

    /// Clears `canvas` and draws `self` on it.
    pub fn draw(&self, canvas: &mut Canvas) -> Stats {
        canvas.clear(self.state.clear_color);
        let mesh = self.to_mesh(canvas.viewport());
        canvas.draw_mesh(&mesh, &Mat3::identity(), &self.state)
    }
}

impl Rasterizer {
    /// Returns a new rasterizer in idle mode with the default draw state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }
    /// Returns the current draw state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }
    /// Returns the clicks collected towards the next primitive.
    pub fn pending(&self) -> &[Vec2i] {
        &self.clicks
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.clicks.clear();
    }

    fn output(&self) -> Output {
        Output {
            pixels: self.picture.clone(),
            state: self.state,
        }
    }

    fn on_key(&mut self, key: char) -> Option<Output> {
        match key {
            'r' | 'R' => self.set_mode(Mode::Line),
            't' | 'T' => self.set_mode(Mode::Triangle),
            'e' | 'E' | 'k' | 'K' => self.set_mode(Mode::Thickness),
            '1'..='9' if self.mode == Mode::Thickness => {
                let size = key.to_digit(10)?;
                self.state = self.state.with_point_size(size);
                self.set_mode(Mode::Idle);
                return Some(self.output());
            }
            _ => {
                self.state.color = palette(key)?;
                return Some(self.output());
            }
        }
        None
    }

    fn on_click(&mut self, pos: Vec2i) -> Option<Output> {
        let needed = match self.mode {
            Mode::Line => 2,
            Mode::Triangle => 3,
            Mode::Idle | Mode::Thickness => return None,
        };
        self.clicks.push(pos);
        if self.clicks.len() < needed {
            return None;
        }
        self.picture = match *self.clicks.as_slice() {
            [a, b] => line(a, b),
            [a, b, c] => tri_outline(a, b, c),
            _ => return None,
        };
        self.clicks.clear();
        Some(self.output())
    }
}

impl Tool for Rasterizer {
    fn handle(&mut self, event: Event) -> Option<Output> {
        match event {
            Event::Key(k) => self.on_key(k),
            Event::Click(p) => self.on_click(p),
        }
    }
}

impl CircleTool {
    /// Returns a new circle tool with the default draw state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draw state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }
}

impl Tool for CircleTool {
    fn handle(&mut self, event: Event) -> Option<Output> {
        match event {
            Event::Click(p) => self.picture = circle(p, CIRCLE_RADIUS),
            Event::Key(k) => self.state.color = palette(k)?,
        }
        Some(Output {
            pixels: self.picture.clone(),
            state: self.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::math::{color::consts::*, vec::vec2i};

    use super::*;

    fn click(x: i32, y: i32) -> Event {
        Event::Click(vec2i(x, y))
    }

    #[test]
    fn clicks_ignored_when_idle() {
        let mut r = Rasterizer::new();
        assert_eq!(r.mode(), Mode::Idle);
        assert_eq!(r.handle(click(1, 1)), None);
        assert!(r.pending().is_empty());
    }

    #[test]
    fn second_click_draws_line() {
        let mut r = Rasterizer::new();
        assert_eq!(r.handle(Event::Key('r')), None);
        assert_eq!(r.mode(), Mode::Line);

        assert_eq!(r.handle(click(0, 0)), None);
        assert_eq!(r.pending(), &[vec2i(0, 0)]);

        let out = r.handle(click(3, 0)).expect("line drawn");
        assert_eq!(
            out.pixels,
            vec![vec2i(0, 0), vec2i(1, 0), vec2i(2, 0), vec2i(3, 0)]
        );
        assert_eq!(out.state.color, BLUE);
        assert!(r.pending().is_empty());
    }

    #[test]
    fn third_click_draws_triangle() {
        let mut r = Rasterizer::new();
        r.handle(Event::Key('T'));
        assert_eq!(r.handle(click(0, 0)), None);
        assert_eq!(r.handle(click(4, 0)), None);
        let out = r.handle(click(0, 4)).expect("triangle drawn");

        for v in [vec2i(0, 0), vec2i(4, 0), vec2i(0, 4)] {
            assert!(out.pixels.contains(&v));
        }
        assert!(out.pixels.contains(&vec2i(2, 2)));
        assert!(r.pending().is_empty());
    }

    #[test]
    fn mode_switch_discards_clicks() {
        let mut r = Rasterizer::new();
        r.handle(Event::Key('t'));
        r.handle(click(0, 0));
        r.handle(click(5, 5));
        r.handle(Event::Key('r'));
        assert!(r.pending().is_empty());
        assert_eq!(r.handle(click(1, 1)), None);
    }

    #[test]
    fn thickness_mode_sets_point_size() {
        let mut r = Rasterizer::new();
        r.handle(Event::Key('k'));
        assert_eq!(r.mode(), Mode::Thickness);
        assert_eq!(r.handle(click(1, 1)), None);

        let out = r.handle(Event::Key('8')).expect("redrawn");
        assert_eq!(out.state.point_size, 8);
        assert_eq!(out.state.color, BLUE);
        assert_eq!(r.mode(), Mode::Idle);

        // Back in idle mode, digits pick colors again
        let out = r.handle(Event::Key('2')).expect("redrawn");
        assert_eq!(out.state.color, GREEN);
        assert_eq!(out.state.point_size, 8);
    }

    #[test]
    fn color_keys_keep_picture() {
        let mut r = Rasterizer::new();
        r.handle(Event::Key('r'));
        r.handle(click(0, 0));
        let drawn = r.handle(click(0, 2)).expect("line drawn");

        let recolored = r.handle(Event::Key('1')).expect("redrawn");
        assert_eq!(recolored.pixels, drawn.pixels);
        assert_eq!(recolored.state.color, RED);
        assert_eq!(r.mode(), Mode::Line);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut r = Rasterizer::new();
        let before = *r.state();
        assert_eq!(r.handle(Event::Key('0')), None);
        assert_eq!(r.handle(Event::Key('x')), None);
        assert_eq!(*r.state(), before);

        r.handle(Event::Key('e'));
        assert_eq!(r.handle(Event::Key('x')), None);
        assert_eq!(r.mode(), Mode::Thickness);
    }

    #[test]
    fn circle_tool_draws_at_click() {
        let mut t = CircleTool::new();
        let out = t.handle(click(50, 60)).expect("circle drawn");
        assert!(out.pixels.contains(&vec2i(80, 60)));
        assert!(out.pixels.contains(&vec2i(50, 30)));
        assert!(!out.pixels.contains(&vec2i(50, 60)));

        let out = t.handle(Event::Key('6')).expect("redrawn");
        assert_eq!(out.state.color, MAGENTA);
        assert!(out.pixels.contains(&vec2i(20, 60)));
        assert_eq!(t.handle(Event::Key('q')), None);
    }

    #[test]
    fn output_mesh_hits_pixel_centers() {
        let vp = Viewport::new((500, 500));
        let out = Output {
            pixels: vec![vec2i(0, 0), vec2i(250, 499)],
            state: DrawState::default(),
        };
        let mesh = out.to_mesh(&vp);
        let p = vp.to_pixel(mesh.verts[0].pos);
        assert!((p.x() - 0.5).abs() < 1e-3 && (p.y() - 0.5).abs() < 1e-3);
        let p = vp.to_pixel(mesh.verts[1].pos);
        assert!((p.x() - 250.5).abs() < 1e-3 && (p.y() - 499.5).abs() < 1e-3);
    }

    #[test]
    fn output_draws_points() {
        let mut canvas = Canvas::new((20, 20));
        let out = Output {
            pixels: vec![vec2i(5, 5), vec2i(15, 15)],
            state: DrawState::default().with_point_size(3),
        };
        let stats = out.draw(&mut canvas);
        assert_eq!(stats.pixels, 18);
        assert_eq!(canvas.get(vec2i(4, 4)), Some(BLUE.to_color3()));
        assert_eq!(canvas.get(vec2i(10, 10)), Some(WHITE.to_color3()));
    }
}
