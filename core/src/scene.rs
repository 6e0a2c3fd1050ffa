//! Animated and static scenes built from shapes and affine transforms.
//!
//! A [`Scene`] is a pure function from time to a list of [draw calls][DrawCall].
//! The frame loop owns the clock in the form of an [`Anim`], which can be
//! paused, resumed, and run backwards.

use alloc::{boxed::Box, vec, vec::Vec};

use crate::geom::{Mesh, circle_fan, rect, rect_centered, triangle};
use crate::math::{
    angle::{degs, rads},
    color::{Color3f, consts::*},
    mat::{rotate_z, rotate2, translate2, translate3},
    vec::vec2,
};
use crate::raster::Ndc;
use crate::render::DrawCall;

/// Number of rim segments of every circle in the scenes.
const SEGMENTS: u32 = 60;

/// Animation clock state.
///
/// Time advances only while the animation is running, and runs backwards
/// while the direction is reversed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anim {
    running: bool,
    direction: f32,
    phase: f32,
}

impl Anim {
    /// Returns a running, forward animation at time zero.
    pub const fn new() -> Self {
        Self { running: true, direction: 1.0, phase: 0.0 }
    }

    /// Returns whether `self` is running.
    pub fn is_running(&self) -> bool {
        self.running
    }
    /// Returns the direction of time, either 1.0 or -1.0.
    pub fn direction(&self) -> f32 {
        self.direction
    }
    /// Returns the current animation time in seconds.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Pauses `self` if running, resumes it otherwise.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }
    /// Flips the direction of time.
    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }

    /// Maps wall-clock seconds since start to scene time, as
    /// `elapsed * direction`.
    ///
    /// Reversing with this mapping makes the scene jump to the mirrored
    /// time; [`tick`][Self::tick] continues smoothly instead.
    pub fn time(&self, elapsed: f32) -> f32 {
        elapsed * self.direction
    }

    /// Advances the clock by `dt` seconds in the current direction.
    ///
    /// Returns the new scene time, or `None` if `self` is paused, in
    /// which case no frame should be drawn.
    ///
    /// # Examples
    /// ```
    /// use rasterlab_core::scene::Anim;
    ///
    /// let mut anim = Anim::new();
    /// assert_eq!(anim.tick(0.5), Some(0.5));
    /// anim.reverse();
    /// assert_eq!(anim.tick(0.25), Some(0.25));
    /// anim.toggle();
    /// assert_eq!(anim.tick(0.25), None);
    /// ```
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if !self.running {
            return None;
        }
        self.phase += dt * self.direction;
        Some(self.phase)
    }

    /// Handles an animation control key: space pauses or resumes, `r`
    /// reverses. Returns whether the key was recognized.
    pub fn on_key(&mut self, key: char) -> bool {
        match key {
            ' ' => self.toggle(),
            'r' | 'R' => self.reverse(),
            _ => return false,
        }
        true
    }
}

impl Default for Anim {
    fn default() -> Self {
        Self::new()
    }
}

/// A picture that is a function of time.
pub trait Scene {
    /// Returns the name of `self`, used to select it and to name output.
    fn name(&self) -> &'static str;

    /// Returns the background color of `self`.
    fn clear_color(&self) -> Color3f {
        BLACK
    }

    /// Returns whether the picture changes with time.
    fn is_animated(&self) -> bool {
        true
    }

    /// Returns the draw calls that render `self` at time `t` seconds,
    /// in back-to-front order.
    fn draw(&self, t: f32) -> Vec<DrawCall>;
}

/// A car driving back and forth.
#[derive(Copy, Clone, Debug, Default)]
pub struct Car;

/// Six petals revolving around a yellow center.
#[derive(Copy, Clone, Debug, Default)]
pub struct Flower;

/// A robot face with a spinning nose.
#[derive(Copy, Clone, Debug, Default)]
pub struct Robot;

/// A square with four triangles arranged around it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Pinwheel;

/// The robot at time zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticRobot;

/// The car at time zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticCar;

impl Scene for Car {
    fn name(&self) -> &'static str {
        "car"
    }

    fn draw(&self, t: f32) -> Vec<DrawCall> {
        let x = rads(0.5 * t).sin() * 0.6;
        let tf = translate2(x, 0.0);

        let body = rect_centered(0.8, 0.4, BLUE);
        let cabin = rect(-0.4, 0.4, 0.8, 0.4, BLUE);
        let wheel_l = circle_fan(SEGMENTS, 0.2, vec2(-0.35, -0.3), WHITE);
        let wheel_r = circle_fan(SEGMENTS, 0.2, vec2(0.35, -0.3), WHITE);
        let window = rect(-0.1, 0.4, 0.5, 0.3, WHITE);

        [body, cabin, wheel_l, wheel_r, window]
            .into_iter()
            .map(|m| DrawCall::with_transform(m, tf))
            .collect()
    }
}

impl Scene for Flower {
    fn name(&self) -> &'static str {
        "flower"
    }

    fn draw(&self, t: f32) -> Vec<DrawCall> {
        const PETALS: u32 = 6;
        let spin = rads(0.8 * t);
        let petal: Mesh = circle_fan(SEGMENTS, 0.3, vec2(0.5, 0.0), MAGENTA);

        let mut calls: Vec<_> = (0..PETALS)
            .map(|i| {
                let a = degs(360.0 * i as f32 / PETALS as f32) + spin;
                DrawCall::with_transform(petal.clone(), rotate2(a))
            })
            .collect();
        calls.push(DrawCall::new(circle_fan(SEGMENTS, 0.3, vec2(0.0, 0.0), YELLOW)));
        calls
    }
}

impl Scene for Robot {
    fn name(&self) -> &'static str {
        "robot"
    }

    fn draw(&self, t: f32) -> Vec<DrawCall> {
        let nose = triangle(
            [vec2(0.0, 0.1), vec2(-0.1, -0.1), vec2(0.1, -0.1)],
            RED,
        );
        vec![
            DrawCall::new(rect_centered(0.65, 0.35, RED)),
            DrawCall::new(rect_centered(0.5, 0.5, GRAY)),
            DrawCall::with_transform(nose, rotate2(rads(2.0 * t))),
            DrawCall::new(circle_fan(SEGMENTS, 0.1, vec2(0.25, 0.15), BLACK)),
            DrawCall::new(circle_fan(SEGMENTS, 0.1, vec2(-0.25, 0.15), BLACK)),
            DrawCall::new(rect(-0.15, -0.4, 0.3, 0.2, WHITE)),
        ]
    }
}

impl Scene for Pinwheel {
    fn name(&self) -> &'static str {
        "pinwheel"
    }
    fn is_animated(&self) -> bool {
        false
    }

    fn draw(&self, _: f32) -> Vec<DrawCall> {
        let square: Mesh = rect_centered(0.5, 0.5, GREEN);
        let blade: Mesh = triangle(
            [vec2(-0.3, -0.3), vec2(0.3, -0.3), vec2(-0.3, 0.3)],
            LIME,
        );

        let mut calls =
            vec![DrawCall::new(square.transform(&rotate_z::<Ndc>(degs(45.0))))];
        calls.extend((0..4).map(|i| {
            let m = translate3(0.0, 0.7, 0.0)
                .then(&rotate_z::<Ndc>(degs(90.0 * i as f32)));
            DrawCall::new(blade.transform(&m))
        }));
        calls
    }
}

impl Scene for StaticRobot {
    fn name(&self) -> &'static str {
        "static-robot"
    }
    fn is_animated(&self) -> bool {
        false
    }
    fn draw(&self, _: f32) -> Vec<DrawCall> {
        Robot.draw(0.0)
    }
}

impl Scene for StaticCar {
    fn name(&self) -> &'static str {
        "static-car"
    }
    fn is_animated(&self) -> bool {
        false
    }
    fn draw(&self, _: f32) -> Vec<DrawCall> {
        Car.draw(0.0)
    }
}

/// Returns every scene, animated ones first.
pub fn all_scenes() -> Vec<Box<dyn Scene>> {
    vec![
        Box::new(Car),
        Box::new(Flower),
        Box::new(Robot),
        Box::new(Pinwheel),
        Box::new(StaticRobot),
        Box::new(StaticCar),
    ]
}

/// Returns the scene named `name`, if any.
///
/// # Examples
/// ```
/// use rasterlab_core::scene::by_name;
///
/// assert_eq!(by_name("flower").map(|s| s.name()), Some("flower"));
/// assert!(by_name("teapot").is_none());
/// ```
pub fn by_name(name: &str) -> Option<Box<dyn Scene>> {
    all_scenes().into_iter().find(|s| s.name() == name)
}
