//! Browser entry points. Each one appends a canvas to the page and runs
//! one exercise on it.

use core::ops::ControlFlow::Continue;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use rl::interact::{CircleTool, Event, Rasterizer, Tool};
use rl::render::DrawState;
use rl::scene::{Anim, by_name};

use rl_front::wasm::{Window, init_logging};

fn setup() {
    console_error_panic_hook::set_once();
    init_logging(LevelFilter::Info);
}

/// Runs the scene called `name`, with the space and `r` keys controlling
/// the animation.
#[wasm_bindgen]
pub fn run_scene(name: &str) -> Result<(), JsValue> {
    setup();
    let scene = by_name(name).ok_or_else(|| format!("no scene {name:?}"))?;
    let win = Window::builder()
        .clear_color(scene.clear_color())
        .build()?;

    let state = DrawState {
        clear_color: scene.clear_color(),
        ..DrawState::default()
    };
    let mut anim = Anim::new();
    win.run(move |frame| {
        for &e in frame.events {
            if let Event::Key(k) = e {
                anim.on_key(k);
            }
        }
        let t = if scene.is_animated() {
            anim.tick(frame.dt_secs())
        } else {
            Some(0.0)
        };
        if let Some(t) = t {
            frame.draw(&scene.draw(t), &state);
        }
        Continue(())
    });
    Ok(())
}

/// Runs the interactive line and triangle rasterizer.
#[wasm_bindgen]
pub fn run_lines() -> Result<(), JsValue> {
    run_tool(Rasterizer::new())
}

/// Runs the click-to-draw circle tool.
#[wasm_bindgen]
pub fn run_circles() -> Result<(), JsValue> {
    run_tool(CircleTool::new())
}

fn run_tool(mut tool: impl Tool + 'static) -> Result<(), JsValue> {
    setup();
    let win = Window::builder().build()?;
    win.run(move |frame| {
        frame.apply_tool(&mut tool);
        Continue(())
    });
    Ok(())
}
