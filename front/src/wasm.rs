//! Frontend using WebAssembly to render to a canvas element.

use std::cell::RefCell;
use std::ops::ControlFlow::{self, Continue};
use std::rc::Rc;
use std::time::Duration;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{Clamped, prelude::*};
use web_sys::{
    CanvasRenderingContext2d as Context2d, Document, HtmlCanvasElement,
    ImageData, KeyboardEvent, MouseEvent,
};

use rasterlab_core::interact::Event;
use rasterlab_core::math::{color::Color3f, color::consts::WHITE, vec::vec2i};
use rasterlab_core::render::{Canvas, Stats};
use rasterlab_core::util::{CANVAS_500, Dims};

use crate::Frame;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(msg: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(msg: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(msg: &str);

    #[wasm_bindgen]
    fn requestAnimationFrame(cb: &Closure<dyn FnMut(f32)>);
}

/// A `log` backend writing to the browser console.
struct ConsoleLog;

static CONSOLE_LOG: ConsoleLog = ConsoleLog;

impl Log for ConsoleLog {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }
    fn log(&self, rec: &Record) {
        let msg = format!("[{}] {}", rec.target(), rec.args());
        match rec.level() {
            Level::Error => console_error(&msg),
            Level::Warn => console_warn(&msg),
            _ => console_log(&msg),
        }
    }
    fn flush(&self) {}
}

/// Routes `log` output at `level` and above to the browser console.
///
/// Does nothing if a logger is already installed.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&CONSOLE_LOG).is_ok() {
        log::set_max_level(level);
    }
}

/// A canvas element on the page, plus the input events received on it.
#[derive(Debug)]
pub struct Window {
    pub dims: Dims,
    pub ctx2d: Context2d,
    pub clear_color: Color3f,
    events: Rc<RefCell<Vec<Event>>>,
}

#[derive(Debug)]
pub struct Builder {
    dims: Dims,
    clear_color: Color3f,
}

impl Builder {
    pub fn dims(self, dims: Dims) -> Self {
        Self { dims, ..self }
    }
    pub fn clear_color(self, clear_color: Color3f) -> Self {
        Self { clear_color, ..self }
    }
    pub fn build(self) -> Result<Window, &'static str> {
        let mut win = Window::new(self.dims)?;
        win.clear_color = self.clear_color;
        Ok(win)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self { dims: CANVAS_500, clear_color: WHITE }
    }
}

impl Window {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Appends a new canvas of size `dims` to the document body and starts
    /// listening to its mouse and the document's keyboard events.
    pub fn new(dims: Dims) -> Result<Self, &'static str> {
        log::info!("starting wasm app...");

        let doc = Self::document().ok_or("document object not found")?;
        let body = doc.body().ok_or("body element not found")?;

        let cvs = Self::create_canvas(dims).ok_or("could not create canvas")?;
        body.append_child(&cvs)
            .map_err(|_| "could not append canvas")?;

        let ctx2d = Self::context2d(&cvs).ok_or("could not get context")?;
        let events = Rc::default();
        Self::listen(&doc, &cvs, &events)?;

        log::debug!("created {}x{} canvas", dims.0, dims.1);
        Ok(Self { dims, ctx2d, clear_color: WHITE, events })
    }

    /// Runs the main loop on `requestAnimationFrame`, invoking the callback
    /// once per animation frame until it returns `ControlFlow::Break`.
    pub fn run<F>(mut self, mut frame_fn: F)
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()> + 'static,
    {
        let mut canvas = Canvas::new(self.dims);
        canvas.clear(self.clear_color);
        let mut stats = Stats::new();
        let mut t_last = Duration::default();

        let outer: Rc<RefCell<Option<Closure<dyn FnMut(f32)>>>> =
            Rc::default();
        let inner = outer.clone();
        outer.borrow_mut().replace(Closure::new(move |ms: f32| {
            let t = Duration::from_secs_f32(ms / 1e3);
            let events: Vec<_> = self.events.borrow_mut().drain(..).collect();
            let mut frame = Frame {
                t,
                dt: t.saturating_sub(t_last),
                canvas: &mut canvas,
                win: &mut self,
                events: &events,
                stats: &mut stats,
            };

            if let Continue(_) = frame_fn(&mut frame) {
                if let Some(cb) = inner.borrow().as_ref() {
                    requestAnimationFrame(cb);
                }
            } else {
                log::info!("\n{stats}");
                let _ = inner.borrow_mut().take();
            }

            if let Err(e) = self.put_image_data(canvas.pixels()) {
                log::error!("{e}");
            }
            t_last = t;
        }));
        if let Some(cb) = outer.borrow().as_ref() {
            requestAnimationFrame(cb);
        }
    }

    pub fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn create_canvas(dims: Dims) -> Option<HtmlCanvasElement> {
        Self::document()?
            .create_element("canvas")
            .ok()?
            .dyn_into()
            .map(|cvs: HtmlCanvasElement| {
                cvs.set_width(dims.0);
                cvs.set_height(dims.1);
                cvs
            })
            .ok()
    }

    fn context2d(cvs: &HtmlCanvasElement) -> Option<Context2d> {
        cvs.get_context("2d")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()
    }

    /// Queues `mousedown` events on `cvs` and single-character `keydown`
    /// events on `doc`.
    fn listen(
        doc: &Document,
        cvs: &HtmlCanvasElement,
        events: &Rc<RefCell<Vec<Event>>>,
    ) -> Result<(), &'static str> {
        let queue = events.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let pos = vec2i(e.offset_x(), e.offset_y());
            queue.borrow_mut().push(Event::Click(pos));
        });
        cvs.add_event_listener_with_callback(
            "mousedown",
            on_click.as_ref().unchecked_ref(),
        )
        .map_err(|_| "could not listen to mouse events")?;
        // The listener lives as long as the page
        on_click.forget();

        let queue = events.clone();
        let on_key =
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                let key = e.key();
                let mut cs = key.chars();
                if let (Some(c), None) = (cs.next(), cs.next()) {
                    queue.borrow_mut().push(Event::Key(c));
                }
            });
        doc.add_event_listener_with_callback(
            "keydown",
            on_key.as_ref().unchecked_ref(),
        )
        .map_err(|_| "could not listen to keyboard events")?;
        on_key.forget();
        Ok(())
    }

    /// Copies `data`, in `0xAA_RR_GG_BB` format, to the canvas element.
    fn put_image_data(&self, data: &[u32]) -> Result<(), &'static str> {
        let rgba: Vec<u8> = data
            .iter()
            .flat_map(|px| {
                let [_, r, g, b] = px.to_be_bytes();
                [r, g, b, 0xFF]
            })
            .collect();
        let img =
            ImageData::new_with_u8_clamped_array(Clamped(rgba.as_slice()), self.dims.0)
                .map_err(|_| "could not create image data from color buf")?;

        self.ctx2d
            .put_image_data(&img, 0.0, 0.0)
            .map_err(|_| "failed blitting image data to canvas")
    }
}
