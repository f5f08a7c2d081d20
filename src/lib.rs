#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use starfield_core::{FrameLoop, Starfield};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overrides;

use frame::{FrameStats, Mounted, RafScheduler, TickSlot};

/// A mounted, animating starfield. Unmounting (or freeing the handle from JS)
/// cancels the pending frame and removes every listener.
#[wasm_bindgen]
pub struct StarfieldHandle {
    state: Rc<RefCell<Mounted>>,
    tick: TickSlot,
    listeners: events::Listeners,
}

#[wasm_bindgen]
impl StarfieldHandle {
    pub fn unmount(&mut self) {
        self.stop();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().frame_loop.is_running()
    }

    pub fn star_count(&self) -> usize {
        self.state.borrow().engine.star_count()
    }

    pub fn frames(&self) -> f64 {
        self.state.borrow().frame_loop.frames() as f64
    }
}

impl StarfieldHandle {
    fn stop(&mut self) {
        let was_running = {
            let mut m = self.state.borrow_mut();
            let running = m.frame_loop.is_running();
            m.stop();
            running
        };
        self.listeners.detach_all();
        self.tick.borrow_mut().take();
        if was_running {
            log::info!("[mount] starfield stopped");
        }
    }
}

impl Drop for StarfieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web ready");
    Ok(())
}

/// Mount on the canvas with id `canvas_id` (default `starfield`).
/// Returns `None`, leaving the page blank, when there is nothing to draw on.
#[wasm_bindgen]
pub fn mount(canvas_id: Option<String>) -> Option<StarfieldHandle> {
    let id = canvas_id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
    let found = dom::window_document()
        .context("no window/document")
        .and_then(|(_, document)| dom::canvas_by_id(&document, &id));
    match found {
        Ok(canvas) => mount_canvas(canvas),
        Err(e) => {
            log::warn!("[mount] starfield inert: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen]
pub fn mount_canvas(canvas: web::HtmlCanvasElement) -> Option<StarfieldHandle> {
    match try_mount(canvas) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("[mount] starfield inert: {:?}", e);
            None
        }
    }
}

fn try_mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<StarfieldHandle> {
    let (window, document) = dom::window_document().context("no window/document")?;
    let ctx = dom::context_2d(&canvas)?;

    let options = overrides::options_from_attributes(dom::dataset_lookup(&canvas));
    let viewport = dom::read_viewport(&window);
    let engine = match options.seed {
        Some(seed) => Starfield::new(options.config, viewport, seed),
        None => Starfield::from_entropy(options.config, viewport),
    }?;
    dom::apply_backing_size(&canvas, engine.surface());

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let state = Rc::new(RefCell::new(Mounted {
        engine,
        surface: canvas::CanvasSurface::new(ctx),
        canvas: canvas.clone(),
        window: window.clone(),
        frame_loop: FrameLoop::new(),
        scheduler: RafScheduler::new(window.clone(), tick.clone()),
        stats: FrameStats::new(),
    }));
    frame::install_tick(&state, &tick);
    let listeners = events::wire_listeners(&window, &document, &canvas, &state)?;

    let handle = StarfieldHandle {
        state,
        tick,
        listeners,
    };
    {
        let mut m = handle.state.borrow_mut();
        if !m.start() {
            log::warn!("[mount] first frame could not be scheduled");
        }
        let surface = m.engine.surface();
        log::info!(
            "[mount] stars={} surface={}x{} scale={}",
            m.engine.star_count(),
            surface.width,
            surface.height,
            surface.scale
        );
    }
    Ok(handle)
}
