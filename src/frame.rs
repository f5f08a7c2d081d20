use crate::canvas::CanvasSurface;
use crate::constants::FPS_LOG_INTERVAL_FRAMES;
use crate::dom;
use instant::Instant;
use starfield_core::{FrameLoop, FrameScheduler, Starfield};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The frame callback slot shared by the scheduler and the mount handle.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the core's scheduler trait.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<i32> {
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("[frame] requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

#[derive(Debug)]
pub struct FrameStats {
    window_start: Instant,
    frames: u64,
    recycled: usize,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            recycled: 0,
        }
    }

    pub fn record(&mut self, recycled: usize, star_count: usize) {
        self.frames += 1;
        self.recycled += recycled;
        if self.frames < FPS_LOG_INTERVAL_FRAMES {
            return;
        }
        let secs = self.window_start.elapsed().as_secs_f32().max(1e-3);
        log::debug!(
            "[frame] fps={:.1} stars={} recycled={}",
            self.frames as f32 / secs,
            star_count,
            self.recycled
        );
        *self = Self::new();
    }
}

/// Everything one mounted starfield owns in the browser.
pub struct Mounted {
    pub engine: Starfield,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub window: web::Window,
    pub frame_loop: FrameLoop,
    pub scheduler: RafScheduler,
    pub stats: FrameStats,
}

impl Mounted {
    /// Render the initial state and request the first frame.
    pub fn start(&mut self) -> bool {
        let Mounted {
            engine,
            surface,
            frame_loop,
            scheduler,
            ..
        } = self;
        engine.render(surface);
        frame_loop.start(scheduler)
    }

    /// One `requestAnimationFrame` delivery.
    pub fn tick(&mut self) {
        let Mounted {
            engine,
            surface,
            frame_loop,
            scheduler,
            stats,
            ..
        } = self;
        frame_loop.run_frame(scheduler, || {
            let recycled = engine.frame(surface);
            stats.record(recycled, engine.star_count());
        });
    }

    pub fn stop(&mut self) {
        let Mounted {
            frame_loop,
            scheduler,
            ..
        } = self;
        frame_loop.stop(scheduler);
    }

    pub fn resize(&mut self) {
        if self.frame_loop.is_stopped() {
            return;
        }
        let viewport = dom::read_viewport(&self.window);
        let surface = self.engine.resize(viewport);
        dom::apply_backing_size(&self.canvas, &surface);
        log::debug!(
            "[resize] {}x{} scale={}",
            surface.width,
            surface.height,
            surface.scale
        );
    }
}

/// Fill the tick slot with the frame callback. It holds only a weak
/// reference, so frames delivered after the mount is gone do nothing.
pub fn install_tick(state: &Rc<RefCell<Mounted>>, tick: &TickSlot) {
    let weak: Weak<RefCell<Mounted>> = Rc::downgrade(state);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().tick();
        }
    }) as Box<dyn FnMut()>));
}
