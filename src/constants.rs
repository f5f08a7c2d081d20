// Web-side constants: DOM wiring, logging cadence and data-attribute names.
// Physics and drawing tuning lives in `starfield_core::constants`.

// Canvas looked up by `mount()` when no id is given
pub const DEFAULT_CANVAS_ID: &str = "starfield";

// Debug frame statistics are logged once per this many frames
pub const FPS_LOG_INTERVAL_FRAMES: u64 = 600;

// `data-*` overrides on the canvas element, in `dataset` (camelCase) form
pub const DATA_STAR_COLOR: &str = "starColor"; // data-star-color
pub const DATA_STAR_SIZE: &str = "starSize"; // data-star-size
pub const DATA_WARP_SPEED: &str = "warpSpeed"; // data-warp-speed
pub const DATA_SEED: &str = "seed"; // data-seed

// Host events
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_MOUSE_MOVE: &str = "mousemove";
pub const EVENT_MOUSE_LEAVE: &str = "mouseleave";
pub const EVENT_TOUCH_MOVE: &str = "touchmove";
pub const EVENT_TOUCH_END: &str = "touchend";
pub const EVENT_TOUCH_CANCEL: &str = "touchcancel";
