// Default tuning for the starfield. `StarfieldConfig::default()` is built from these.

// Stars
pub const STAR_SIZE: f32 = 3.0; // line width of a depth-1 star at scale 1
pub const STAR_MIN_SCALE: f32 = 0.2; // smallest depth a fresh star can get
pub const STAR_COLOR: &str = "#fff";
pub const STAR_DENSITY_DIVISOR: f32 = 8.0; // N = (css width + css height) / divisor

// Motion
pub const WARP_SPEED: f32 = 0.0005; // depth gained per frame
pub const TARGET_DECAY: f32 = 0.96; // per-frame multiplier on the target velocity
pub const VELOCITY_SMOOTHING: f32 = 0.8; // per-frame approach of velocity to target
pub const POINTER_DIVISOR: f32 = 8.0; // pointer delta (css px) per unit of target velocity

// Recycling
pub const OVERFLOW_THRESHOLD: f32 = 50.0; // pixels past the edge before a star is recycled
pub const DEPTH_RESET_Z: f32 = 0.1;
pub const EDGE_RECYCLE_MIN_SPEED: f32 = 1.0; // at or below this on both axes, stars re-enter by depth

// Streaks
pub const TAIL_LENGTH: f32 = 2.0; // tail = velocity * TAIL_LENGTH
pub const TAIL_MIN_ABS: f32 = 0.1;
pub const TAIL_FALLBACK: f32 = 0.5;
pub const ALPHA_MIN: f32 = 0.5; // twinkle alpha is drawn from [ALPHA_MIN, 1)
