use glam::Vec2;

/// Camera drift. `current` chases `target`; `warp` is the constant forward speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub current: Vec2,
    pub target: Vec2,
    pub warp: f32,
}

impl Velocity {
    pub fn new(warp: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            warp,
        }
    }

    /// Per-frame update: decay the target, then move `current` a fixed fraction toward it.
    /// Both factors are per callback, not per second.
    #[inline]
    pub fn advance(&mut self, decay: f32, smoothing: f32) {
        self.target *= decay;
        self.current += (self.target - self.current) * smoothing;
    }

    #[inline]
    pub fn push_target(&mut self, impulse: Vec2) {
        self.target += impulse;
    }
}
