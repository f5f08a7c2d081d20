//! Pointer and touch motion -> target velocity impulses.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// Mouse steers away from the motion, touch drags along with it.
    #[inline]
    pub fn steering_sign(self) -> f32 {
        match self {
            PointerKind::Mouse => -1.0,
            PointerKind::Touch => 1.0,
        }
    }
}

/// Last motion sample; `None` while the pointer is away.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    /// Record a sample at client position `pos` and return the impulse for the
    /// target velocity, or `None` when this sample only sets the baseline.
    pub fn track(&mut self, pos: Vec2, kind: PointerKind, scale: f32, divisor: f32) -> Option<Vec2> {
        let impulse = self
            .last
            .map(|last| (pos - last) / divisor * scale * kind.steering_sign());
        self.last = Some(pos);
        impulse
    }

    /// Forget the baseline so the next sample does not jump from a stale position.
    #[inline]
    pub fn release(&mut self) {
        self.last = None;
    }

    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.last
    }
}
