//! Tunable parameters of a starfield instance.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub star_size: f32,
    pub min_scale: f32,
    pub star_color: String,
    pub density_divisor: f32,
    pub warp_speed: f32,
    pub target_decay: f32,
    pub smoothing: f32,
    pub pointer_divisor: f32,
    pub overflow: f32,
    pub depth_reset_z: f32,
    pub edge_recycle_min_speed: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_size: STAR_SIZE,
            min_scale: STAR_MIN_SCALE,
            star_color: STAR_COLOR.to_string(),
            density_divisor: STAR_DENSITY_DIVISOR,
            warp_speed: WARP_SPEED,
            target_decay: TARGET_DECAY,
            smoothing: VELOCITY_SMOOTHING,
            pointer_divisor: POINTER_DIVISOR,
            overflow: OVERFLOW_THRESHOLD,
            depth_reset_z: DEPTH_RESET_Z,
            edge_recycle_min_speed: EDGE_RECYCLE_MIN_SPEED,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("star_size", self.star_size),
            ("density_divisor", self.density_divisor),
            ("warp_speed", self.warp_speed),
            ("pointer_divisor", self.pointer_divisor),
            ("overflow", self.overflow),
            ("depth_reset_z", self.depth_reset_z),
            ("edge_recycle_min_speed", self.edge_recycle_min_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [("target_decay", self.target_decay), ("smoothing", self.smoothing)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FactorOutOfRange { field, value });
            }
        }
        if !(self.min_scale > 0.0 && self.min_scale < 1.0) {
            return Err(ConfigError::MinScaleOutOfRange(self.min_scale));
        }
        if self.star_color.trim().is_empty() {
            return Err(ConfigError::EmptyColor);
        }
        Ok(())
    }

    /// Pool size for a viewport given in CSS pixels, fixed for the life of an instance.
    pub fn star_count(&self, css_width: f32, css_height: f32) -> usize {
        let n = ((css_width + css_height) / self.density_divisor).round();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }
}
