// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use starfield_core::constants as engine;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_are_per_frame_fractions() {
    assert!(engine::TARGET_DECAY > 0.0 && engine::TARGET_DECAY < 1.0);
    assert!(engine::VELOCITY_SMOOTHING > 0.0 && engine::VELOCITY_SMOOTHING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_constants_are_ordered() {
    assert!(engine::STAR_MIN_SCALE > 0.0 && engine::STAR_MIN_SCALE < 1.0);
    // depth-reset stars start smaller than any freshly drawn star
    assert!(engine::DEPTH_RESET_Z < engine::STAR_MIN_SCALE);
    assert!(engine::WARP_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn streak_constants_are_sane() {
    assert!(engine::TAIL_FALLBACK > engine::TAIL_MIN_ABS);
    assert!(engine::ALPHA_MIN >= 0.0 && engine::ALPHA_MIN < 1.0);
    assert!(engine::OVERFLOW_THRESHOLD > 0.0);
}

#[test]
fn dataset_keys_are_camel_case() {
    for key in [DATA_STAR_COLOR, DATA_STAR_SIZE, DATA_WARP_SPEED, DATA_SEED] {
        assert!(!key.contains('-'), "{key} should be in dataset form");
    }
    assert!(!DEFAULT_CANVAS_ID.is_empty());
    assert!(FPS_LOG_INTERVAL_FRAMES > 0);
}
