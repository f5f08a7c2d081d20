// Host-side tests for pointer and touch steering.

use glam::Vec2;
use starfield_core::*;

fn engine_at_scale(dpr: f32) -> Starfield {
    Starfield::new(
        StarfieldConfig::default(),
        Viewport::new(800.0, 600.0, Some(dpr)),
        11,
    )
    .unwrap()
}

#[test]
fn first_sample_only_sets_baseline() {
    let mut engine = engine_at_scale(1.0);
    engine.pointer_moved(400.0, 300.0, PointerKind::Mouse);
    assert_eq!(engine.velocity().target, Vec2::ZERO);
    assert_eq!(engine.pointer().last(), Some(Vec2::new(400.0, 300.0)));
}

#[test]
fn mouse_steers_against_motion() {
    let mut engine = engine_at_scale(1.0);
    engine.pointer_moved(400.0, 300.0, PointerKind::Mouse);
    engine.pointer_moved(450.0, 300.0, PointerKind::Mouse);
    assert_eq!(engine.velocity().target.x, -6.25);
    assert_eq!(engine.velocity().target.y, 0.0);
}

#[test]
fn touch_steers_with_motion() {
    let mut engine = engine_at_scale(1.0);
    engine.pointer_moved(100.0, 100.0, PointerKind::Touch);
    engine.pointer_moved(100.0, 140.0, PointerKind::Touch);
    assert_eq!(engine.velocity().target.x, 0.0);
    assert_eq!(engine.velocity().target.y, 5.0);
}

#[test]
fn impulse_scales_with_device_pixel_ratio() {
    let mut engine = engine_at_scale(2.0);
    engine.pointer_moved(400.0, 300.0, PointerKind::Mouse);
    engine.pointer_moved(450.0, 300.0, PointerKind::Mouse);
    assert_eq!(engine.velocity().target.x, -12.5);
}

#[test]
fn impulses_accumulate() {
    let mut engine = engine_at_scale(1.0);
    for x in [0.0, 8.0, 16.0, 24.0] {
        engine.pointer_moved(x, 0.0, PointerKind::Mouse);
    }
    assert_eq!(engine.velocity().target.x, -3.0);
}

#[test]
fn release_drops_stale_baseline() {
    let mut engine = engine_at_scale(1.0);
    engine.pointer_moved(10.0, 10.0, PointerKind::Mouse);
    engine.pointer_released();
    assert_eq!(engine.pointer().last(), None);
    engine.pointer_moved(700.0, 500.0, PointerKind::Mouse);
    assert_eq!(engine.velocity().target, Vec2::ZERO);
}

#[test]
fn tracker_reports_no_impulse_without_baseline() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.track(Vec2::new(1.0, 1.0), PointerKind::Touch, 1.0, 8.0), None);
    assert_eq!(
        tracker.track(Vec2::new(9.0, 17.0), PointerKind::Touch, 1.0, 8.0),
        Some(Vec2::new(1.0, 2.0))
    );
}
