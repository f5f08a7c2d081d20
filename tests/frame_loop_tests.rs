// Host-side tests for the loop driver, single-stepped through a manual scheduler.

mod common;

use common::{ManualScheduler, RecordingSurface};
use starfield_core::*;

#[test]
fn start_requests_one_frame() {
    let mut sched = ManualScheduler::default();
    let mut lp = FrameLoop::new();
    assert!(lp.start(&mut sched));
    assert_eq!(sched.requested, vec![1]);
    assert_eq!(lp.pending(), Some(1));
    assert!(lp.is_running());
    // a second start is a no-op
    assert!(!lp.start(&mut sched));
    assert_eq!(sched.requested.len(), 1);
}

#[test]
fn each_frame_reschedules_itself() {
    let mut sched = ManualScheduler::default();
    let mut lp = FrameLoop::new();
    lp.start(&mut sched);
    let mut ran = 0;
    for _ in 0..5 {
        assert!(lp.run_frame(&mut sched, || ran += 1));
    }
    assert_eq!(ran, 5);
    assert_eq!(lp.frames(), 5);
    assert_eq!(sched.requested, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(lp.pending(), Some(6));
}

#[test]
fn stop_cancels_pending_and_blocks_late_frames() {
    let mut sched = ManualScheduler::default();
    let mut lp = FrameLoop::new();
    lp.start(&mut sched);
    lp.run_frame(&mut sched, || {});
    lp.stop(&mut sched);
    assert_eq!(sched.cancelled, vec![2]);
    assert_eq!(lp.pending(), None);
    assert!(!lp.is_running());

    let mut ran = false;
    assert!(!lp.run_frame(&mut sched, || ran = true));
    assert!(!ran);
    assert_eq!(sched.requested, vec![1, 2]);
}

#[test]
fn double_stop_is_harmless() {
    let mut sched = ManualScheduler::default();
    let mut lp = FrameLoop::new();
    lp.start(&mut sched);
    lp.stop(&mut sched);
    lp.stop(&mut sched);
    assert_eq!(sched.cancelled, vec![1]);
}

#[test]
fn stop_before_start_prevents_start() {
    let mut sched = ManualScheduler::default();
    let mut lp = FrameLoop::new();
    lp.stop(&mut sched);
    assert!(!lp.start(&mut sched));
    assert!(sched.requested.is_empty());
    assert!(sched.cancelled.is_empty());
}

#[test]
fn unavailable_scheduler_leaves_nothing_pending() {
    let mut sched = ManualScheduler {
        unavailable: true,
        ..Default::default()
    };
    let mut lp = FrameLoop::new();
    assert!(!lp.start(&mut sched));
    assert_eq!(lp.pending(), None);
}

#[test]
fn drives_engine_frame_by_frame() {
    let mut sched = ManualScheduler::default();
    let mut lp = FrameLoop::new();
    let mut engine = Starfield::new(
        StarfieldConfig::default(),
        Viewport::new(800.0, 600.0, Some(1.0)),
        5,
    )
    .unwrap();
    let mut target = RecordingSurface::default();

    engine.render(&mut target);
    lp.start(&mut sched);
    for _ in 0..10 {
        lp.run_frame(&mut sched, || {
            engine.frame(&mut target);
        });
    }
    assert_eq!(engine.frames(), 10);
    assert_eq!(lp.frames(), 10);
    // first render plus ten frames, one line per star each
    assert_eq!(target.lines().len(), 11 * engine.star_count());

    lp.stop(&mut sched);
    lp.run_frame(&mut sched, || {
        engine.frame(&mut target);
    });
    assert_eq!(engine.frames(), 10);
}
