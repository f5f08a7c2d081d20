//! Loop driver state machine, independent of how frames are actually scheduled.

/// "Call me once before the next paint." Handles are whatever the host returns.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<i32>;
    fn cancel_frame(&mut self, handle: i32);
}

/// Tracks the pending frame and the stop flag. Each frame callback goes through
/// [`FrameLoop::run_frame`], which refuses to run or reschedule once stopped.
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<i32>,
    started: bool,
    stopped: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the first frame. A stopped loop cannot be restarted.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.stopped || self.started {
            return false;
        }
        self.started = true;
        self.pending = scheduler.request_frame();
        self.pending.is_some()
    }

    /// Handle a delivered frame: run `frame` and schedule the next one.
    /// Returns false without calling `frame` once the loop is stopped.
    pub fn run_frame<S, F>(&mut self, scheduler: &mut S, frame: F) -> bool
    where
        S: FrameScheduler + ?Sized,
        F: FnOnce(),
    {
        self.pending = None;
        if self.stopped || !self.started {
            return false;
        }
        frame();
        self.frames += 1;
        if !self.stopped {
            self.pending = scheduler.request_frame();
        }
        true
    }

    /// Cancel the pending frame. Safe to call any number of times.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stopped = true;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.stopped
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
