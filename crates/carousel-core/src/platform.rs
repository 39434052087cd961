//! Platform abstraction traits for runtime services.
//!
//! These traits let the carousel delegate frame scheduling and wall-clock
//! reads to the host, so the same engine runs under a windowing loop, in a
//! browser, or inside a deterministic test harness.

use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

/// Schedules work for the runtime.
///
/// Implementations are responsible for asking the host for another frame
/// whenever a frame callback is queued. They must be safe to use from
/// multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides wall-clock time to animations.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_millis(&self) -> f64;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: f64) -> f64 {
        self.now_millis() - since
    }
}

/// Monotonic clock backed by [`web_time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can hand one copy to
/// the animations it drives and keep another to advance.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(millis: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(millis)),
        }
    }

    pub fn set(&self, millis: f64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: f64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> f64 {
        self.now.get()
    }
}
