//! Frame scheduler implementations.
//!
//! [`TimerScheduler`] is the production driver: it rides the async
//! executor and fires callbacks on a fixed interval. [`ManualScheduler`]
//! is a deterministic driver with a fabricated clock, used by tests and
//! headless demos to advance animations frame by frame.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::{Duration, Instant};

use executor_core::spawn_local;
use native_executor::sleep;
use swell_core::{CancelToken, FrameCallback, FrameHandle, FrameScheduler};

/// The default frame interval (roughly 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// An executor-backed scheduler firing once per frame interval.
#[derive(Debug, Clone)]
pub struct TimerScheduler {
    interval: Duration,
}

impl TimerScheduler {
    /// Creates a scheduler with the default frame interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval: FRAME_INTERVAL,
        }
    }

    /// Creates a scheduler with a custom frame interval.
    #[must_use]
    pub const fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for TimerScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle::new();
        let token = handle.token();
        let interval = self.interval;
        spawn_local(async move {
            sleep(interval).await;
            if !token.is_cancelled() {
                callback(Instant::now());
            }
        })
        .detach();
        handle
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A deterministic scheduler driven by explicit ticks.
///
/// Callbacks queue up until [`tick`](Self::tick) runs them with the
/// current fabricated clock reading. A callback that schedules another
/// frame while ticking lands in the next tick, matching how a real
/// per-frame callback queue behaves.
pub struct ManualScheduler {
    now: Cell<Instant>,
    queue: RefCell<Vec<(CancelToken, FrameCallback)>>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at the present instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
            queue: RefCell::new(Vec::new()),
        }
    }

    /// Runs every callback queued before this call, skipping cancelled
    /// ones. Returns how many callbacks fired.
    pub fn tick(&self) -> usize {
        let queued = self.queue.take();
        let now = self.now.get();
        let mut fired = 0;
        for (token, callback) in queued {
            if token.is_cancelled() {
                continue;
            }
            callback(now);
            fired += 1;
        }
        fired
    }

    /// Moves the clock forward and ticks. Returns how many callbacks
    /// fired.
    pub fn advance(&self, dt: Duration) -> usize {
        self.now.set(self.now.get() + dt);
        self.tick()
    }

    /// How many callbacks are currently queued, cancelled or not.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now.get())
            .field("pending", &self.pending())
            .finish()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle::new();
        self.queue.borrow_mut().push((handle.token(), callback));
        handle
    }

    fn now(&self) -> Instant {
        self.now.get()
    }
}
