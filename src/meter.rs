//! Animated count-up meters.
//!
//! A [`Meter`] binds the pure [`CountUp`] machine to reactive values and a
//! frame scheduler: triggering it starts the animation, every frame step
//! publishes the eased value through a [`Binding`], and the presentation
//! layer observes [`Meter::value`] however it likes. Meters are the moving
//! number behind a statistic read-out; they animate at most once and are
//! usually fired by a viewport [`Reveal`](crate::visibility::Reveal).
//!
//! Frame callbacks hold only a weak reference to the meter and every
//! pending callback carries a cancellation token, so dropping the last
//! handle mid-animation leaves a queued platform callback with nothing to
//! mutate.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use nami::{Binding, Computed, Signal, SignalExt, binding};
use swell_core::{ConfigError, CountUp, Easing, FrameHandle, FrameScheduler, Phase, Transition};
use tracing::trace;

/// Starts building a meter that counts from `start` to `end`.
#[must_use]
pub const fn meter(start: f64, end: f64) -> MeterBuilder {
    MeterBuilder {
        start,
        end,
        transition: Transition::new(Transition::DEFAULT_DURATION, Easing::CubicOut),
        decimals: 0,
        delay: Duration::ZERO,
    }
}

/// Builder for [`Meter`].
#[derive(Debug, Clone)]
pub struct MeterBuilder {
    start: f64,
    end: f64,
    transition: Transition,
    decimals: u32,
    delay: Duration,
}

impl MeterBuilder {
    /// Sets the full transition (duration and easing).
    #[must_use]
    pub const fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the animation duration, keeping the easing curve.
    #[must_use]
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.transition.duration = duration;
        self
    }

    /// Sets the easing curve, keeping the duration.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }

    /// Sets how many decimal places the published value is rounded to.
    #[must_use]
    pub const fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Delays the start of the animation after the trigger fires.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Builds the meter on the given frame scheduler.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] for a zero duration or non-finite
    /// endpoints.
    pub fn build(self, scheduler: Rc<dyn FrameScheduler>) -> Result<Meter, ConfigError> {
        let counter = CountUp::new(self.start, self.end, self.transition, self.decimals)?;
        let value = binding(counter.value());
        let running = binding(false);
        Ok(Meter {
            inner: Rc::new(MeterInner {
                counter: RefCell::new(counter),
                value,
                running,
                scheduler,
                base_delay: self.delay,
                pending: RefCell::new(None),
                guards: RefCell::new(Vec::new()),
            }),
        })
    }
}

/// A reactive count-up driver.
///
/// Cloning a meter clones a handle to the same animation; the animation is
/// torn down when the last handle drops.
#[derive(Clone)]
pub struct Meter {
    inner: Rc<MeterInner>,
}

struct MeterInner {
    counter: RefCell<CountUp>,
    value: Binding<f64>,
    running: Binding<bool>,
    scheduler: Rc<dyn FrameScheduler>,
    base_delay: Duration,
    pending: RefCell<Option<FrameHandle>>,
    // Watcher guards from trigger_when; dropped with the meter.
    guards: RefCell<Vec<Box<dyn Any>>>,
}

impl Meter {
    /// Starts the animation.
    ///
    /// The trigger is latched: only the first call has any effect, so it
    /// is safe to wire this to a visibility signal that may fire more than
    /// once.
    pub fn trigger(&self) {
        trigger_inner(&self.inner, Duration::ZERO);
    }

    /// Starts the animation after an extra delay on top of the configured
    /// one. Used for staggered group reveals.
    pub fn trigger_after(&self, delay: Duration) {
        trigger_inner(&self.inner, delay);
    }

    /// Triggers the meter when `source` first reads or becomes `true`.
    ///
    /// This is the seam for an external viewport-visibility collaborator:
    /// the meter watches the signal and arms itself once, keeping the
    /// watcher alive for its own lifetime. Repeated `true` notifications
    /// are absorbed by the trigger latch.
    pub fn trigger_when<S>(&self, source: &S, delay: Duration)
    where
        S: Signal<Output = bool>,
        S::Guard: 'static,
    {
        if source.get() {
            self.trigger_after(delay);
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let guard = source.watch(move |context| {
            if context.into_value() {
                if let Some(inner) = weak.upgrade() {
                    trigger_inner(&inner, delay);
                }
            }
        });
        self.inner.guards.borrow_mut().push(Box::new(guard));
    }

    /// The animated value as a reactive signal.
    #[must_use]
    pub fn value(&self) -> Computed<f64> {
        self.inner.value.clone().computed()
    }

    /// A snapshot of the current value.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.inner.value.get()
    }

    /// Whether the animation is in flight, as a reactive signal.
    #[must_use]
    pub fn running(&self) -> Computed<bool> {
        self.inner.running.clone().computed()
    }

    /// A snapshot of whether the animation is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// `true` once the meter has been triggered.
    #[must_use]
    pub fn has_triggered(&self) -> bool {
        self.inner.counter.borrow().has_begun()
    }
}

impl fmt::Debug for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counter = self.inner.counter.borrow();
        f.debug_struct("Meter")
            .field("value", &counter.value())
            .field("phase", &counter.phase())
            .finish_non_exhaustive()
    }
}

fn trigger_inner(inner: &Rc<MeterInner>, extra: Duration) {
    let now = inner.scheduler.now();
    let start_at = now + inner.base_delay + extra;
    if !inner.counter.borrow_mut().begin(start_at) {
        trace!("meter already triggered, ignoring");
        return;
    }
    inner.running.set(true);
    schedule_step(inner);
}

fn schedule_step(inner: &Rc<MeterInner>) {
    let weak = Rc::downgrade(inner);
    let handle = inner.scheduler.schedule(Box::new(move |now| {
        if let Some(inner) = weak.upgrade() {
            step(&inner, now);
        }
    }));
    *inner.pending.borrow_mut() = Some(handle);
}

fn step(inner: &Rc<MeterInner>, now: Instant) {
    let (value, completed) = {
        let mut counter = inner.counter.borrow_mut();
        let value = counter.advance(now);
        (value, counter.phase() == Phase::Completed)
    };
    inner.value.set(value);
    if completed {
        inner.running.set(false);
        inner.pending.borrow_mut().take();
    } else {
        schedule_step(inner);
    }
}
