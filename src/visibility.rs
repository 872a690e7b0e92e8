//! Viewport reveal: a one-way visibility latch for triggering meters.
//!
//! Pages animate statistics when their block first scrolls into view. The
//! viewport observer itself lives outside this crate; it only has to call
//! [`Reveal::enter`] when the tracked element becomes visible. The latch
//! is one-way, so scrolling away and back never replays the animations.

use std::cell::Cell;
use std::time::Duration;

use nami::{Binding, Computed, Signal, SignalExt, binding};

use crate::meter::Meter;

/// A one-way visibility latch that triggers attached meters, optionally
/// staggering them.
///
/// With a stagger step, the i-th attached meter starts `i * step` after
/// the reveal fires, which is what gives a stat row its cascading feel.
#[derive(Debug)]
pub struct Reveal {
    visible: Binding<bool>,
    stagger: Duration,
    attached: Cell<usize>,
}

impl Reveal {
    /// Creates a latch that triggers attached meters simultaneously.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stagger(Duration::ZERO)
    }

    /// Creates a latch that staggers attached meters by `stagger` each.
    #[must_use]
    pub fn with_stagger(stagger: Duration) -> Self {
        Self {
            visible: binding(false),
            stagger,
            attached: Cell::new(0),
        }
    }

    /// Reports that the tracked element entered the viewport.
    ///
    /// Only the first call has any effect.
    pub fn enter(&self) {
        if !self.visible.get() {
            self.visible.set(true);
        }
    }

    /// Snapshot of the latch.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// The latch as a reactive signal.
    #[must_use]
    pub fn visible(&self) -> Computed<bool> {
        self.visible.clone().computed()
    }

    /// Subscribes a meter to this reveal.
    ///
    /// Attaching after the reveal already fired triggers the meter
    /// immediately, still honoring its stagger slot.
    pub fn attach(&self, meter: &Meter) {
        let index = self.attached.get();
        self.attached.set(index + 1);
        let slot = u32::try_from(index).unwrap_or(u32::MAX);
        meter.trigger_when(&self.visible, self.stagger * slot);
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meter::meter;
    use crate::scheduler::ManualScheduler;
    use std::rc::Rc;

    fn stat_meter(scheduler: &Rc<ManualScheduler>) -> Meter {
        meter(0.0, 10.0)
            .duration(Duration::from_millis(100))
            .build(scheduler.clone())
            .expect("valid config")
    }

    #[test]
    fn enter_triggers_attached_meters_once() {
        let scheduler = Rc::new(ManualScheduler::new());
        let reveal = Reveal::new();
        let first = stat_meter(&scheduler);
        let second = stat_meter(&scheduler);
        reveal.attach(&first);
        reveal.attach(&second);

        assert!(!first.has_triggered());
        reveal.enter();
        assert!(first.has_triggered());
        assert!(second.has_triggered());

        scheduler.advance(Duration::from_millis(50));
        let sample = first.current();
        assert!(sample > 0.0);

        // Re-entering is a no-op.
        reveal.enter();
        assert_eq!(first.current(), sample);
    }

    #[test]
    fn stagger_delays_later_meters() {
        let scheduler = Rc::new(ManualScheduler::new());
        let reveal = Reveal::with_stagger(Duration::from_millis(100));
        let first = stat_meter(&scheduler);
        let third = stat_meter(&scheduler);
        reveal.attach(&first);
        reveal.attach(&stat_meter(&scheduler));
        reveal.attach(&third);

        reveal.enter();
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(first.current(), 10.0);
        assert_eq!(third.current(), 0.0);
        assert!(third.is_running());

        scheduler.advance(Duration::from_millis(100));
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(third.current(), 10.0);
    }

    #[test]
    fn attaching_after_the_reveal_triggers_immediately() {
        let scheduler = Rc::new(ManualScheduler::new());
        let reveal = Reveal::new();
        reveal.enter();

        let late = stat_meter(&scheduler);
        reveal.attach(&late);
        assert!(late.has_triggered());
    }
}
