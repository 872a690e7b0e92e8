//! Core state machines for the swell animation kit.
//!
//! This crate contains the pure, scheduler-independent pieces of swell:
//! easing curves, the count-up animation state machine, the lazy-load
//! state machine, and the frame-scheduling seam. Everything here is plain
//! data plus explicit transitions; the reactive drivers that bind these
//! machines to signals and executors live in the `swell` crate.

pub mod counter;
pub mod ease;
pub mod error;
pub mod loader;
pub mod schedule;

#[doc(inline)]
pub use counter::{CountUp, Phase};
#[doc(inline)]
pub use ease::{Easing, Transition};
#[doc(inline)]
pub use error::{ConfigError, LoadError};
#[doc(inline)]
pub use loader::LoadState;
#[doc(inline)]
pub use schedule::{CancelToken, FrameCallback, FrameHandle, FrameScheduler};
