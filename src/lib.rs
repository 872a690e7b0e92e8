#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod meter;
pub mod scheduler;
pub mod section;
pub mod visibility;

#[doc(inline)]
pub use meter::{Meter, MeterBuilder, meter};
#[doc(inline)]
pub use scheduler::{FRAME_INTERVAL, ManualScheduler, TimerScheduler};
#[doc(inline)]
pub use section::{LazySection, SectionView, Spawner};
#[doc(inline)]
pub use visibility::Reveal;

#[doc(inline)]
pub use swell_core::{
    CancelToken, ConfigError, CountUp, Easing, FrameCallback, FrameHandle, FrameScheduler,
    LoadError, LoadState, Phase, Transition,
};

pub use nami as reactive;
#[doc(inline)]
pub use reactive::{Binding, Computed, Signal, binding};

/// Task management utilities and async support.
pub mod task {
    pub use executor_core::{spawn, spawn_local};
    pub use native_executor::sleep;
}

pub use tracing as log;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! # Example
    //!
    //! ```rust
    //! use swell::prelude::*;
    //!
    //! let reveal = Reveal::new();
    //! assert!(!reveal.is_visible());
    //! ```
    pub use crate::meter::{Meter, MeterBuilder, meter};
    pub use crate::scheduler::{ManualScheduler, TimerScheduler};
    pub use crate::section::{LazySection, SectionView};
    pub use crate::visibility::Reveal;

    pub use swell_core::{
        ConfigError, Easing, FrameScheduler, LoadError, LoadState, Phase, Transition,
    };

    pub use nami::{Binding, Computed, Signal, binding};
}
