//! Easing curves and transition presets.
//!
//! An easing curve maps normalized progress in `[0, 1]` to an eased value
//! in `[0, 1]`. A [`Transition`] pairs a curve with a duration, which is
//! everything an animation needs besides its endpoints.

use core::time::Duration;

/// An interpolation curve over normalized progress.
///
/// Every curve is exact at the endpoints: `apply(0.0) == 0.0` and
/// `apply(1.0) == 1.0`. Inputs outside `[0, 1]` are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Cubic acceleration from rest.
    CubicIn,
    /// Cubic deceleration toward the target, `1 - (1 - p)^3`.
    ///
    /// The default: front-loaded speed with a smooth settle, which is what
    /// makes a counting read-out feel like it is "arriving" at its value.
    #[default]
    CubicOut,
    /// Cubic acceleration then deceleration.
    CubicInOut,
}

impl Easing {
    /// Applies the curve to a progress value, clamping it to `[0, 1]` first.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::CubicIn => p * p * p,
            Self::CubicOut => 1.0 - (1.0 - p).powi(3),
            Self::CubicInOut => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// How an animated value travels: a duration and an easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Total wall-clock time of the animation. Must be non-zero to drive a
    /// [`CountUp`](crate::CountUp).
    pub duration: Duration,
    /// The interpolation curve.
    pub easing: Easing,
}

impl Transition {
    /// The default duration used by [`Transition::default`].
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);

    /// Creates a transition from a duration and curve.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// The standard short ease-out preset (600 ms).
    #[must_use]
    pub const fn ease() -> Self {
        Self::new(Duration::from_millis(600), Easing::CubicOut)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, Easing::CubicOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ];

    #[test]
    fn curves_are_exact_at_endpoints() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn cubic_out_quarter_progress() {
        // 1 - 0.75^3 = 0.578125, exactly representable.
        assert_eq!(Easing::CubicOut.apply(0.25), 0.578125);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        for easing in CURVES {
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(7.5), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn curves_stay_within_unit_interval_and_increase() {
        for easing in CURVES {
            let mut previous = 0.0;
            for step in 0..=100 {
                let eased = easing.apply(f64::from(step) / 100.0);
                assert!((0.0..=1.0).contains(&eased), "{easing:?} at {step}");
                assert!(eased >= previous, "{easing:?} decreased at {step}");
                previous = eased;
            }
        }
    }

    #[test]
    fn default_transition() {
        let transition = Transition::default();
        assert_eq!(transition.duration, Duration::from_millis(1500));
        assert_eq!(transition.easing, Easing::CubicOut);
    }

    #[test]
    fn ease_preset_is_short_cubic_out() {
        let transition = Transition::ease();
        assert_eq!(transition.duration, Duration::from_millis(600));
        assert_eq!(transition.easing, Easing::CubicOut);
    }
}
