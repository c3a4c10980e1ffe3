//! Perturbation-magnitude and temperature schedules.
//!
//! Ramps ease the step size in and out so the animation accelerates and
//! settles instead of starting and stopping abruptly. The freeze period is
//! excluded from the active window entirely.

use crate::foundation::core::Bounds;
use crate::morph::config::RunConfig;

/// Ramp floor: the step never eases below this fraction of the base step.
const RAMP_FLOOR: f64 = 0.1;

/// Each ramp window covers this fraction of the active (non-frozen) window.
const RAMP_WINDOW_FRACTION: f64 = 0.1;

/// Starting temperature for stagnation-breaking acceptance.
const MAX_TEMPERATURE: f64 = 0.4;

/// Base step as a fraction of the larger bounds span.
const BASE_STEP_FRACTION: f64 = 0.003;

/// Moves closer to the target than this fraction of the span always pass the
/// geometric gate.
const ALLOWED_DISTANCE_FRACTION: f64 = 0.02;

#[derive(Clone, Copy, Debug)]
pub(crate) enum Ease {
    InOutQuad,
}

impl Ease {
    pub(crate) fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }
}

/// Precomputed per-run schedule constants.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Schedule {
    active: usize,
    window: usize,
    ramp_in: bool,
    ramp_out: bool,
    base_step: f64,
    allowed_distance: f64,
}

impl Schedule {
    pub(crate) fn new(config: &RunConfig, bounds: &Bounds) -> Self {
        let active = config.iterations - config.freeze_for;
        let window = ((active as f64 * RAMP_WINDOW_FRACTION) as usize).max(1);
        Self {
            active,
            window,
            ramp_in: config.ramp_in,
            ramp_out: config.ramp_out,
            base_step: (BASE_STEP_FRACTION * bounds.max_span()).max(1e-3),
            allowed_distance: ALLOWED_DISTANCE_FRACTION * bounds.max_span(),
        }
    }

    /// First iteration of the freeze period.
    pub(crate) fn freeze_start(&self) -> usize {
        self.active
    }

    /// Target distances below this always pass the geometric gate.
    pub(crate) fn allowed_distance(&self) -> f64 {
        self.allowed_distance
    }

    /// Ramp factor `r(i)` in `[RAMP_FLOOR, 1]`.
    pub(crate) fn ramp_factor(&self, i: usize) -> f64 {
        debug_assert!(i < self.active);
        if self.ramp_in && i < self.window {
            let t = i as f64 / self.window as f64;
            return RAMP_FLOOR + (1.0 - RAMP_FLOOR) * Ease::InOutQuad.apply(t);
        }
        if self.ramp_out && i + self.window >= self.active {
            let t = (self.active - i) as f64 / self.window as f64;
            return RAMP_FLOOR + (1.0 - RAMP_FLOOR) * Ease::InOutQuad.apply(t);
        }
        1.0
    }

    /// Maximum displacement magnitude for iteration `i`.
    pub(crate) fn step(&self, i: usize) -> f64 {
        self.base_step * self.ramp_factor(i)
    }

    /// Stagnation-breaking acceptance probability for iteration `i`,
    /// easing from [`MAX_TEMPERATURE`] down to 0 across the active window.
    pub(crate) fn temperature(&self, i: usize) -> f64 {
        let remaining = (self.active - i) as f64 / self.active as f64;
        MAX_TEMPERATURE * Ease::InOutQuad.apply(remaining)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/schedule.rs"]
mod tests;
