use crate::foundation::error::{MorphError, MorphResult};

/// Default values shared by the CLI surface and tests.
///
/// Constructed once; nothing reads defaults from mutable module state.
#[derive(Clone, Copy, Debug)]
pub struct ConfigDefaults {
    /// Decimal precision for the preserved statistics.
    pub decimals: u8,
    /// Perturbation iterations per run.
    pub iterations: usize,
    /// Trailing no-mutation iterations.
    pub freeze_for: usize,
    /// Maximum recorded animation frames.
    pub num_frames: usize,
    /// Output directory for persisted data.
    pub output_dir: &'static str,
}

/// The canonical defaults.
pub const DEFAULTS: ConfigDefaults = ConfigDefaults {
    decimals: 2,
    iterations: 100_000,
    freeze_for: 0,
    num_frames: 100,
    output_dir: "morphed_data",
};

/// Immutable configuration for one morph run.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct RunConfig {
    /// Number of perturbation iterations, > 0.
    pub iterations: usize,
    /// Decimal precision of the statistics invariant, 0..=9.
    pub decimals: u8,
    /// Trailing iterations with no mutation, < `iterations`.
    pub freeze_for: usize,
    /// Ease the perturbation magnitude in at the start.
    pub ramp_in: bool,
    /// Ease the perturbation magnitude out before the freeze period.
    pub ramp_out: bool,
    /// Skip the reverse (loop-closing) frame pass.
    pub forward_only: bool,
    /// Maximum number of recorded frames, >= 1.
    pub num_frames: usize,
    /// RNG seed; `None` means a non-reproducible run.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULTS.iterations,
            decimals: DEFAULTS.decimals,
            freeze_for: DEFAULTS.freeze_for,
            ramp_in: false,
            ramp_out: false,
            forward_only: false,
            num_frames: DEFAULTS.num_frames,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Validate the cross-field constraints.
    pub fn validate(&self) -> MorphResult<()> {
        if self.iterations == 0 {
            return Err(MorphError::configuration("iterations must be > 0"));
        }
        if self.decimals > 9 {
            return Err(MorphError::configuration(format!(
                "decimals must be within 0..=9, got {}",
                self.decimals
            )));
        }
        if self.freeze_for >= self.iterations {
            return Err(MorphError::configuration(format!(
                "freeze ({}) must be smaller than iterations ({})",
                self.freeze_for, self.iterations
            )));
        }
        if self.num_frames == 0 {
            return Err(MorphError::configuration("num-frames must be >= 1"));
        }
        Ok(())
    }
}
