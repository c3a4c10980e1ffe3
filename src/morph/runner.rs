//! Orchestration of morph runs across several target shapes.
//!
//! Each shape's run is fully independent: its own working dataset, its own
//! RNG stream seeded from the shared config. Runs may execute across a rayon
//! pool, but every run stays single-threaded internally.

use rayon::prelude::*;

use crate::data::dataset::Dataset;
use crate::foundation::error::MorphResult;
use crate::morph::config::RunConfig;
use crate::morph::engine::{CancelToken, MorphOutput, morph_with_cancel};
use crate::shapes::TargetShape;
use crate::shapes::registry::ShapeRegistry;

/// Options for a multi-shape invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunnerOpts {
    /// Execute independent shape runs across a rayon pool.
    pub parallel: bool,
}

/// One completed shape run.
#[derive(Clone, Debug)]
pub struct ShapeRun {
    /// Name of the target shape that was morphed toward.
    pub shape_name: String,
    /// The run's final dataset and frames.
    pub output: MorphOutput,
}

/// Morph `start` toward every requested shape.
///
/// Shape names resolve against `registry`; unrecognized names among several
/// are skipped, and resolution fails before any run when none remain. The
/// `progress` callback receives `(index, total)` once per shape, 1-based, in
/// request order, before that shape's run is invoked.
pub fn morph_all(
    start: &Dataset,
    requested: &[String],
    registry: &ShapeRegistry,
    config: &RunConfig,
    opts: &RunnerOpts,
    cancel: &CancelToken,
    mut progress: impl FnMut(usize, usize),
) -> MorphResult<Vec<ShapeRun>> {
    config.validate()?;
    let shapes = registry.resolve(requested, start)?;
    let total = shapes.len();

    if opts.parallel {
        // Progress still goes out up front, in request order, before any run.
        for i in 0..total {
            progress(i + 1, total);
        }
        return shapes
            .par_iter()
            .map(|shape| run_one(start, shape.as_ref(), config, cancel))
            .collect();
    }

    let mut runs = Vec::with_capacity(total);
    for (i, shape) in shapes.iter().enumerate() {
        progress(i + 1, total);
        runs.push(run_one(start, shape.as_ref(), config, cancel)?);
    }
    Ok(runs)
}

fn run_one(
    start: &Dataset,
    shape: &dyn TargetShape,
    config: &RunConfig,
    cancel: &CancelToken,
) -> MorphResult<ShapeRun> {
    let output = morph_with_cancel(start, shape, config, cancel)?;
    Ok(ShapeRun {
        shape_name: shape.name().to_string(),
        output,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/morph/runner.rs"]
mod tests;
