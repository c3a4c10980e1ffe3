//! The perturbation/acceptance engine.
//!
//! Each iteration proposes a small displacement of one point and accepts it
//! only if the dataset's rounded summary statistics stay equal to the
//! original's and the point does not move away from the target shape (with a
//! temperature-controlled exception that breaks local stagnation). All
//! randomness flows from one seeded generator owned by the run, so equal
//! seeds reproduce runs bit for bit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::data::dataset::Dataset;
use crate::data::stats::{SummaryStatistics, compute_statistics};
use crate::foundation::core::Point;
use crate::foundation::error::{MorphError, MorphResult};
use crate::morph::config::RunConfig;
use crate::morph::sampler::{Frame, FramePlan, arrange_frames};
use crate::morph::schedule::Schedule;
use crate::shapes::TargetShape;

/// Proposal attempts per iteration before the iteration becomes a no-op.
const MAX_ATTEMPTS: usize = 200;

/// Cooperative cancellation handle checked between iterations.
///
/// Cancelling never exposes partial-iteration state: the run stops after the
/// last fully completed iteration and returns that snapshot as its final
/// frame.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of one morph run.
#[derive(Clone, Debug)]
pub struct MorphOutput {
    /// The final dataset after the last completed iteration.
    pub dataset: Dataset,
    /// Sampled frames in animation order.
    pub frames: Vec<Frame>,
}

/// Morph `start` toward `target` under `config`.
pub fn morph(
    start: &Dataset,
    target: &dyn TargetShape,
    config: &RunConfig,
) -> MorphResult<MorphOutput> {
    morph_with_cancel(start, target, config, &CancelToken::new())
}

/// [`morph`] with a cooperative cancellation token.
#[tracing::instrument(
    skip(start, target, config, cancel),
    fields(start = %start.name, shape = target.name())
)]
pub fn morph_with_cancel(
    start: &Dataset,
    target: &dyn TargetShape,
    config: &RunConfig,
    cancel: &CancelToken,
) -> MorphResult<MorphOutput> {
    config.validate()?;
    if start.len() < 2 {
        return Err(MorphError::dataset(format!(
            "start dataset '{}' needs at least 2 points to morph, has {}",
            start.name,
            start.len()
        )));
    }
    probe_target(start, target)?;

    let original = compute_statistics(start, config.decimals)?;
    let schedule = Schedule::new(config, &start.bounds);
    let plan = FramePlan::new(config.iterations, config.num_frames);
    let mut rng = Pcg64Mcg::seed_from_u64(config.seed.unwrap_or_else(rand::random));

    let mut working = start.clone();
    let mut frames: Vec<Frame> = Vec::with_capacity(plan.len());
    let mut accepted = 0usize;
    let mut last_completed: Option<usize> = None;

    for i in 0..config.iterations {
        if cancel.is_cancelled() {
            tracing::debug!(iteration = i, "morph cancelled");
            break;
        }

        if i < schedule.freeze_start() {
            let moved = perturb_once(
                &mut working,
                target,
                &original,
                config.decimals,
                &schedule,
                i,
                &mut rng,
            )?;
            if moved {
                accepted += 1;
            }
        }

        last_completed = Some(i);
        if plan.contains(i) {
            frames.push(Frame {
                iteration: i,
                dataset: working.clone(),
            });
        }
    }

    // A cancelled run still ends on the last fully completed snapshot.
    if let Some(i) = last_completed
        && frames.last().map(|f| f.iteration) != Some(i)
    {
        frames.push(Frame {
            iteration: i,
            dataset: working.clone(),
        });
    }

    tracing::debug!(
        accepted,
        iterations = config.iterations,
        frames = frames.len(),
        "morph finished"
    );

    Ok(MorphOutput {
        dataset: working,
        frames: arrange_frames(frames, config.forward_only),
    })
}

/// One iteration: bounded proposal attempts, first accepted move wins.
fn perturb_once(
    working: &mut Dataset,
    target: &dyn TargetShape,
    original: &SummaryStatistics,
    decimals: u8,
    schedule: &Schedule,
    iteration: usize,
    rng: &mut Pcg64Mcg,
) -> MorphResult<bool> {
    let step = schedule.step(iteration);
    let temperature = schedule.temperature(iteration);
    let allowed = schedule.allowed_distance();

    for _ in 0..MAX_ATTEMPTS {
        let idx = rng.random_range(0..working.points.len());
        let current = working.points[idx];

        let angle = rng.random::<f64>() * std::f64::consts::TAU;
        let radius = rng.random::<f64>() * step;
        let candidate = Point::new(
            current.x + radius * angle.cos(),
            current.y + radius * angle.sin(),
        );

        if !working.bounds.contains(candidate) {
            continue;
        }

        let old_dist = target.distance(current);
        let new_dist = target.distance(candidate);
        let close_enough =
            new_dist <= old_dist || new_dist < allowed || temperature > rng.random::<f64>();
        if !close_enough {
            continue;
        }

        working.points[idx] = candidate;
        match compute_statistics(working, decimals) {
            Ok(stats) if stats.matches(original) => return Ok(true),
            Ok(_) => working.points[idx] = current,
            Err(e) => {
                working.points[idx] = current;
                return Err(e);
            }
        }
    }

    Ok(false)
}

/// Fail fast if the target cannot produce a usable distance anywhere the
/// start data lives.
fn probe_target(start: &Dataset, target: &dyn TargetShape) -> MorphResult<()> {
    let corners = start.bounds.corners();
    for p in start.points.iter().chain(corners.iter()) {
        let d = target.distance(*p);
        if !d.is_finite() || d < 0.0 {
            return Err(MorphError::configuration(format!(
                "target shape '{}' produced an invalid distance {d} at ({}, {})",
                target.name(),
                p.x,
                p.y
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/morph/engine.rs"]
mod tests;
