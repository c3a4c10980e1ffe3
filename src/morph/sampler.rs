//! Frame sampling: which iterations get recorded, and in what order.
//!
//! Pure index bookkeeping; no statistics and no geometry.

use crate::data::dataset::Dataset;

/// A recorded trajectory snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Iteration the snapshot was taken at.
    pub iteration: usize,
    /// The dataset state after that iteration.
    pub dataset: Dataset,
}

/// Uniformly spaced selection of at most `num_frames` iteration indices,
/// always including the first and last iteration of the trajectory.
///
/// With `num_frames == 1` only the final (settled) snapshot is kept, since a
/// single slot cannot hold both endpoints.
#[derive(Clone, Debug)]
pub struct FramePlan {
    selected: Vec<usize>,
}

impl FramePlan {
    /// Plan a run of `iterations` snapshots down to at most `num_frames`.
    pub fn new(iterations: usize, num_frames: usize) -> Self {
        let last = iterations.saturating_sub(1);
        let count = num_frames.min(iterations);
        let selected = if count <= 1 {
            vec![last]
        } else {
            let mut indices: Vec<usize> = (0..count)
                .map(|k| {
                    let t = k as f64 / (count - 1) as f64;
                    (t * last as f64).round() as usize
                })
                .collect();
            indices.dedup();
            indices
        };
        Self { selected }
    }

    /// Whether iteration `i` should be recorded.
    pub fn contains(&self, i: usize) -> bool {
        self.selected.binary_search(&i).is_ok()
    }

    /// Number of planned forward frames.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether the plan selects no frames (never the case in practice).
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Planned iteration indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.selected
    }
}

/// Order recorded frames for animation.
///
/// Forward-only keeps the frames as recorded. Otherwise the forward pass is
/// followed by its reversed interior (both endpoints excluded) so the
/// sequence loops back to the start without duplicated stills.
pub fn arrange_frames(mut frames: Vec<Frame>, forward_only: bool) -> Vec<Frame> {
    if forward_only || frames.len() <= 2 {
        return frames;
    }
    let interior: Vec<Frame> = frames[1..frames.len() - 1].iter().rev().cloned().collect();
    frames.extend(interior);
    frames
}

#[cfg(test)]
#[path = "../../tests/unit/morph/sampler.rs"]
mod tests;
