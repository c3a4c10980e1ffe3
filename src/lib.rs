//! Datamorph morphs a 2D point cloud into a recognizable target shape while
//! keeping its summary statistics fixed at a chosen rounding precision.
//!
//! The result is the "same stats, different graphs" demonstration: every
//! intermediate scatterplot reports identical means, standard deviations and
//! correlation, yet the picture transforms completely.
//!
//! # Pipeline overview
//!
//! 1. **Load**: a built-in start shape or point file becomes a bounded
//!    [`Dataset`] (via [`DataLoader`]).
//! 2. **Resolve**: target-shape names become [`TargetShape`] values sized for
//!    that dataset (via [`ShapeRegistry`]).
//! 3. **Morph**: the perturbation engine proposes and accepts single-point
//!    moves, iteration by iteration, preserving the rounded
//!    [`SummaryStatistics`] of the original ([`morph`]).
//! 4. **Sample**: the trajectory is down-sampled to a bounded frame sequence
//!    for animation, forward-only or looping ([`FramePlan`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a seeded run reproduces bit for bit; all
//!   randomness flows from one generator owned by the run.
//! - **No IO in the engine**: loading happens before a run, persistence
//!   after; the engine itself never blocks on IO.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod data;
mod foundation;
mod morph;
mod shapes;

pub use data::builtins::{builtin_names, builtin_points};
pub use data::dataset::Dataset;
pub use data::loader::{DataLoader, DataSource};
pub use data::stats::{SummaryStatistics, compute_statistics};
pub use foundation::core::{Bounds, Point, Vec2};
pub use foundation::error::{MorphError, MorphResult};
pub use morph::config::{ConfigDefaults, DEFAULTS, RunConfig};
pub use morph::engine::{CancelToken, MorphOutput, morph, morph_with_cancel};
pub use morph::runner::{RunnerOpts, ShapeRun, morph_all};
pub use morph::sampler::{Frame, FramePlan, arrange_frames};
pub use shapes::TargetShape;
pub use shapes::curves::Rings;
pub use shapes::lines::LineCollection;
pub use shapes::points::PointCollection;
pub use shapes::registry::{ShapeBuilder, ShapeRegistry};
