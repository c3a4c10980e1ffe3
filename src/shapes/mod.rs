//! Target shapes the engine morphs toward.
//!
//! The engine only ever sees [`TargetShape::distance`]; everything else about
//! a shape (how it is sized, which family it belongs to) is resolved when the
//! registry builds it from the start dataset.

pub mod curves;
pub mod lines;
pub mod points;
pub mod registry;

use crate::foundation::core::Point;

/// A geometric target exposing a point-to-shape distance.
///
/// Implementations must be pure and deterministic, and must return a finite,
/// non-negative distance for every point inside the dataset bounds.
pub trait TargetShape: Send + Sync + std::fmt::Debug {
    /// Registry name of the shape.
    fn name(&self) -> &str;

    /// Distance from `p` to the nearest part of the shape.
    fn distance(&self, p: Point) -> f64;
}

/// Distance from `p` to the closest of several segments.
pub(crate) fn min_segment_distance(segments: &[kurbo::Line], p: Point) -> f64 {
    use kurbo::ParamCurveNearest as _;

    segments
        .iter()
        .map(|seg| seg.nearest(p, 1e-9).distance_sq.sqrt())
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `p` to the closest of several points.
pub(crate) fn min_point_distance(targets: &[Point], p: Point) -> f64 {
    targets
        .iter()
        .map(|t| t.distance(p))
        .fold(f64::INFINITY, f64::min)
}
