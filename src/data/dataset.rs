use crate::foundation::core::{Bounds, Point};
use crate::foundation::error::{MorphError, MorphResult};

/// A named, ordered 2D point cloud with the domain bounds it must stay inside.
///
/// Point order is stable and only meaningful for indexing. The bounds
/// invariant (`Bounds::contains` for every point) is checked on construction
/// and preserved by the engine for every externally observable snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    /// Human-readable dataset name (built-in name or file stem).
    pub name: String,
    /// The point cloud.
    pub points: Vec<Point>,
    /// Domain bounds for all points.
    pub bounds: Bounds,
}

impl Dataset {
    /// Build a dataset, validating the bounds invariant.
    pub fn new(name: impl Into<String>, points: Vec<Point>, bounds: Bounds) -> MorphResult<Self> {
        let name = name.into();
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(MorphError::dataset(format!(
                    "point {i} of '{name}' is not finite"
                )));
            }
            if !bounds.contains(*p) {
                return Err(MorphError::dataset(format!(
                    "point {i} of '{name}' ({}, {}) lies outside bounds",
                    p.x, p.y
                )));
            }
        }
        Ok(Self {
            name,
            points,
            bounds,
        })
    }

    /// Build a dataset whose bounds are derived from the data (5% padding).
    pub fn with_derived_bounds(name: impl Into<String>, points: Vec<Point>) -> MorphResult<Self> {
        let bounds = Bounds::around(&points)?;
        Self::new(name, points, bounds)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
