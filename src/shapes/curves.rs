//! Closed-curve shapes built from circles.
//!
//! Distance to a circle outline is the absolute difference between the
//! point's distance to the center and the radius, so points are pulled onto
//! the ring from both sides.

use crate::data::dataset::Dataset;
use crate::foundation::core::Point;
use crate::shapes::TargetShape;

/// One or more concentric rings sized from the dataset bounds.
#[derive(Clone, Debug)]
pub struct Rings {
    name: String,
    center: Point,
    radii: Vec<f64>,
}

impl Rings {
    /// A single ring at 30% of the smaller bounds span.
    pub fn circle(dataset: &Dataset) -> Self {
        Self::evenly_spaced("circle", dataset, 1)
    }

    /// Two concentric rings.
    pub fn bullseye(dataset: &Dataset) -> Self {
        Self::evenly_spaced("bullseye", dataset, 2)
    }

    /// Four concentric rings.
    pub fn rings(dataset: &Dataset) -> Self {
        Self::evenly_spaced("rings", dataset, 4)
    }

    fn evenly_spaced(name: &str, dataset: &Dataset, count: usize) -> Self {
        let b = dataset.bounds;
        let outer = 0.3 * b.x_span().min(b.y_span());
        let radii = (1..=count).map(|i| outer * i as f64 / count as f64).collect();
        Self {
            name: name.to_string(),
            center: b.center(),
            radii,
        }
    }
}

impl TargetShape for Rings {
    fn name(&self) -> &str {
        &self.name
    }

    fn distance(&self, p: Point) -> f64 {
        let from_center = self.center.distance(p);
        self.radii
            .iter()
            .map(|r| (from_center - r).abs())
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/curves.rs"]
mod tests;
