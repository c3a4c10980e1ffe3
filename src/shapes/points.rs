//! Discrete point-set shapes: distance is the gap to the nearest target point.

use crate::data::dataset::Dataset;
use crate::foundation::core::Point;
use crate::shapes::{TargetShape, min_point_distance};

/// A fixed collection of target points.
#[derive(Clone, Debug)]
pub struct PointCollection {
    name: String,
    targets: Vec<Point>,
    /// Distance below this counts as already on the shape.
    slack: f64,
}

impl PointCollection {
    /// A 3x3 grid of dots at 25/50/75% of each bounds span.
    pub fn dots(dataset: &Dataset) -> Self {
        let b = dataset.bounds;
        let mut targets = Vec::with_capacity(9);
        for xf in [0.25, 0.5, 0.75] {
            for yf in [0.25, 0.5, 0.75] {
                targets.push(Point::new(
                    b.xmin + xf * b.x_span(),
                    b.ymin + yf * b.y_span(),
                ));
            }
        }
        Self {
            name: "dots".to_string(),
            targets,
            slack: 0.0,
        }
    }

    /// A heart outline sampled from the classic parametric curve, scaled to
    /// fit inside the bounds.
    pub fn heart(dataset: &Dataset) -> Self {
        let b = dataset.bounds;
        let center = b.center();
        // The parametric curve spans x in [-16, 16] and y in [-17, 13].
        let scale = 0.4 * b.x_span().min(b.y_span()) / 17.0;
        let targets = (0..120)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / 120.0;
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                Point::new(center.x + scale * x, center.y + scale * y)
            })
            .collect();
        Self {
            name: "heart".to_string(),
            targets,
            slack: 0.0,
        }
    }

    /// The start dataset's own points with a little slack, so the cloud
    /// reshuffles into a noisy copy of itself.
    pub fn scatter(dataset: &Dataset) -> Self {
        Self {
            name: "scatter".to_string(),
            targets: dataset.points.clone(),
            slack: 0.05 * dataset.bounds.max_span(),
        }
    }
}

impl TargetShape for PointCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn distance(&self, p: Point) -> f64 {
        (min_point_distance(&self.targets, p) - self.slack).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/points.rs"]
mod tests;
