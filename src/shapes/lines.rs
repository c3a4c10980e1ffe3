//! Segment-collection shapes: distance is the gap to the nearest segment.

use kurbo::Line;

use crate::data::dataset::Dataset;
use crate::foundation::core::{Bounds, Point};
use crate::shapes::{TargetShape, min_segment_distance};

/// A fixed collection of line segments sized from the dataset bounds.
#[derive(Clone, Debug)]
pub struct LineCollection {
    name: String,
    segments: Vec<Line>,
}

impl LineCollection {
    /// The two diagonals of the bounds rectangle.
    pub fn x(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        Self {
            name: "x".to_string(),
            segments: vec![
                Line::new((b.xmin, b.ymin), (b.xmax, b.ymax)),
                Line::new((b.xmin, b.ymax), (b.xmax, b.ymin)),
            ],
        }
    }

    /// Five evenly spaced horizontal lines.
    pub fn h_lines(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        let segments = fractions(5)
            .map(|f| {
                let y = b.ymin + f * b.y_span();
                Line::new((b.xmin, y), (b.xmax, y))
            })
            .collect();
        Self {
            name: "h_lines".to_string(),
            segments,
        }
    }

    /// Five evenly spaced vertical lines.
    pub fn v_lines(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        let segments = fractions(5)
            .map(|f| {
                let x = b.xmin + f * b.x_span();
                Line::new((x, b.ymin), (x, b.ymax))
            })
            .collect();
        Self {
            name: "v_lines".to_string(),
            segments,
        }
    }

    /// Two horizontal lines pushed toward the top and bottom edges.
    pub fn high_lines(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        let lo = b.ymin + 0.1 * b.y_span();
        let hi = b.ymin + 0.9 * b.y_span();
        Self {
            name: "high_lines".to_string(),
            segments: vec![
                Line::new((b.xmin, lo), (b.xmax, lo)),
                Line::new((b.xmin, hi), (b.xmax, hi)),
            ],
        }
    }

    /// Two vertical lines pushed toward the left and right edges.
    pub fn wide_lines(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        let lo = b.xmin + 0.1 * b.x_span();
        let hi = b.xmin + 0.9 * b.x_span();
        Self {
            name: "wide_lines".to_string(),
            segments: vec![
                Line::new((lo, b.ymin), (lo, b.ymax)),
                Line::new((hi, b.ymin), (hi, b.ymax)),
            ],
        }
    }

    /// Five parallel diagonals rising left to right.
    pub fn slant_up(dataset: &Dataset) -> Self {
        Self {
            name: "slant_up".to_string(),
            segments: slants(inset(dataset.bounds), true),
        }
    }

    /// Five parallel diagonals falling left to right.
    pub fn slant_down(dataset: &Dataset) -> Self {
        Self {
            name: "slant_down".to_string(),
            segments: slants(inset(dataset.bounds), false),
        }
    }

    /// The four edges of the inset bounds rectangle.
    pub fn rectangle(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        Self {
            name: "rectangle".to_string(),
            segments: ring(&b.corners()),
        }
    }

    /// A diamond connecting the edge midpoints.
    pub fn diamond(dataset: &Dataset) -> Self {
        let b = inset(dataset.bounds);
        let c = b.center();
        let mids = [
            Point::new(c.x, b.ymin),
            Point::new(b.xmax, c.y),
            Point::new(c.x, b.ymax),
            Point::new(b.xmin, c.y),
        ];
        Self {
            name: "diamond".to_string(),
            segments: ring(&mids),
        }
    }

    /// A five-pointed star outline centered in the bounds.
    pub fn star(dataset: &Dataset) -> Self {
        let b = dataset.bounds;
        let c = b.center();
        let outer = 0.4 * b.x_span().min(b.y_span());
        let inner = outer * 0.4;
        let outline: Vec<Point> = (0..10)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                // Start at the top point, step by 36 degrees.
                let angle = std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * i as f64 / 10.0;
                Point::new(c.x + r * angle.cos(), c.y + r * angle.sin())
            })
            .collect();
        Self {
            name: "star".to_string(),
            segments: ring(&outline),
        }
    }
}

impl TargetShape for LineCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn distance(&self, p: Point) -> f64 {
        min_segment_distance(&self.segments, p)
    }
}

/// Shrink the bounds by 10% on each side so shapes sit inside the domain.
fn inset(b: Bounds) -> Bounds {
    let dx = 0.1 * b.x_span();
    let dy = 0.1 * b.y_span();
    Bounds {
        xmin: b.xmin + dx,
        xmax: b.xmax - dx,
        ymin: b.ymin + dy,
        ymax: b.ymax - dy,
    }
}

/// `count` evenly spaced fractions covering [0, 1].
fn fractions(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| i as f64 / (count - 1) as f64)
}

/// Close a polyline into a loop of segments.
fn ring(points: &[Point]) -> Vec<Line> {
    (0..points.len())
        .map(|i| Line::new(points[i], points[(i + 1) % points.len()]))
        .collect()
}

fn slants(b: Bounds, up: bool) -> Vec<Line> {
    // Each diagonal spans a fifth of the x range at full height.
    let width = b.x_span() / 5.0;
    (0..5)
        .map(|i| {
            let x0 = b.xmin + i as f64 * width;
            let x1 = x0 + width;
            if up {
                Line::new((x0, b.ymin), (x1, b.ymax))
            } else {
                Line::new((x0, b.ymax), (x1, b.ymin))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/lines.rs"]
mod tests;
