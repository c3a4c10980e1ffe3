use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{Point, Vec2};

/// Axis-aligned domain bounds every dataset point must stay inside.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Minimum x, inclusive.
    pub xmin: f64,
    /// Maximum x, inclusive.
    pub xmax: f64,
    /// Minimum y, inclusive.
    pub ymin: f64,
    /// Maximum y, inclusive.
    pub ymax: f64,
}

impl Bounds {
    /// Build validated bounds.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> MorphResult<Self> {
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(MorphError::configuration("bounds must be finite"));
        }
        if xmin >= xmax {
            return Err(MorphError::configuration("bounds xmin must be < xmax"));
        }
        if ymin >= ymax {
            return Err(MorphError::configuration("bounds ymin must be < ymax"));
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Symmetric bounds: the same min/max applied to both axes.
    pub fn symmetric(min: f64, max: f64) -> MorphResult<Self> {
        Self::new(min, max, min, max)
    }

    /// Derive bounds from a point cloud, padding each span by 5% on both ends.
    pub fn around(points: &[Point]) -> MorphResult<Self> {
        if points.is_empty() {
            return Err(MorphError::dataset("cannot derive bounds of an empty point cloud"));
        }
        let mut xmin = f64::INFINITY;
        let mut xmax = f64::NEG_INFINITY;
        let mut ymin = f64::INFINITY;
        let mut ymax = f64::NEG_INFINITY;
        for p in points {
            xmin = xmin.min(p.x);
            xmax = xmax.max(p.x);
            ymin = ymin.min(p.y);
            ymax = ymax.max(p.y);
        }
        // Degenerate spans (all points on one line) still need room to move.
        let x_pad = ((xmax - xmin) * 0.05).max(1.0);
        let y_pad = ((ymax - ymin) * 0.05).max(1.0);
        Self::new(xmin - x_pad, xmax + x_pad, ymin - y_pad, ymax + y_pad)
    }

    /// Whether `p` lies inside the bounds, edges included.
    pub fn contains(&self, p: Point) -> bool {
        self.xmin <= p.x && p.x <= self.xmax && self.ymin <= p.y && p.y <= self.ymax
    }

    /// Width of the x range.
    pub fn x_span(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height of the y range.
    pub fn y_span(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// The larger of the two spans.
    pub fn max_span(&self) -> f64 {
        self.x_span().max(self.y_span())
    }

    /// Center point of the bounded region.
    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// The four corner points, clockwise from (xmin, ymin).
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmin, self.ymax),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmax, self.ymin),
        ]
    }
}
