//! Summary statistics the morph must hold fixed.
//!
//! Statistics are recomputed from scratch on every call rather than
//! maintained incrementally; the point counts involved are small and a fresh
//! pass avoids floating-point drift across hundreds of thousands of updates.

use crate::data::dataset::Dataset;
use crate::foundation::error::{MorphError, MorphResult};

/// The five summary values preserved by a morph, rounded to a fixed number
/// of decimals. Two datasets are statistically equivalent at that precision
/// iff their `SummaryStatistics` are equal component-wise.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryStatistics {
    /// Mean of x, rounded.
    pub mean_x: f64,
    /// Mean of y, rounded.
    pub mean_y: f64,
    /// Sample standard deviation of x (n-1 denominator), rounded.
    pub std_x: f64,
    /// Sample standard deviation of y (n-1 denominator), rounded.
    pub std_y: f64,
    /// Sample Pearson correlation of x and y, rounded.
    pub correlation: f64,
    /// Decimal precision the fields were rounded to.
    pub decimals: u8,
}

impl SummaryStatistics {
    /// Exact equality of the already-rounded fields.
    pub fn matches(&self, other: &SummaryStatistics) -> bool {
        self == other
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Compute the rounded summary statistics of a dataset.
///
/// Fails with [`MorphError::Dataset`] when the dataset has fewer than 2
/// points; sample statistics are undefined below that.
pub fn compute_statistics(dataset: &Dataset, decimals: u8) -> MorphResult<SummaryStatistics> {
    let n = dataset.points.len();
    if n < 2 {
        return Err(MorphError::dataset(format!(
            "dataset '{}' needs at least 2 points to compute statistics, has {n}",
            dataset.name
        )));
    }

    let n_f = n as f64;
    let (mut sum_x, mut sum_y) = (0.0f64, 0.0f64);
    for p in &dataset.points {
        sum_x += p.x;
        sum_y += p.y;
    }
    let mean_x = sum_x / n_f;
    let mean_y = sum_y / n_f;

    let (mut ss_x, mut ss_y, mut ss_xy) = (0.0f64, 0.0f64, 0.0f64);
    for p in &dataset.points {
        let dx = p.x - mean_x;
        let dy = p.y - mean_y;
        ss_x += dx * dx;
        ss_y += dy * dy;
        ss_xy += dx * dy;
    }

    let std_x = (ss_x / (n_f - 1.0)).sqrt();
    let std_y = (ss_y / (n_f - 1.0)).sqrt();
    // Zero-variance clouds have no defined correlation; report 0 rather than
    // poisoning the comparison with NaN.
    let denom = (ss_x * ss_y).sqrt();
    let correlation = if denom == 0.0 { 0.0 } else { ss_xy / denom };

    Ok(SummaryStatistics {
        mean_x: round_to(mean_x, decimals),
        mean_y: round_to(mean_y, decimals),
        std_x: round_to(std_x, decimals),
        std_y: round_to(std_y, decimals),
        correlation: round_to(correlation, decimals),
        decimals,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/data/stats.rs"]
mod tests;
