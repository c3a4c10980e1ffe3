use super::*;
use crate::foundation::core::{Bounds, Point};

fn dataset(points: &[(f64, f64)]) -> Dataset {
    let points = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    Dataset::new("test", points, Bounds::new(-100.0, 100.0, -100.0, 100.0).unwrap()).unwrap()
}

#[test]
fn perfectly_correlated_line() {
    let ds = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    let stats = compute_statistics(&ds, 3).unwrap();
    assert_eq!(stats.mean_x, 2.0);
    assert_eq!(stats.mean_y, 4.0);
    assert_eq!(stats.std_x, 1.0);
    assert_eq!(stats.std_y, 2.0);
    assert_eq!(stats.correlation, 1.0);
}

#[test]
fn anticorrelated_line() {
    let ds = dataset(&[(1.0, 6.0), (2.0, 4.0), (3.0, 2.0)]);
    let stats = compute_statistics(&ds, 3).unwrap();
    assert_eq!(stats.correlation, -1.0);
}

#[test]
fn zero_variance_reports_zero_correlation() {
    let ds = dataset(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]);
    let stats = compute_statistics(&ds, 3).unwrap();
    assert_eq!(stats.std_x, 0.0);
    assert_eq!(stats.correlation, 0.0);
}

#[test]
fn fewer_than_two_points_is_an_error() {
    let ds = dataset(&[(1.0, 1.0)]);
    let err = compute_statistics(&ds, 2).unwrap_err();
    assert!(err.to_string().contains("at least 2 points"));
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_to(0.5, 0), 1.0);
    assert_eq!(round_to(-0.5, 0), -1.0);
    assert_eq!(round_to(1.25, 1), 1.3);
    assert_eq!(round_to(1.23456, 2), 1.23);
}

#[test]
fn equivalence_is_exact_on_rounded_fields() {
    let a = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    let b = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    let sa = compute_statistics(&a, 2).unwrap();
    let sb = compute_statistics(&b, 2).unwrap();
    assert!(sa.matches(&sb));

    let c = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 7.0)]);
    let sc = compute_statistics(&c, 2).unwrap();
    assert!(!sa.matches(&sc));
}

#[test]
fn coarser_precision_tolerates_smaller_shifts() {
    let a = dataset(&[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)]);
    let b = dataset(&[(10.001, 10.0), (20.0, 20.0), (30.0, 30.0)]);
    let coarse_a = compute_statistics(&a, 1).unwrap();
    let coarse_b = compute_statistics(&b, 1).unwrap();
    assert!(coarse_a.matches(&coarse_b));

    let fine_a = compute_statistics(&a, 5).unwrap();
    let fine_b = compute_statistics(&b, 5).unwrap();
    assert!(!fine_a.matches(&fine_b));
}
