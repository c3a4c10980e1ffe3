use super::*;
use crate::foundation::core::Bounds;

fn square_dataset() -> Dataset {
    let bounds = Bounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
    Dataset::new(
        "square",
        vec![Point::new(2.0, 2.0), Point::new(8.0, 8.0)],
        bounds,
    )
    .unwrap()
}

#[test]
fn dots_sit_on_the_quarter_grid() {
    let ds = square_dataset();
    let dots = PointCollection::dots(&ds);
    for (x, y) in [(2.5, 2.5), (5.0, 5.0), (7.5, 7.5), (2.5, 7.5)] {
        assert!((dots.distance(Point::new(x, y))).abs() < 1e-12);
    }
    assert!((dots.distance(Point::new(2.5, 3.5)) - 1.0).abs() < 1e-12);
}

#[test]
fn scatter_allows_slack_around_original_points() {
    let ds = square_dataset();
    let scatter = PointCollection::scatter(&ds);
    assert_eq!(scatter.distance(Point::new(2.0, 2.0)), 0.0);
    // Slack is 5% of the 10-unit span.
    assert_eq!(scatter.distance(Point::new(2.3, 2.0)), 0.0);
    assert!(scatter.distance(Point::new(4.0, 2.0)) > 0.0);
}

#[test]
fn heart_outline_is_finite_and_nonnegative() {
    let ds = square_dataset();
    let heart = PointCollection::heart(&ds);
    for x in 0..=10 {
        for y in 0..=10 {
            let d = heart.distance(Point::new(x as f64, y as f64));
            assert!(d.is_finite());
            assert!(d >= 0.0);
        }
    }
}

#[test]
fn heart_is_left_right_symmetric() {
    let ds = square_dataset();
    let heart = PointCollection::heart(&ds);
    let left = heart.distance(Point::new(3.0, 6.0));
    let right = heart.distance(Point::new(7.0, 6.0));
    assert!((left - right).abs() < 1e-9);
}
