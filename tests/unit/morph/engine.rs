use super::*;
use crate::foundation::core::Bounds;
use crate::shapes::curves::Rings;

#[derive(Debug)]
struct BrokenShape;

impl TargetShape for BrokenShape {
    fn name(&self) -> &str {
        "broken"
    }

    fn distance(&self, _p: Point) -> f64 {
        f64::NAN
    }
}

fn grid_dataset() -> Dataset {
    let bounds = Bounds::new(0.0, 100.0, 0.0, 100.0).unwrap();
    let points = (0..20)
        .map(|i| Point::new(10.0 + 4.0 * (i % 5) as f64, 20.0 + 15.0 * (i / 5) as f64))
        .collect();
    Dataset::new("grid", points, bounds).unwrap()
}

fn quick_config() -> RunConfig {
    RunConfig {
        iterations: 200,
        decimals: 1,
        num_frames: 20,
        seed: Some(7),
        ..RunConfig::default()
    }
}

#[test]
fn statistics_hold_at_the_configured_precision() {
    let start = grid_dataset();
    let circle = Rings::circle(&start);
    let config = quick_config();

    let out = morph(&start, &circle, &config).unwrap();
    let before = compute_statistics(&start, config.decimals).unwrap();
    let after = compute_statistics(&out.dataset, config.decimals).unwrap();
    assert!(before.matches(&after));
}

#[test]
fn every_snapshot_stays_in_bounds() {
    let start = grid_dataset();
    let circle = Rings::circle(&start);
    let out = morph(&start, &circle, &quick_config()).unwrap();

    for frame in &out.frames {
        for p in &frame.dataset.points {
            assert!(start.bounds.contains(*p));
        }
    }
}

#[test]
fn equal_seeds_reproduce_bit_for_bit() {
    let start = grid_dataset();
    let circle = Rings::circle(&start);
    let config = quick_config();

    let a = morph(&start, &circle, &config).unwrap();
    let b = morph(&start, &circle, &config).unwrap();
    assert_eq!(a.dataset, b.dataset);
    assert_eq!(a.frames, b.frames);
}

#[test]
fn too_small_datasets_fail_fast() {
    let bounds = Bounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let start = Dataset::new("tiny", vec![Point::new(5.0, 5.0)], bounds).unwrap();
    let circle = Rings::circle(&start);
    let err = morph(&start, &circle, &quick_config()).unwrap_err();
    assert!(matches!(err, MorphError::Dataset(_)));
}

#[test]
fn invalid_configs_fail_before_any_work() {
    let start = grid_dataset();
    let circle = Rings::circle(&start);
    let config = RunConfig {
        iterations: 10,
        freeze_for: 10,
        ..quick_config()
    };
    let err = morph(&start, &circle, &config).unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));
}

#[test]
fn non_finite_target_distances_fail_the_probe() {
    let start = grid_dataset();
    let err = morph(&start, &BrokenShape, &quick_config()).unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));
    assert!(err.to_string().contains("invalid distance"));
}

#[test]
fn cancelling_before_the_first_iteration_returns_the_start() {
    let start = grid_dataset();
    let circle = Rings::circle(&start);
    let cancel = CancelToken::new();
    cancel.cancel();

    let out = morph_with_cancel(&start, &circle, &quick_config(), &cancel).unwrap();
    assert_eq!(out.dataset, start);
    assert!(out.frames.is_empty());
}

#[test]
fn frozen_iterations_never_mutate() {
    let start = grid_dataset();
    let circle = Rings::circle(&start);
    let config = RunConfig {
        iterations: 60,
        freeze_for: 20,
        num_frames: 60,
        forward_only: true,
        ..quick_config()
    };

    let out = morph(&start, &circle, &config).unwrap();
    // Every iteration is recorded, so frames index directly by iteration.
    assert_eq!(out.frames.len(), 60);
    let settled = &out.frames[40].dataset;
    for frame in &out.frames[40..] {
        assert_eq!(&frame.dataset, settled);
    }
    assert_eq!(&out.frames[59].dataset, &out.dataset);
}
