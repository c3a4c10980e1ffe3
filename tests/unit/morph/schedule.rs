use super::*;
use crate::foundation::core::Bounds;

fn bounds() -> Bounds {
    Bounds::new(0.0, 100.0, 0.0, 50.0).unwrap()
}

fn config(iterations: usize, freeze_for: usize, ramp_in: bool, ramp_out: bool) -> RunConfig {
    RunConfig {
        iterations,
        freeze_for,
        ramp_in,
        ramp_out,
        ..RunConfig::default()
    }
}

#[test]
fn ease_in_out_quad_hits_the_anchors() {
    assert_eq!(Ease::InOutQuad.apply(0.0), 0.0);
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert_eq!(Ease::InOutQuad.apply(1.0), 1.0);
    // Out-of-range inputs clamp instead of extrapolating.
    assert_eq!(Ease::InOutQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::InOutQuad.apply(2.0), 1.0);
}

#[test]
fn no_ramps_means_full_step_everywhere() {
    let schedule = Schedule::new(&config(1000, 0, false, false), &bounds());
    for i in [0, 1, 500, 999] {
        assert_eq!(schedule.ramp_factor(i), 1.0);
    }
}

#[test]
fn ramp_in_rises_monotonically_from_the_floor() {
    let schedule = Schedule::new(&config(1000, 0, true, false), &bounds());
    assert!((schedule.ramp_factor(0) - 0.1).abs() < 1e-12);
    let mut prev = 0.0;
    for i in 0..100 {
        let r = schedule.ramp_factor(i);
        assert!(r >= prev);
        prev = r;
    }
    assert_eq!(schedule.ramp_factor(100), 1.0);
    assert_eq!(schedule.ramp_factor(500), 1.0);
}

#[test]
fn ramp_out_falls_back_toward_the_floor_before_the_freeze() {
    let schedule = Schedule::new(&config(1000, 200, false, true), &bounds());
    // Active window is 800 iterations, ramp window 80.
    assert_eq!(schedule.freeze_start(), 800);
    assert_eq!(schedule.ramp_factor(719), 1.0);
    let mut prev = f64::INFINITY;
    for i in 720..800 {
        let r = schedule.ramp_factor(i);
        assert!(r <= prev);
        prev = r;
    }
    assert!(schedule.ramp_factor(799) < 0.2);
}

#[test]
fn temperature_eases_down_to_zero() {
    let schedule = Schedule::new(&config(1000, 0, false, false), &bounds());
    assert!((schedule.temperature(0) - 0.4).abs() < 1e-12);
    assert!(schedule.temperature(500) < schedule.temperature(100));
    assert!(schedule.temperature(999) < 0.01);
}

#[test]
fn step_scales_with_the_larger_span() {
    let schedule = Schedule::new(&config(1000, 0, false, false), &bounds());
    assert!((schedule.step(500) - 0.3).abs() < 1e-12);
    assert!((schedule.allowed_distance() - 2.0).abs() < 1e-12);
}
