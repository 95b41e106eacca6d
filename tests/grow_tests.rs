// Host-side tests for the affirmative-control growth curve.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod grow {
    include!("../src/core/grow.rs");
}

use constants::{NEAR_NO_DISTANCE, YES_GROW_MAX, YES_GROW_MIN};
use grow::{yes_scale, GrowParams};

#[test]
fn endpoints_are_exact() {
    let p = GrowParams::default();
    assert_eq!(yes_scale(0.0, &p), YES_GROW_MAX);
    assert_eq!(yes_scale(NEAR_NO_DISTANCE, &p), YES_GROW_MIN);
    assert_eq!(yes_scale(NEAR_NO_DISTANCE + 500.0, &p), YES_GROW_MIN);
}

#[test]
fn scale_decreases_monotonically_with_distance() {
    let p = GrowParams::default();
    let mut prev = yes_scale(0.0, &p);
    for d in 1..=(NEAR_NO_DISTANCE as u32) {
        let s = yes_scale(d as f32, &p);
        assert!(s < prev, "scale not decreasing at distance {d}");
        prev = s;
    }
}

#[test]
fn scale_stays_inside_the_advertised_range() {
    let p = GrowParams::default();
    for d in 0..400 {
        let s = yes_scale(d as f32, &p);
        assert!((YES_GROW_MIN..=YES_GROW_MAX).contains(&s), "distance {d} gave {s}");
    }
}

#[test]
fn growth_is_continuous_at_the_near_boundary() {
    let p = GrowParams::default();
    let just_inside = yes_scale(NEAR_NO_DISTANCE - 1e-3, &p);
    assert!((just_inside - YES_GROW_MIN).abs() < 1e-4);
}

#[test]
fn midpoint_grows_halfway() {
    let p = GrowParams::default();
    let s = yes_scale(NEAR_NO_DISTANCE / 2.0, &p);
    let expected = YES_GROW_MIN + (YES_GROW_MAX - YES_GROW_MIN) * 0.5;
    assert!((s - expected).abs() < 1e-6);
}
