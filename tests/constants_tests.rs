// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Distances should be positive
    assert!(RUN_AWAY_DISTANCE > 0.0);
    assert!(PUSH_OVERSHOOT > 0.0);
    assert!(EDGE_PADDING > 0.0);
    assert!(NEAR_NO_DISTANCE > 0.0);

    // Smoothing should be a usable interpolation fraction
    assert!(NO_LERP > 0.0 && NO_LERP <= 1.0);

    // Particle tuning should be positive
    assert!(BURST_SPEED_MIN > 0.0 && BURST_SPEED_SPAN > 0.0);
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_SPAN > 0.0);
    assert!(PARTICLE_DECAY_MIN > 0.0 && PARTICLE_DECAY_SPAN > 0.0);
    assert!(PARTICLE_GRAVITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Growth should start before evasion triggers
    assert!(NEAR_NO_DISTANCE > RUN_AWAY_DISTANCE);

    // The grown scale should exceed the resting scale
    assert!(YES_GROW_MAX > YES_GROW_MIN);
    assert!(YES_GROW_MIN == 1.0);

    // Burst origins should stay inside the viewport
    assert!(BURST_REGION_X_MIN + BURST_REGION_X_SPAN <= 1.0);
    assert!(BURST_REGION_Y_MIN + BURST_REGION_Y_SPAN <= 1.0);

    // The narrow layout should use fewer columns
    assert!(GRID_COLUMNS_MOBILE > 0);
    assert!(GRID_COLUMNS_MOBILE < GRID_COLUMNS_DESKTOP);
    assert!(GRID_MOBILE_BREAKPOINT > 0.0);
    assert!(FIRST_BATCH_ROWS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_schedule_fits_the_window() {
    // one immediate burst plus one per interval strictly inside the window
    let interval_bursts = (BURST_WINDOW_MS - 1) / BURST_INTERVAL_MS;
    assert_eq!(interval_bursts, 8);
    assert_eq!(interval_bursts * BURST_INTERVAL_MS, 4_800);
    assert!(interval_bursts * BURST_INTERVAL_MS < BURST_WINDOW_MS);
    assert_eq!(1 + interval_bursts, 9);

    // the celebration is fully over once the drain grace elapses
    assert_eq!(BURST_WINDOW_MS + DRAIN_GRACE_MS, 9_000);
    assert!(REVEAL_TIMEOUT_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_and_counts_match_the_design() {
    assert_eq!(FIREWORKS_PALETTE.len(), 6);
    assert!(FIREWORKS_PALETTE.iter().all(|c| c.starts_with('#')));
    assert!(BURST_COUNT_MIN > 0);
    assert!(BURST_COUNT_SPAN > 0);

    // the slowest fade still dies within a bounded number of frames
    assert!(1.0 / PARTICLE_DECAY_MIN <= 126.0);
}
