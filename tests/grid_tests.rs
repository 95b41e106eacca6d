// Host-side tests for the media grid planning logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod grid {
    include!("../src/core/grid.rs");
}

use constants::{GRID_COLUMNS_DESKTOP, GRID_COLUMNS_MOBILE, GRID_MOBILE_BREAKPOINT};
use grid::{column_assignments, column_count, first_batch_size, tile_sequence, MediaKind};

#[test]
fn twelve_items_across_five_columns_round_robin() {
    let cols = column_assignments(12, 5);
    assert_eq!(cols.len(), 5);
    assert_eq!(cols[0], vec![0, 5, 10]);
    assert_eq!(cols[1], vec![1, 6, 11]);
    assert_eq!(cols[2], vec![2, 7]);
    assert_eq!(cols[3], vec![3, 8]);
    assert_eq!(cols[4], vec![4, 9]);
}

#[test]
fn every_item_lands_in_exactly_one_column() {
    for (items, columns) in [(12usize, 5usize), (7, 3), (1, 5), (30, 3)] {
        let mut seen: Vec<usize> = column_assignments(items, columns)
            .into_iter()
            .flatten()
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..items).collect::<Vec<_>>(), "{items} items, {columns} columns");
    }
}

#[test]
fn rendered_sequence_is_the_assignment_doubled() {
    assert_eq!(tile_sequence(&[0, 5, 10]), vec![0, 5, 10, 0, 5, 10]);
    assert!(tile_sequence(&[]).is_empty());
}

#[test]
fn column_count_switches_at_the_breakpoint() {
    assert_eq!(column_count(320.0), GRID_COLUMNS_MOBILE);
    assert_eq!(column_count(GRID_MOBILE_BREAKPOINT), GRID_COLUMNS_MOBILE);
    assert_eq!(column_count(GRID_MOBILE_BREAKPOINT + 1.0), GRID_COLUMNS_DESKTOP);
    assert_eq!(column_count(1920.0), GRID_COLUMNS_DESKTOP);
}

#[test]
fn first_batch_caps_at_the_available_media() {
    assert_eq!(first_batch_size(5, 100), 20);
    assert_eq!(first_batch_size(3, 100), 12);
    assert_eq!(first_batch_size(5, 7), 7);
    assert_eq!(first_batch_size(5, 0), 0);
}

#[test]
fn empty_media_list_populates_nothing() {
    let cols = column_assignments(0, 5);
    assert_eq!(cols.len(), 5);
    assert!(cols.iter().all(|c| c.is_empty()));
    assert!(column_assignments(10, 0).is_empty());
}

#[test]
fn media_kind_defaults_to_image() {
    assert_eq!(MediaKind::from_type("video"), MediaKind::Video);
    assert_eq!(MediaKind::from_type("image"), MediaKind::Image);
    assert_eq!(MediaKind::from_type("gif"), MediaKind::Image);
    assert_eq!(MediaKind::from_type(""), MediaKind::Image);
}
