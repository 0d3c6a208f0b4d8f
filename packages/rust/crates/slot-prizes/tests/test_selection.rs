//! Selection engine tests.

mod common;

use common::{prize, weighted};
use slot_prizes::{SelectionError, odds, select, select_index, select_scaled};

#[test]
fn test_scaled_draw_inside_first_range() {
    let snapshot = weighted(&[(1, 10.0), (2, 90.0)]);
    assert_eq!(select_scaled(&snapshot, 5.0).unwrap().id, 1);
}

#[test]
fn test_scaled_draw_inside_second_range() {
    let snapshot = weighted(&[(1, 10.0), (2, 90.0)]);
    assert_eq!(select_scaled(&snapshot, 50.0).unwrap().id, 2);
}

#[test]
fn test_unit_sample_is_scaled_by_total() {
    let snapshot = weighted(&[(1, 10.0), (2, 90.0)]);
    assert_eq!(select(&snapshot, 0.05).unwrap().id, 1);
    assert_eq!(select(&snapshot, 0.5).unwrap().id, 2);
}

#[test]
fn test_boundary_belongs_to_next_range() {
    // [0, 10) is id 1, so exactly 10 starts id 2's range.
    let snapshot = weighted(&[(1, 10.0), (2, 90.0)]);
    assert_eq!(select_scaled(&snapshot, 10.0).unwrap().id, 2);
    assert_eq!(select(&snapshot, 0.1).unwrap().id, 2);
}

#[test]
fn test_zero_weight_record_never_selected_when_total_positive() {
    let snapshot = weighted(&[(1, 5.0), (2, 0.0), (3, 5.0)]);
    assert_eq!(select_scaled(&snapshot, 5.0).unwrap().id, 3);
    for step in 0..100 {
        let sample = f64::from(step) / 100.0;
        assert_ne!(select(&snapshot, sample).unwrap().id, 2);
    }
}

#[test]
fn test_earlier_record_wins_equal_ranges() {
    let snapshot = weighted(&[(1, 50.0), (2, 50.0)]);
    assert_eq!(select(&snapshot, 0.0).unwrap().id, 1);
    assert_eq!(select(&snapshot, 0.499_999).unwrap().id, 1);
    assert_eq!(select(&snapshot, 0.5).unwrap().id, 2);
}

#[test]
fn test_value_past_total_falls_back_to_last() {
    let snapshot = weighted(&[(1, 10.0), (2, 90.0)]);
    assert_eq!(select_scaled(&snapshot, 100.0).unwrap().id, 2);
    assert_eq!(select_scaled(&snapshot, 1e9).unwrap().id, 2);
}

#[test]
fn test_largest_sample_selects_last_record() {
    let snapshot = weighted(&[(1, 0.1), (2, 0.2)]);
    let largest_sample = 1.0 - f64::EPSILON / 2.0;
    assert_eq!(select(&snapshot, largest_sample).unwrap().id, 2);
}

#[test]
fn test_single_record_always_selected() {
    let snapshot = vec![prize(7, 3.0)];
    for step in 0..50 {
        let sample = f64::from(step) / 50.0;
        assert_eq!(select(&snapshot, sample).unwrap().id, 7);
    }
}

#[test]
fn test_single_zero_weight_record_always_selected() {
    let snapshot = vec![prize(7, 0.0)];
    assert_eq!(select(&snapshot, 0.9).unwrap().id, 7);
    assert_eq!(select_scaled(&snapshot, 0.0).unwrap().id, 7);
}

#[test]
fn test_zero_total_falls_back_to_uniform_pick() {
    let snapshot = weighted(&[(1, 0.0), (2, 0.0)]);
    assert_eq!(select(&snapshot, 0.0).unwrap().id, 1);
    assert_eq!(select(&snapshot, 0.49).unwrap().id, 1);
    assert_eq!(select(&snapshot, 0.5).unwrap().id, 2);
    assert_eq!(select(&snapshot, 0.99).unwrap().id, 2);
}

#[test]
fn test_zero_total_uniform_pick_covers_every_record() {
    let snapshot = weighted(&[(1, 0.0), (2, 0.0), (3, 0.0), (4, 0.0)]);
    let picked: Vec<usize> = [0.0, 0.25, 0.5, 0.75]
        .iter()
        .map(|&sample| select_index(&snapshot, sample).unwrap())
        .collect();
    assert_eq!(picked, vec![0, 1, 2, 3]);
}

#[test]
fn test_empty_snapshot_is_an_error() {
    assert_eq!(
        select(&[], 0.5).unwrap_err(),
        SelectionError::EmptyRegistrySnapshot
    );
    assert_eq!(
        select_scaled(&[], 0.0).unwrap_err(),
        SelectionError::EmptyRegistrySnapshot
    );
}

#[test]
fn test_out_of_range_sample_is_rejected() {
    let snapshot = weighted(&[(1, 1.0)]);
    assert!(matches!(
        select(&snapshot, 1.0),
        Err(SelectionError::InvalidSample(_))
    ));
    assert!(matches!(
        select(&snapshot, -0.1),
        Err(SelectionError::InvalidSample(_))
    ));
    assert!(matches!(
        select(&snapshot, f64::NAN),
        Err(SelectionError::InvalidSample(_))
    ));
    assert!(matches!(
        select_scaled(&snapshot, -1.0),
        Err(SelectionError::InvalidSample(_))
    ));
}

#[test]
fn test_select_is_deterministic() {
    let snapshot = weighted(&[(1, 3.0), (2, 7.0), (3, 1.5)]);
    for step in 0..200 {
        let sample = f64::from(step) / 200.0;
        let first = select(&snapshot, sample).unwrap();
        let second = select(&snapshot, sample).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_odds_normalize_weights() {
    let snapshot = weighted(&[(1, 1.0), (2, 3.0)]);
    let odds = odds(&snapshot);
    assert_eq!(odds.len(), 2);
    assert!((odds[0].share - 0.25).abs() < 1e-12);
    assert!((odds[1].percent - 75.0).abs() < 1e-9);
}

#[test]
fn test_odds_sum_to_one() {
    let snapshot = weighted(&[(1, 5.0), (2, 8.0), (3, 13.0), (4, 0.0)]);
    let total: f64 = odds(&snapshot).iter().map(|entry| entry.share).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn test_odds_uniform_when_total_is_zero() {
    let snapshot = weighted(&[(1, 0.0), (2, 0.0), (3, 0.0), (4, 0.0)]);
    for entry in odds(&snapshot) {
        assert!((entry.share - 0.25).abs() < 1e-12);
    }
}
