//! Tests for folding layers into one overall fraction.

use pullbar::progress::{Aggregate, Aggregator, LayerTracker};

mod common;
use common::helpers::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_aggregate_empty_tracker() {
    let aggregate = Aggregate::measure(&LayerTracker::new());
    assert_eq!(aggregate.fraction, 0.0);
    assert!(!aggregate.all_done);
}

#[test]
fn test_aggregate_byte_weighted_fraction() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 50, 100));
    tracker.observe(&layer("b", "Downloading", 0, 200));

    let aggregate = Aggregate::measure(&tracker);
    assert_eq!((aggregate.sum_current, aggregate.sum_total), (50, 300));
    assert!(approx(aggregate.fraction, 50.0 / 300.0));
}

#[test]
fn test_aggregate_excludes_unknown_sizes() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 25, 100));
    tracker.observe(&layer("b", "Already exists", 0, 0));
    tracker.observe(&layer("c", "Downloading", 999, 0));

    let aggregate = Aggregate::measure(&tracker);
    assert_eq!((aggregate.sum_current, aggregate.sum_total), (25, 100));
    assert!(approx(aggregate.fraction, 0.25));
}

#[test]
fn test_already_exists_counts_toward_all_done_only() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Already exists", 0, 0));
    tracker.observe(&layer("b", "Already exists", 0, 0));

    let aggregate = Aggregate::measure(&tracker);
    assert!(aggregate.all_done);
    assert_eq!((aggregate.sum_current, aggregate.sum_total), (0, 0));
    assert_eq!(aggregate.fraction, 0.0);
}

#[test]
fn test_download_complete_is_not_finished() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Pull complete", 100, 100));
    tracker.observe(&layer("b", "Download complete", 0, 0));

    assert!(!Aggregate::measure(&tracker).all_done);

    tracker.observe(&layer("b", "Pull complete", 0, 0));
    assert!(Aggregate::measure(&tracker).all_done);
}

#[test]
fn test_unfinished_pull_is_held_below_one() {
    let mut tracker = LayerTracker::new();
    let mut aggregator = Aggregator::new();
    tracker.observe(&layer("a", "Download complete", 100, 100));
    tracker.observe(&layer("b", "Waiting", 0, 0));

    let aggregate = aggregator.compute(&tracker);
    assert!(!aggregate.all_done);
    assert_eq!(aggregate.fraction, 0.99);
}

#[test]
fn test_fraction_below_threshold_is_not_clamped() {
    let mut tracker = LayerTracker::new();
    let mut aggregator = Aggregator::new();
    tracker.observe(&layer("a", "Downloading", 995, 1000));

    assert!(approx(aggregator.compute(&tracker).fraction, 0.995));
}

#[test]
fn test_fraction_never_decreases() {
    let mut tracker = LayerTracker::new();
    let mut aggregator = Aggregator::new();
    let mut shown = Vec::new();

    tracker.observe(&layer("a", "Downloading", 80, 100));
    shown.push(aggregator.compute(&tracker).fraction);
    // A new, larger layer drags the raw fraction down.
    tracker.observe(&layer("b", "Downloading", 0, 900));
    shown.push(aggregator.compute(&tracker).fraction);
    tracker.observe(&layer("b", "Downloading", 450, 900));
    shown.push(aggregator.compute(&tracker).fraction);

    assert_non_decreasing(&shown);
    assert!(approx(shown[1], 0.8));
    assert!(approx(aggregator.last_rendered(), 0.8));
}

#[test]
fn test_force_complete() {
    let mut aggregator = Aggregator::new();
    assert_eq!(aggregator.force_complete(), 1.0);
    assert_eq!(aggregator.last_rendered(), 1.0);
}
