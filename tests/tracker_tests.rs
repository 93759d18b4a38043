//! Tests for the per-layer state table.

use pullbar::progress::{LayerState, LayerTracker};

mod common;
use common::helpers::*;

#[test]
fn test_tracker_records_first_seen_order() {
    let mut tracker = LayerTracker::new();
    assert!(tracker.observe(&layer("c", "Pulling fs layer", 0, 0)));
    assert!(tracker.observe(&layer("a", "Pulling fs layer", 0, 0)));
    assert!(!tracker.observe(&layer("c", "Waiting", 0, 0)));
    assert!(tracker.observe(&layer("b", "Downloading", 1, 10)));

    assert_eq!(tracker.order(), ["c", "a", "b"]);
    let ids: Vec<&str> = tracker.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["c", "a", "b"]);
    assert_eq!(tracker.len(), 3);
}

#[test]
fn test_tracker_ignores_global_events() {
    let mut tracker = LayerTracker::new();
    assert!(!tracker.observe(&header("Digest: sha256:abc")));
    assert!(tracker.is_empty());
}

#[test]
fn test_tracker_keeps_known_total() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 10, 100));
    tracker.observe(&layer("a", "Downloading", 20, 0));

    let state = tracker.get("a").unwrap();
    assert_eq!(state.total, 100);
    assert_eq!(state.current, 20);
}

#[test]
fn test_tracker_zero_current_does_not_clobber_sized_progress() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 40, 100));
    tracker.observe(&layer("a", "Downloading", 0, 100));

    assert_eq!(tracker.get("a").unwrap().current, 40);
}

#[test]
fn test_tracker_sizeless_status_moves_current() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 40, 100));
    tracker.observe(&layer("a", "Verifying Checksum", 0, 0));

    let state = tracker.get("a").unwrap();
    assert_eq!(state.current, 0);
    assert_eq!(state.status, "Verifying Checksum");
}

#[test]
fn test_tracker_empty_status_keeps_last_status() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 1, 10));
    tracker.observe(&layer("a", "", 2, 10));

    assert_eq!(tracker.get("a").unwrap().status, "Downloading");
}

#[test]
fn test_tracker_pull_complete_snaps_current() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Pull complete", 40, 100));

    assert_eq!(
        tracker.get("a").unwrap(),
        &LayerState {
            current: 100,
            total: 100,
            status: "Pull complete".into(),
            done: true,
        }
    );
}

#[test]
fn test_tracker_download_complete_marks_done() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 30, 100));
    tracker.observe(&layer("a", "Download complete", 0, 0));

    let state = tracker.get("a").unwrap();
    assert!(state.done);
    assert_eq!(state.current, 100);
}

#[test]
fn test_tracker_done_is_terminal() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Downloading", 30, 100));
    tracker.observe(&layer("a", "Download complete", 0, 0));
    tracker.observe(&layer("a", "Extracting", 5, 100));

    let state = tracker.get("a").unwrap();
    assert!(state.done);
    assert_eq!(state.status, "Extracting");
    assert_eq!(state.current, 100);
}

#[test]
fn test_tracker_already_exists_without_sizes() {
    let mut tracker = LayerTracker::new();
    tracker.observe(&layer("a", "Already exists", 0, 0));

    let state = tracker.get("a").unwrap();
    assert!(state.done);
    assert_eq!((state.current, state.total), (0, 0));
}
