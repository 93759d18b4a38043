//! Per-layer state table.
//!
//! The [`LayerTracker`] owns one [`LayerState`] per distinct layer id and the
//! order in which ids were first seen. Layers are never removed during a pull.

use crate::record::event::is_done_status;
use crate::record::ProgressEvent;
use std::collections::HashMap;
use tracing::debug;

/// Progress of a single layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerState {
    /// Bytes transferred so far.
    pub current: i64,
    /// Declared size in bytes, 0 when unknown.
    pub total: i64,
    /// Last non-empty status observed.
    pub status: String,
    /// Set once the layer reached a done status. Never reset.
    pub done: bool,
}

impl LayerState {
    fn apply(&mut self, event: &ProgressEvent) {
        if event.total > 0 {
            self.total = event.total;
        }
        if event.current > 0 || event.total == 0 {
            // A done layer with a known size stays snapped to that size.
            if self.done && self.total > 0 {
                self.current = self.current.max(event.current);
            } else {
                self.current = event.current;
            }
        }
        if !event.status.is_empty() {
            self.status.clone_from(&event.status);
        }
        if is_done_status(&event.status) {
            self.done = true;
        }
        if self.done && self.total > 0 && self.current < self.total {
            self.current = self.total;
        }
    }
}

/// Insertion-ordered table of layer states.
#[derive(Debug, Default)]
pub struct LayerTracker {
    layers: HashMap<String, LayerState>,
    order: Vec<String>,
}

impl LayerTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the table.
    ///
    /// Global events (empty id) are ignored. Returns `true` when the event
    /// introduced a layer that was not tracked before.
    pub fn observe(&mut self, event: &ProgressEvent) -> bool {
        if event.is_global() {
            return false;
        }

        let created = !self.layers.contains_key(&event.id);
        if created {
            debug!(id = %event.id, status = %event.status, "tracking new layer");
            self.order.push(event.id.clone());
        }
        self.layers.entry(event.id.clone()).or_default().apply(event);
        created
    }

    /// Get the state of one layer.
    pub fn get(&self, id: &str) -> Option<&LayerState> {
        self.layers.get(id)
    }

    /// Layer ids in first-seen order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Iterate over `(id, state)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayerState)> {
        self.order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|state| (id.as_str(), state)))
    }

    /// Number of tracked layers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no layer has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
