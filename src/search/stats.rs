//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes created (excluding the start node).
    pub nodes_created: u64,

    /// Nodes expanded.
    pub nodes_expanded: u64,

    /// Leaves returned by the depth limit, a terminal state or a dead end.
    pub leaves: u64,

    /// Maximum depth below the start node reached during search.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes created per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_created as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
