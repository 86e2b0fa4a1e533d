//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Fixed-depth search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lookahead horizon in plies beyond the start position.
    /// 0 means no lookahead, so no move is ever recommended.
    pub max_depth: u16,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 9 }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u16) -> Self {
        self.max_depth = depth;
        self
    }
}
