//! Operator identifiers.
//!
//! An operator is an indexed, game-specific action. Every game exposes a fixed
//! number of operators, indexed `0..operator_count`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Index of an operator within a game's fixed action space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperatorId(pub u16);

impl OperatorId {
    /// Create a new operator ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw operator index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all operators of a game with `count` operators, in ascending order.
    ///
    /// Counts beyond the `u16` range stop at `OperatorId(u16::MAX)`.
    ///
    /// ```
    /// use rust_gametree::core::OperatorId;
    ///
    /// let ops: Vec<_> = OperatorId::all(3).collect();
    /// assert_eq!(ops, vec![OperatorId::new(0), OperatorId::new(1), OperatorId::new(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = OperatorId> {
        let end = count.min(usize::from(u16::MAX) + 1);
        (0..end).map(|i| OperatorId(i as u16))
    }
}

impl std::fmt::Display for OperatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OperatorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(OperatorId)
            .map_err(|_| Error::ParseOperator {
                input: s.to_string(),
            })
    }
}
