//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Identifies one of the two sides of a game. `PlayerId::FIRST` moves first.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `[T; 2]`, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in every game the engine searches.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier for two-player games.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other side.
    ///
    /// ```
    /// use rust_gametree::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_gametree::core::{PlayerId, PlayerMap};
///
/// let mut tally: PlayerMap<i64> = PlayerMap::with_value(0);
/// tally[PlayerId::SECOND] += 5;
///
/// assert_eq!(tally[PlayerId::FIRST], 0);
/// assert_eq!(tally[PlayerId::SECOND], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 1");
        assert_eq!(PlayerId::FIRST.opponent().opponent(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::FIRST] = 10;
        *map.get_mut(PlayerId::SECOND) += 20;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &10), (PlayerId::SECOND, &20)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i64> = PlayerMap::new(|p| p.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
