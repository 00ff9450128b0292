//! Identifier types for games within a session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one game inside a [`GameSession`](crate::session::GameSession).
///
/// Every call to `start_game` issues a fresh id. Work scheduled against an
/// older id (a delayed computer move, for instance) is recognised as stale.
///
/// # Examples
///
/// ```
/// use noughts::identifiers::GameId;
///
/// let first = GameId::initial();
/// let second = first.next();
/// assert!(second > first);
/// assert_eq!(second.get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(u64);

impl GameId {
    /// The id a session holds before any game has been started.
    pub fn initial() -> Self {
        Self(0)
    }

    /// The id issued to the following game.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<GameId> for u64 {
    fn from(id: GameId) -> Self {
        id.0
    }
}
