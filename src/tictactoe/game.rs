//! Moves, outcomes and the game phase state machine

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a position, derived from the board after each move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// True for `Win` and `Draw`
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "{player} wins!"),
            GameOutcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Lifecycle of a single game.
///
/// ```text
/// NotStarted -> InProgress -> Won(_) | Drawn
/// ```
///
/// `Won` and `Drawn` are terminal: only starting a new game leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Won(Player),
    Drawn,
}

impl GamePhase {
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Drawn)
    }

    pub(crate) fn from_outcome(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::InProgress => GamePhase::InProgress,
            GameOutcome::Win(player) => GamePhase::Won(player),
            GameOutcome::Draw => GamePhase::Drawn,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::NotStarted => write!(f, "not started"),
            GamePhase::InProgress => write!(f, "in progress"),
            GamePhase::Won(player) => write!(f, "won by {player}"),
            GamePhase::Drawn => write!(f, "drawn"),
        }
    }
}
