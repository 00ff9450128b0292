//! Running score across the games of a session.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::{
    identifiers::GameId,
    ports::GameObserver,
    tictactoe::{GameOutcome, Player},
};

/// Finished games counted from the human's side of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub human_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn games(&self) -> usize {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// Observer that accumulates a [`Tally`].
///
/// Clones share the same counters, so one clone can be handed to the session
/// and another kept by the caller for reading.
#[derive(Debug, Clone, Default)]
pub struct OutcomeTally {
    human: Option<Player>,
    shared: Arc<Mutex<Tally>>,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counts. A poisoned lock still yields the last written value.
    pub fn snapshot(&self) -> Tally {
        match self.shared.lock() {
            Ok(tally) => *tally,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl GameObserver for OutcomeTally {
    fn on_game_start(&mut self, _game: GameId, human: Player, _computer: Player) {
        self.human = Some(human);
    }

    fn on_game_end(&mut self, _game: GameId, outcome: GameOutcome) {
        let mut tally = match self.shared.lock() {
            Ok(tally) => tally,
            Err(poisoned) => poisoned.into_inner(),
        };
        match outcome {
            GameOutcome::Win(player) if Some(player) == self.human => tally.human_wins += 1,
            GameOutcome::Win(_) => tally.computer_wins += 1,
            GameOutcome::Draw => tally.draws += 1,
            GameOutcome::InProgress => {}
        }
    }
}
