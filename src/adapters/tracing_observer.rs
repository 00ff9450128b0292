//! Observer that reports session events through `tracing`.

use tracing::{debug, info};

use crate::{
    identifiers::GameId,
    ports::GameObserver,
    tictactoe::{Board, GameOutcome, Move, Player},
};

/// Logs every session event as a structured `tracing` record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl GameObserver for TracingObserver {
    fn on_game_start(&mut self, game: GameId, human: Player, computer: Player) {
        info!(%game, %human, %computer, "game started");
    }

    fn on_move(&mut self, game: GameId, mv: Move, board: &Board) {
        debug!(
            %game,
            player = %mv.player,
            position = mv.position,
            board = %board.encode(),
            "move applied"
        );
    }

    fn on_game_end(&mut self, game: GameId, outcome: GameOutcome) {
        info!(%game, %outcome, "game finished");
    }
}
