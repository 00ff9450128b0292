//! Observer port - notifications from a game session
//!
//! The presentation layer implements this trait to react to game start,
//! every applied move and the final outcome without the session knowing how
//! anything is rendered.

use crate::{
    identifiers::GameId,
    tictactoe::{Board, GameOutcome, Move, Player},
};

/// Observer of a [`GameSession`](crate::session::GameSession).
///
/// # Event Sequence
///
/// 1. `on_game_start(game, human, computer)` - after the board is reset
/// 2. `on_move(game, mv, board)` - once per applied move, with the board after it
/// 3. `on_game_end(game, outcome)` - once, when the game is won or drawn
///
/// A game abandoned by starting a new one never receives `on_game_end`.
///
/// # Examples
///
/// ```
/// use noughts::{
///     identifiers::GameId,
///     ports::GameObserver,
///     tictactoe::GameOutcome,
/// };
///
/// struct Counter {
///     finished: usize,
/// }
///
/// impl GameObserver for Counter {
///     fn on_game_end(&mut self, _game: GameId, _outcome: GameOutcome) {
///         self.finished += 1;
///     }
/// }
/// ```
pub trait GameObserver: Send {
    fn on_game_start(&mut self, _game: GameId, _human: Player, _computer: Player) {}

    fn on_move(&mut self, _game: GameId, _mv: Move, _board: &Board) {}

    fn on_game_end(&mut self, _game: GameId, _outcome: GameOutcome) {}
}
