//! Tic-Tac-Toe rules

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game::{GameOutcome, GamePhase, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
