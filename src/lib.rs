//! Tic-Tac-Toe against an exhaustive minimax opponent
//!
//! This crate provides:
//! - Board rules: win detection, empty cells, move application
//! - Depth-adjusted minimax search with a deterministic tie-break
//! - A game session controller with delayed, cancellable computer moves
//! - Observer hooks and a terminal front end

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod reveal;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Minimax, SearchResult};
pub use session::{GameSession, MoveReport};
