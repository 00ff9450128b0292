//! Move search for the computer player

pub mod audit;
pub mod minimax;

pub use audit::{AuditReport, SelfPlayRecord, exhaustive_audit, self_play};
pub use minimax::{Minimax, SearchResult, WIN_SCORE, best_move};
