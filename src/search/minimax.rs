//! Exhaustive minimax search with depth-adjusted terminal scores

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tictactoe::{Board, Cell, Player};

/// Magnitude of a won or lost terminal position before depth adjustment
pub const WIN_SCORE: i32 = 10;

/// Score of a position together with the move that achieves it
///
/// `best_move` is `None` only when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Minimax searcher playing for a fixed mark.
///
/// Terminal positions score `WIN_SCORE - depth` when the searcher's mark has a
/// line, `depth - WIN_SCORE` when the opponent has one and `0` for a full
/// board. Quicker wins and slower losses are therefore preferred.
///
/// Children are visited in ascending cell order and only a strictly better
/// score replaces the incumbent, so among equal scores the lowest index wins.
///
/// # Examples
///
/// ```
/// use noughts::search::Minimax;
/// use noughts::tictactoe::{Board, Player};
///
/// let board = Board::from_string("XX.OO....")?;
/// let mut search = Minimax::new(Player::X);
/// let result = search.best_move(&board, Player::X);
/// assert_eq!(result.best_move, Some(2));
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Minimax {
    computer: Player,
    nodes: u64,
}

impl Minimax {
    pub fn new(computer: Player) -> Self {
        Self { computer, nodes: 0 }
    }

    /// The mark this searcher maximizes for
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Total nodes expanded since construction
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Search from the root (depth 0).
    pub fn best_move(&mut self, board: &Board, turn: Player) -> SearchResult {
        self.best_move_at_depth(board, turn, 0)
    }

    /// Search treating `board` as sitting `depth` plies below the root.
    ///
    /// The caller's board is never touched; the search mutates and restores a
    /// private copy.
    pub fn best_move_at_depth(&mut self, board: &Board, turn: Player, depth: i32) -> SearchResult {
        let mut scratch = *board;
        let before = self.nodes;
        let result = self.search(&mut scratch, turn, depth);
        debug!(
            computer = %self.computer,
            %turn,
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.nodes - before,
            "minimax search complete"
        );
        result
    }

    /// Score every legal move for `turn`, in ascending cell order.
    ///
    /// Each score is the value the root search assigns to that child. A terminal
    /// board yields an empty list.
    pub fn evaluate_moves(&mut self, board: &Board, turn: Player) -> Vec<(usize, i32)> {
        if self.terminal_score(board, 0).is_some() {
            return Vec::new();
        }

        let mut scratch = *board;
        let mut scores = Vec::new();
        for pos in board.empty_cells() {
            scratch.cells[pos] = turn.to_cell();
            let child = self.search(&mut scratch, turn.opponent(), 1);
            scratch.cells[pos] = Cell::Empty;
            scores.push((pos, child.score));
        }
        scores
    }

    /// Score of a terminal position, `None` while play can continue
    pub fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        if board.is_winning_for(self.computer) {
            Some(WIN_SCORE - depth)
        } else if board.is_winning_for(self.computer.opponent()) {
            Some(depth - WIN_SCORE)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }

    fn search(&mut self, board: &mut Board, turn: Player, depth: i32) -> SearchResult {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return SearchResult::leaf(score);
        }

        let maximizing = turn == self.computer;
        let mut best: Option<SearchResult> = None;

        for pos in board.empty_cells() {
            board.cells[pos] = turn.to_cell();
            let child = self.search(board, turn.opponent(), depth + 1);
            board.cells[pos] = Cell::Empty;

            let better = match best {
                None => true,
                Some(current) if maximizing => child.score > current.score,
                Some(current) => child.score < current.score,
            };
            if better {
                best = Some(SearchResult {
                    score: child.score,
                    best_move: Some(pos),
                });
            }
        }

        // A non-terminal board always has an empty cell.
        best.unwrap_or(SearchResult::leaf(0))
    }
}

/// One-shot search for `computer` with `turn` to move.
pub fn best_move(board: &Board, turn: Player, computer: Player) -> SearchResult {
    Minimax::new(computer).best_move(board, turn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn terminal_board_has_no_move() {
        let mut search = Minimax::new(Player::O);
        let won = board("XXX OO. ...");
        assert_eq!(search.best_move(&won, Player::O), SearchResult::leaf(-10));

        let drawn = board("XOX XOO OXX");
        assert_eq!(search.best_move(&drawn, Player::X), SearchResult::leaf(0));
    }

    #[test]
    fn terminal_scores_are_depth_adjusted() {
        let search = Minimax::new(Player::X);
        let x_won = board("XXX OO. ...");
        assert_eq!(search.terminal_score(&x_won, 0), Some(10));
        assert_eq!(search.terminal_score(&x_won, 3), Some(7));

        let o_search = Minimax::new(Player::O);
        assert_eq!(o_search.terminal_score(&x_won, 3), Some(-7));
        assert_eq!(o_search.terminal_score(&Board::new(), 0), None);
    }

    #[test]
    fn takes_the_immediate_win() {
        let result = best_move(&board("XX. OO. ..."), Player::X, Player::X);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn starting_depth_shifts_scores() {
        let mut search = Minimax::new(Player::X);
        let position = board("XX.OO....");
        let deep = search.best_move_at_depth(&position, Player::X, 2);
        assert_eq!(deep.best_move, Some(2));
        assert_eq!(deep.score, WIN_SCORE - 3);

        let mut o_search = Minimax::new(Player::O);
        let losing = o_search.best_move_at_depth(&board("XX. XO. ..O"), Player::O, 1);
        assert_eq!(losing.score, 3 - WIN_SCORE);
    }

    #[test]
    fn blocks_the_opponent() {
        // O to move must block X on the top row.
        let result = best_move(&board("XX. .O. ..."), Player::O, Player::O);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn prefers_faster_win_over_slower_one() {
        // X can win now at 2, or set up other wins later; the immediate win scores highest.
        let result = best_move(&board("XX. O.. O.."), Player::X, Player::X);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn caller_board_is_untouched() {
        let original = board("X... O....");
        let copy = original;
        let _ = Minimax::new(Player::X).best_move(&original, Player::X);
        assert_eq!(original, copy);
    }

    #[test]
    fn evaluate_moves_matches_best_move() {
        let position = board("X.. .O. ...");
        let mut search = Minimax::new(Player::X);
        let scores = search.evaluate_moves(&position, Player::X);
        let result = search.best_move(&position, Player::X);

        assert_eq!(scores.len(), 7);
        let max = scores.iter().map(|&(_, s)| s).max().unwrap();
        let first_max = scores.iter().find(|&&(_, s)| s == max).unwrap().0;
        assert_eq!(result.score, max);
        assert_eq!(result.best_move, Some(first_max));
    }

    #[test]
    fn node_counter_grows() {
        let mut search = Minimax::new(Player::O);
        search.best_move(&board("X........"), Player::O);
        let first = search.nodes_visited();
        assert!(first > 0);
        search.best_move(&board("X........"), Player::O);
        assert_eq!(search.nodes_visited(), first * 2);
    }
}
