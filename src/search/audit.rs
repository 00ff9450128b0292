//! Exhaustive checks of the minimax player
//!
//! [`exhaustive_audit`] lets the human side try every legal continuation while
//! the computer answers with minimax; [`self_play`] pits minimax against itself.

use serde::Serialize;
use tracing::{debug, info};

use super::minimax::Minimax;
use crate::tictactoe::{Board, GameOutcome, Move, Player};

/// Results of playing every human line against the computer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub computer: Player,
    pub games: usize,
    pub computer_wins: usize,
    pub draws: usize,
    pub computer_losses: usize,
    pub nodes_searched: u64,
}

impl AuditReport {
    fn new(computer: Player) -> Self {
        Self {
            computer,
            games: 0,
            computer_wins: 0,
            draws: 0,
            computer_losses: 0,
            nodes_searched: 0,
        }
    }

    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(player) if player == self.computer => self.computer_wins += 1,
            GameOutcome::Win(_) => self.computer_losses += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return,
        }
        self.games += 1;
    }
}

/// Enumerate every game in which the human (moving first) plays any legal
/// move and the computer replies with minimax.
pub fn exhaustive_audit(computer: Player) -> AuditReport {
    let mut search = Minimax::new(computer);
    let mut report = AuditReport::new(computer);

    explore(Board::new(), &mut search, &mut report);

    report.nodes_searched = search.nodes_visited();
    info!(
        %computer,
        games = report.games,
        wins = report.computer_wins,
        draws = report.draws,
        losses = report.computer_losses,
        "audit finished"
    );
    report
}

fn explore(board: Board, search: &mut Minimax, report: &mut AuditReport) {
    let computer = search.computer();
    let human = computer.opponent();

    for pos in board.empty_cells() {
        let Ok(after_human) = board.place(pos, human) else {
            continue;
        };
        if after_human.is_terminal() {
            report.record(after_human.outcome());
            continue;
        }

        let Some(reply) = search.best_move(&after_human, computer).best_move else {
            continue;
        };
        let Ok(after_computer) = after_human.place(reply, computer) else {
            continue;
        };

        if after_computer.is_terminal() {
            report.record(after_computer.outcome());
        } else {
            explore(after_computer, search, report);
        }
    }
}

/// A finished game between two minimax players
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayRecord {
    pub moves: Vec<Move>,
    pub final_board: Board,
    pub outcome: GameOutcome,
}

/// Play minimax against minimax, `first` moving first.
///
/// Each side searches for its own mark, so both play optimally.
pub fn self_play(first: Player) -> SelfPlayRecord {
    let mut searchers = [Minimax::new(Player::X), Minimax::new(Player::O)];
    let mut board = Board::new();
    let mut turn = first;
    let mut moves = Vec::with_capacity(9);

    while !board.is_terminal() {
        let search = match turn {
            Player::X => &mut searchers[0],
            Player::O => &mut searchers[1],
        };
        let Some(position) = search.best_move(&board, turn).best_move else {
            break;
        };
        let Ok(next) = board.place(position, turn) else {
            break;
        };
        debug!(%turn, position, "self-play move");

        moves.push(Move {
            position,
            player: turn,
        });
        board = next;
        turn = turn.opponent();
    }

    SelfPlayRecord {
        moves,
        final_board: board,
        outcome: board.outcome(),
    }
}
