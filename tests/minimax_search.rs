//! Behaviour of the minimax player: fixed positions, tie-breaks and
//! exhaustive optimality checks

use noughts::{
    search::{Minimax, WIN_SCORE, best_move, exhaustive_audit, self_play},
    tictactoe::{Board, GameOutcome, Player},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

mod positions {
    use super::*;

    #[test]
    fn completes_top_row() {
        let result = best_move(&board("XX.OO...."), Player::X, Player::X);
        assert_eq!(result.best_move, Some(2));
        // The win lands one ply below the root.
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn blocks_when_it_cannot_win() {
        // Computer O cannot complete a line; X threatens 6 (0-3-6).
        let result = best_move(&board("X.. X.O ..."), Player::O, Player::O);
        assert_eq!(result.best_move, Some(6));
    }

    #[test]
    fn alternating_rows_let_x_close_the_anti_diagonal() {
        // X holds 0, 2 and 4: both 6 (2-4-6) and 8 (0-4-8) win, lowest index kept.
        let result = best_move(&board("XOXOXO..."), Player::X, Player::X);
        assert_eq!(result.best_move, Some(6));
        assert_eq!(result.score, WIN_SCORE - 1);

        let after = board("XOXOXO...").place(6, Player::X).unwrap();
        assert_eq!(after.outcome(), GameOutcome::Win(Player::X));
    }

    #[test]
    fn last_cell_of_a_drawn_game() {
        let position = board("XOX XOO OX.");
        let result = best_move(&position, Player::X, Player::X);
        assert_eq!(result.best_move, Some(8));
        assert_eq!(result.score, 0);

        let after = position.place(8, Player::X).unwrap();
        assert_eq!(after.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn forced_loss_is_scored_by_its_depth() {
        // X has a fork: 0-1-2 via 2 and 0-3-6 via 6. O can block only one,
        // so every reply loses two plies down and the first empty cell is kept.
        let result = best_move(&board("XX. XO. ..O"), Player::O, Player::O);
        assert_eq!(result.score, 2 - WIN_SCORE);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn terminal_board_returns_no_move() {
        let result = best_move(&board("OOOXX.X.."), Player::X, Player::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -WIN_SCORE);
    }
}

mod tie_break {
    use super::*;

    #[test]
    fn empty_board_opens_in_the_first_cell() {
        // Every opening draws with best play, so the lowest index is kept.
        let result = best_move(&Board::new(), Player::X, Player::X);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Some(0));
    }

    #[test]
    fn minimizing_side_also_keeps_the_first_best() {
        // Search for X while O is to move: O's best replies all hold the draw.
        let position = board("X........");
        let mut search = Minimax::new(Player::X);
        let scores = search.evaluate_moves(&position, Player::O);
        let min = scores.iter().map(|&(_, s)| s).min().unwrap();
        let first_min = scores.iter().find(|&&(_, s)| s == min).unwrap().0;

        let result = search.best_move(&position, Player::O);
        assert_eq!(result.score, min);
        assert_eq!(result.best_move, Some(first_min));
        assert_eq!(first_min, 4);
    }

    #[test]
    fn repeated_searches_agree() {
        for s in ["X........", "X...O....", "XO..X....", "O...X...X"] {
            for turn in [Player::X, Player::O] {
                let first = best_move(&board(s), turn, Player::O);
                let second = best_move(&board(s), turn, Player::O);
                assert_eq!(first, second, "search on {s} with {turn} to move");
            }
        }
    }
}

mod optimality {
    use super::*;

    #[test]
    fn computer_as_o_never_loses() {
        let report = exhaustive_audit(Player::O);
        assert!(report.games > 0);
        assert_eq!(report.computer_losses, 0);
        assert_eq!(
            report.games,
            report.computer_wins + report.draws + report.computer_losses
        );
    }

    #[test]
    fn computer_as_x_never_loses() {
        let report = exhaustive_audit(Player::X);
        assert!(report.games > 0);
        assert_eq!(report.computer_losses, 0);
    }

    #[test]
    fn optimal_against_optimal_is_a_draw() {
        for first in [Player::X, Player::O] {
            let record = self_play(first);
            assert_eq!(record.outcome, GameOutcome::Draw);
            assert_eq!(record.moves.len(), 9);
            assert_eq!(record.moves[0].player, first);
            assert!(record.final_board.is_full());
        }
    }
}
