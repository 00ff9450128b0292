//! Session lifecycle, turn serialization, delayed computer moves and observers

use std::sync::{Arc, Mutex};

use noughts::{
    Error,
    identifiers::GameId,
    ports::GameObserver,
    reveal::RevealDelay,
    search::Minimax,
    session::GameSession,
    tictactoe::{Board, GameOutcome, GamePhase, Move, Player},
};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Start(GameId, Player),
    Move(GameId, Move),
    End(GameId, GameOutcome),
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Event>>>);

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

impl GameObserver for Recorder {
    fn on_game_start(&mut self, game: GameId, human: Player, _computer: Player) {
        self.0.lock().unwrap().push(Event::Start(game, human));
    }

    fn on_move(&mut self, game: GameId, mv: Move, _board: &Board) {
        self.0.lock().unwrap().push(Event::Move(game, mv));
    }

    fn on_game_end(&mut self, game: GameId, outcome: GameOutcome) {
        self.0.lock().unwrap().push(Event::End(game, outcome));
    }
}

/// Human 0, computer 4, human 1, computer 2, human 3, computer completes 2-4-6.
fn play_losing_line(session: &mut GameSession) -> GameOutcome {
    let mut outcome = GameOutcome::InProgress;
    for position in [0, 1, 3] {
        session.submit_human_move(position).unwrap();
        outcome = session.request_computer_move().unwrap().outcome;
    }
    outcome
}

mod lifecycle {
    use super::*;

    #[test]
    fn computer_wins_and_game_becomes_terminal() {
        let mut session = GameSession::new();
        session.start_game(Player::X);

        let outcome = play_losing_line(&mut session);
        assert_eq!(outcome, GameOutcome::Win(Player::O));
        assert_eq!(session.phase(), GamePhase::Won(Player::O));
        assert_eq!(session.to_move(), None);

        let err = session.submit_human_move(5).unwrap_err();
        assert!(matches!(err, Error::InvalidGameState { .. }));
        assert!(session.request_computer_move().is_err());
    }

    #[test]
    fn restart_after_finish() {
        let mut session = GameSession::new();
        session.start_game(Player::X);
        play_losing_line(&mut session);

        let board = session.start_game(Player::O);
        assert_eq!(board, Board::new());
        assert_eq!(session.phase(), GamePhase::InProgress);
        assert_eq!(session.computer(), Player::X);
        assert!(session.history().is_empty());
        assert_eq!(session.game_id().get(), 2);

        let report = session.submit_human_move(4).unwrap();
        assert_eq!(report.mv.player, Player::O);
    }

    #[test]
    fn human_playing_o_still_moves_first() {
        let mut session = GameSession::new();
        session.start_game(Player::O);
        assert_eq!(session.to_move(), Some(Player::O));
        assert!(session.request_computer_move().is_err());

        session.submit_human_move(0).unwrap();
        let reply = session.request_computer_move().unwrap();
        assert_eq!(reply.mv.player, Player::X);
        assert_eq!(reply.mv.position, 4);
    }

    #[test]
    fn optimal_human_draws() {
        for human in [Player::X, Player::O] {
            let mut session = GameSession::new();
            session.start_game(human);
            let mut advisor = Minimax::new(human);

            while !session.phase().is_finished() {
                let position = advisor
                    .best_move(session.board(), human)
                    .best_move
                    .unwrap();
                let report = session.submit_human_move(position).unwrap();
                if !report.outcome.is_terminal() {
                    session.request_computer_move().unwrap();
                }
            }

            assert_eq!(session.phase(), GamePhase::Drawn);
            assert_eq!(session.outcome(), GameOutcome::Draw);
            assert_eq!(session.history().len(), 9);
        }
    }
}

mod rejected_input {
    use super::*;

    #[test]
    fn occupied_cell_leaves_board_unchanged() {
        let mut session = GameSession::new();
        session.start_game(Player::X);
        session.submit_human_move(0).unwrap();
        let reply = session.request_computer_move().unwrap();

        let before = *session.board();
        let err = session.submit_human_move(reply.mv.position).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { position } if position == reply.mv.position));
        assert_eq!(*session.board(), before);
        assert_eq!(session.to_move(), Some(Player::X));
    }

    #[test]
    fn out_of_range_cell_is_an_invalid_move() {
        let mut session = GameSession::new();
        session.start_game(Player::X);
        let err = session.submit_human_move(9).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(*session.board(), Board::new());
        assert!(session.history().is_empty());
    }
}

mod pending_moves {
    use super::*;

    fn started() -> (GameSession, StdRng) {
        let mut session = GameSession::new();
        session.start_game(Player::X);
        session.submit_human_move(0).unwrap();
        (session, StdRng::seed_from_u64(17))
    }

    #[test]
    fn resolve_applies_scheduled_move() {
        let (mut session, mut rng) = started();
        let pending = session
            .schedule_computer_move(&RevealDelay::default(), &mut rng)
            .unwrap();

        assert_eq!(pending.position, 4);
        assert!(pending.delay.as_millis() >= 200 && pending.delay.as_millis() < 1000);
        assert_eq!(session.board().get(4), Some(noughts::tictactoe::Cell::Empty));

        let report = session.resolve_pending(pending).unwrap();
        assert_eq!(report.mv, Move { position: 4, player: Player::O });
        assert_eq!(session.pending(), None);
        assert_eq!(session.to_move(), Some(Player::X));
    }

    #[test]
    fn human_cannot_move_while_computer_move_pending() {
        let (mut session, mut rng) = started();
        session
            .schedule_computer_move(&RevealDelay::immediate(), &mut rng)
            .unwrap();

        let err = session.submit_human_move(8).unwrap_err();
        assert!(err.to_string().contains("pending"));
        assert!(session.request_computer_move().is_err());
    }

    #[test]
    fn restart_makes_pending_move_stale() {
        let (mut session, mut rng) = started();
        let pending = session
            .schedule_computer_move(&RevealDelay::immediate(), &mut rng)
            .unwrap();

        session.start_game(Player::O);
        let err = session.resolve_pending(pending).unwrap_err();
        assert!(matches!(err, Error::StaleMove { .. }));
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.to_move(), Some(Player::O));
    }

    #[test]
    fn cancelled_move_cannot_be_resolved() {
        let (mut session, mut rng) = started();
        let pending = session
            .schedule_computer_move(&RevealDelay::immediate(), &mut rng)
            .unwrap();

        assert_eq!(session.cancel_pending(), Some(pending));
        let err = session.resolve_pending(pending).unwrap_err();
        assert!(matches!(err, Error::InvalidGameState { .. }));

        // The computer can be asked again after cancelling.
        let report = session.request_computer_move().unwrap();
        assert_eq!(report.mv.position, 4);
    }
}

mod observers {
    use super::*;

    #[test]
    fn events_arrive_in_order() {
        let recorder = Recorder::default();
        let mut session = GameSession::new().with_observer(recorder.clone());
        session.start_game(Player::X);
        play_losing_line(&mut session);

        let events = recorder.events();
        let game = session.game_id();
        assert_eq!(events.first(), Some(&Event::Start(game, Player::X)));
        assert_eq!(events.last(), Some(&Event::End(game, GameOutcome::Win(Player::O))));

        let moves: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                Event::Move(_, mv) => Some(mv.position),
                _ => None,
            })
            .collect();
        assert_eq!(moves, vec![0, 4, 1, 2, 3, 6]);
    }

    #[test]
    fn abandoned_game_has_no_end_event() {
        let recorder = Recorder::default();
        let mut session = GameSession::new();
        session.add_observer(Box::new(recorder.clone()));

        session.start_game(Player::X);
        session.submit_human_move(4).unwrap();
        session.start_game(Player::X);

        let events = recorder.events();
        assert!(!events.iter().any(|e| matches!(e, Event::End(..))));
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Start(..))).count(),
            2
        );
    }
}
