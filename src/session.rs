//! Game session controller
//!
//! A [`GameSession`] owns everything one player-versus-computer table needs:
//! the board, the mark assignment, whose turn it is, the move history and the
//! observers to notify. Moves are strictly serialized as human, computer,
//! human, and so on; the human always opens, whichever mark they picked.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    Error, Result,
    identifiers::GameId,
    ports::GameObserver,
    reveal::{PendingMove, RevealDelay},
    search::Minimax,
    tictactoe::{Board, GameOutcome, GamePhase, Move, Player},
};

/// Result of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub mv: Move,
    pub board: Board,
    pub outcome: GameOutcome,
}

/// A human-versus-computer game table.
///
/// # Examples
///
/// ```
/// use noughts::session::GameSession;
/// use noughts::tictactoe::{GamePhase, Player};
///
/// let mut session = GameSession::new();
/// session.start_game(Player::X);
///
/// let report = session.submit_human_move(4)?;
/// assert!(!report.outcome.is_terminal());
///
/// let reply = session.request_computer_move()?;
/// assert_eq!(reply.mv.player, Player::O);
/// assert_eq!(session.phase(), GamePhase::InProgress);
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct GameSession {
    game: GameId,
    board: Board,
    human: Player,
    computer: Player,
    phase: GamePhase,
    to_move: Player,
    history: Vec<Move>,
    pending: Option<PendingMove>,
    search: Minimax,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameSession {
    /// Create a session with no game started yet
    pub fn new() -> Self {
        Self {
            game: GameId::initial(),
            board: Board::new(),
            human: Player::X,
            computer: Player::O,
            phase: GamePhase::NotStarted,
            to_move: Player::X,
            history: Vec::new(),
            pending: None,
            search: Minimax::new(Player::O),
            observers: Vec::new(),
        }
    }

    /// Attach an observer (builder style)
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Reset the board and begin a new game with `human` playing that mark.
    ///
    /// Any pending computer move from the previous game becomes stale.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, human: Player) -> Board {
        if let Some(pending) = self.pending.take() {
            debug!(game = %pending.game, "discarding pending computer move");
        }

        self.game = self.game.next();
        self.board = Board::new();
        self.human = human;
        self.computer = human.opponent();
        self.phase = GamePhase::InProgress;
        self.to_move = human;
        self.history.clear();
        self.search = Minimax::new(self.computer);

        let (game, computer) = (self.game, self.computer);
        for observer in &mut self.observers {
            observer.on_game_start(game, human, computer);
        }
        self.board
    }

    /// Validate and apply the human's move.
    ///
    /// # Errors
    ///
    /// `InvalidGameState` when no game is running, it is the computer's turn,
    /// or a computer move is pending. `InvalidPosition`/`InvalidMove` for a bad
    /// cell. The session is unchanged on any error.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, position: usize) -> Result<MoveReport> {
        const ACTION: &str = "submit a human move";
        self.ensure_in_progress(ACTION)?;
        if self.pending.is_some() {
            return Err(Error::game_state(ACTION, "a computer move is pending"));
        }
        if self.to_move != self.human {
            return Err(Error::game_state(ACTION, "it is the computer's turn"));
        }

        self.apply(position, self.human)
    }

    /// Run the search for the computer's mark and apply the chosen move.
    #[instrument(skip(self))]
    pub fn request_computer_move(&mut self) -> Result<MoveReport> {
        let position = self.choose_computer_move("request a computer move")?;
        self.apply(position, self.computer)
    }

    /// Choose the computer's move now and hold it back for a random delay.
    ///
    /// Human moves are rejected until the pending move is resolved or the
    /// game is restarted.
    #[instrument(skip(self, rng))]
    pub fn schedule_computer_move<R: Rng>(
        &mut self,
        delay: &RevealDelay,
        rng: &mut R,
    ) -> Result<PendingMove> {
        let position = self.choose_computer_move("schedule a computer move")?;
        let pending = PendingMove {
            game: self.game,
            position,
            delay: delay.sample(rng),
        };
        debug!(
            position,
            delay_ms = pending.delay.as_millis() as u64,
            "computer move scheduled"
        );
        self.pending = Some(pending);
        Ok(pending)
    }

    /// Apply a move produced by [`schedule_computer_move`](Self::schedule_computer_move).
    ///
    /// # Errors
    ///
    /// `StaleMove` when the move belongs to an earlier game; `InvalidGameState`
    /// when it was cancelled or does not match the outstanding pending move.
    #[instrument(skip(self))]
    pub fn resolve_pending(&mut self, pending: PendingMove) -> Result<MoveReport> {
        if pending.is_stale(self.game) {
            warn!(issued = %pending.game, current = %self.game, "ignoring stale computer move");
            return Err(Error::StaleMove {
                issued: pending.game,
                current: self.game,
            });
        }
        if self.pending != Some(pending) {
            return Err(Error::game_state(
                "resolve a computer move",
                "no matching computer move is pending",
            ));
        }

        self.pending = None;
        self.apply(pending.position, self.computer)
    }

    /// Drop the outstanding computer move, if any
    pub fn cancel_pending(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    pub fn game_id(&self) -> GameId {
        self.game
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// The mark expected to move next, `None` unless a game is running
    pub fn to_move(&self) -> Option<Player> {
        (self.phase == GamePhase::InProgress).then_some(self.to_move)
    }

    /// Outcome of the current board
    pub fn outcome(&self) -> GameOutcome {
        if self.board.is_winning_for(self.human) {
            GameOutcome::Win(self.human)
        } else if self.board.is_winning_for(self.computer) {
            GameOutcome::Win(self.computer)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    fn ensure_in_progress(&self, action: &str) -> Result<()> {
        if self.phase == GamePhase::InProgress {
            Ok(())
        } else {
            Err(Error::game_state(action, format!("game is {}", self.phase)))
        }
    }

    fn choose_computer_move(&mut self, action: &str) -> Result<usize> {
        self.ensure_in_progress(action)?;
        if self.pending.is_some() {
            return Err(Error::game_state(action, "a computer move is already pending"));
        }
        if self.to_move != self.computer {
            return Err(Error::game_state(action, "it is the human's turn"));
        }

        self.search
            .best_move(&self.board, self.computer)
            .best_move
            .ok_or(Error::NoValidMoves)
    }

    fn apply(&mut self, position: usize, player: Player) -> Result<MoveReport> {
        self.board = self.board.place(position, player)?;

        let mv = Move { position, player };
        self.history.push(mv);
        self.to_move = player.opponent();

        let outcome = self.outcome();
        self.phase = GamePhase::from_outcome(outcome);

        let (game, board) = (self.game, self.board);
        for observer in &mut self.observers {
            observer.on_move(game, mv, &board);
        }
        if outcome.is_terminal() {
            for observer in &mut self.observers {
                observer.on_game_end(game, outcome);
            }
        }

        Ok(MoveReport { mv, board, outcome })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
