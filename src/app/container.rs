//! Wiring of sessions, observers and randomness.

use rand::{SeedableRng, rngs::StdRng};

use super::config::GameConfig;
use crate::{
    Result,
    adapters::{OutcomeTally, TracingObserver},
    session::GameSession,
};

/// Application with its configuration and shared collaborators.
///
/// # Examples
///
/// ```
/// use noughts::app::{App, GameConfig};
/// use noughts::tictactoe::Player;
///
/// let app = App::new(GameConfig::default().with_seed(3))?;
/// let mut session = app.create_session();
/// session.start_game(Player::X);
/// session.submit_human_move(0)?;
/// session.request_computer_move()?;
/// assert_eq!(app.tally().snapshot().games(), 0);
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct App {
    config: GameConfig,
    tally: OutcomeTally,
}

impl App {
    /// Validate `config` and build the app around it.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tally: OutcomeTally::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Running score shared by every session this app creates
    pub fn tally(&self) -> &OutcomeTally {
        &self.tally
    }

    /// A fresh session reporting to the log and to the app's tally
    pub fn create_session(&self) -> GameSession {
        GameSession::new()
            .with_observer(TracingObserver::new())
            .with_observer(self.tally.clone())
    }

    /// RNG for reveal delays: seeded when the config has a seed, otherwise from entropy
    pub fn create_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
