//! Configuration for interactive play.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, reveal::RevealDelay, tictactoe::Player};

/// Settings for a play session.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// # Examples
///
/// ```
/// use noughts::app::GameConfig;
/// use noughts::tictactoe::Player;
///
/// let config = GameConfig::default()
///     .with_human(Player::O)
///     .with_seed(42)
///     .with_reveal_delay(0, 0)?;
/// assert_eq!(config.seed, Some(42));
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mark for the human; `None` means ask at the start of each game
    pub human: Option<Player>,
    /// Bounds of the cosmetic delay before the computer's move is shown
    pub reveal_delay: RevealDelay,
    /// Random seed for the reveal delay
    pub seed: Option<u64>,
    /// Number cells 1-9 in the terminal instead of 0-8
    pub one_based: bool,
}

impl GameConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.reveal_delay.validate()
    }

    pub fn with_human(mut self, human: Player) -> Self {
        self.human = Some(human);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay bounds in milliseconds.
    pub fn with_reveal_delay(mut self, min_ms: u64, max_ms: u64) -> Result<Self> {
        self.reveal_delay = RevealDelay::new(min_ms, max_ms)?;
        Ok(self)
    }

    pub fn with_one_based(mut self, one_based: bool) -> Self {
        self.one_based = one_based;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: None,
            reveal_delay: RevealDelay::default(),
            seed: None,
            one_based: false,
        }
    }
}
