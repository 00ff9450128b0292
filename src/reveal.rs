//! Delayed reveal of the computer's move
//!
//! The computer decides instantly; the presentation layer waits a short random
//! time before showing the move. The wait is carried by a [`PendingMove`] that
//! remembers which game it belongs to, so a move scheduled before a restart is
//! rejected instead of landing on the new board.

use std::{ops::RangeInclusive, time::Duration};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, identifiers::GameId};

/// Bounds of the cosmetic delay, in milliseconds (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl RevealDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        let delay = Self { min_ms, max_ms };
        delay.validate()?;
        Ok(delay)
    }

    /// No delay at all; moves are revealed immediately
    pub fn immediate() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_ms > self.max_ms {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "reveal delay minimum {}ms exceeds maximum {}ms",
                    self.min_ms, self.max_ms
                ),
            });
        }
        Ok(())
    }

    pub fn range(&self) -> RangeInclusive<u64> {
        self.min_ms..=self.max_ms.max(self.min_ms)
    }

    /// Draw a delay uniformly from the configured range
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.random_range(self.range()))
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self {
            min_ms: 200,
            max_ms: 999,
        }
    }
}

/// A computer move that has been chosen but not yet applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub game: GameId,
    pub position: usize,
    pub delay: Duration,
}

impl PendingMove {
    /// True when the move was scheduled for a game other than `current`
    pub fn is_stale(&self, current: GameId) -> bool {
        self.game != current
    }
}
