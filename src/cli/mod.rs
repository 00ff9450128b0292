//! Terminal front end for noughts
//!
//! This module provides the command-line interface: interactive play plus a
//! few commands for inspecting the minimax player.

pub mod commands;
pub mod output;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::tictactoe::Player;

/// Install the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2+ = debug).
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse an `x`/`o` command-line value, naming the flag in the error.
pub fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    value
        .parse::<Player>()
        .map_err(|_| anyhow!("invalid value '{value}' for {flag}: expected 'x' or 'o'"))
}
