//! CLI subcommands

pub mod analyze;
pub mod audit;
pub mod play;
pub mod selfplay;
