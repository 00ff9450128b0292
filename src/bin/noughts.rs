//! noughts CLI - Tic-Tac-Toe against an exhaustive minimax opponent
//!
//! This CLI provides:
//! - Interactive play in the terminal
//! - Minimax evaluation of arbitrary positions
//! - An exhaustive audit showing the computer never loses
//! - Minimax self-play

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe against a minimax opponent", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play(noughts::cli::commands::play::PlayArgs),

    /// Evaluate a position with minimax
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Play every human line against the computer and count the results
    Audit(noughts::cli::commands::audit::AuditArgs),

    /// Let minimax play both sides
    Selfplay(noughts::cli::commands::selfplay::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Audit(args) => noughts::cli::commands::audit::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
    }
}
