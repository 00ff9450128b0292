//! Self-play command - Minimax against itself

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        output::{print_kv, print_section, render_board},
        parse_player_token,
    },
    search::self_play,
};

#[derive(Parser, Debug)]
#[command(about = "Let the minimax player play both sides")]
pub struct SelfPlayArgs {
    /// Mark that moves first (`x` or `o`)
    #[arg(long, short = 'f', default_value = "x")]
    pub first: String,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let first = parse_player_token(&args.first, "--first")?;
    let record = self_play(first);

    print_section("Moves");
    for (ply, mv) in record.moves.iter().enumerate() {
        print_kv(&format!("{}. {}", ply + 1, mv.player), &mv.position.to_string());
    }

    print_section("Final position");
    println!("{}", render_board(&record.final_board, false));
    println!("\n{}", record.outcome);
    Ok(())
}
