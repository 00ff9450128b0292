//! Analyze command - Show the minimax evaluation of a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        output::{print_kv, print_section, render_board},
        parse_player_token,
    },
    search::{Minimax, SearchResult},
    tictactoe::{Board, Cell, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a board with minimax")]
pub struct AnalyzeArgs {
    /// Board as nine cells, e.g. `XX.OO....` or `XX./OO./...`
    pub board: String,

    /// Mark to move (`x` or `o`); inferred from the piece counts when omitted
    #[arg(long, short = 't')]
    pub turn: Option<String>,

    /// Mark the search plays for; defaults to the mark to move
    #[arg(long, short = 'c')]
    pub computer: Option<String>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// Everything the analyze command reports about a position
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub board: String,
    pub turn: Player,
    pub computer: Player,
    pub outcome: GameOutcome,
    pub moves: Vec<MoveScore>,
    pub result: SearchResult,
    pub nodes: u64,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let turn = match &args.turn {
        Some(value) => parse_player_token(value, "--turn")?,
        None => infer_turn(&board),
    };
    let computer = match &args.computer {
        Some(value) => parse_player_token(value, "--computer")?,
        None => turn,
    };

    let analysis = analyze(&board, turn, computer);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", render_board(&board, false));
    print_kv("To move", &analysis.turn.to_string());
    print_kv("Searching for", &analysis.computer.to_string());
    print_kv("Outcome", &analysis.outcome.to_string());

    if analysis.outcome.is_terminal() {
        return Ok(());
    }

    print_section("Move scores");
    for score in &analysis.moves {
        print_kv(&format!("Cell {}", score.position), &score.score.to_string());
    }
    if let Some(best) = analysis.result.best_move {
        print_kv("Best move", &best.to_string());
    }
    print_kv("Score", &analysis.result.score.to_string());
    print_kv("Nodes searched", &analysis.nodes.to_string());
    Ok(())
}

/// Run the search and collect per-move scores.
pub fn analyze(board: &Board, turn: Player, computer: Player) -> Analysis {
    let mut search = Minimax::new(computer);
    let moves = search
        .evaluate_moves(board, turn)
        .into_iter()
        .map(|(position, score)| MoveScore { position, score })
        .collect();
    let result = search.best_move(board, turn);

    Analysis {
        board: board.encode(),
        turn,
        computer,
        outcome: board.outcome(),
        moves,
        result,
        nodes: search.nodes_visited(),
    }
}

/// X moves on equal counts, otherwise the side with fewer marks.
pub fn infer_turn(board: &Board) -> Player {
    let x = board.cells.iter().filter(|&&c| c == Cell::X).count();
    let o = board.cells.iter().filter(|&&c| c == Cell::O).count();
    if o < x { Player::O } else { Player::X }
}
