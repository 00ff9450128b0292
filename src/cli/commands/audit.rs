//! Audit command - Prove the computer never loses

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        output::{print_section, print_stats_table},
        parse_player_token,
    },
    search::{AuditReport, exhaustive_audit},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play every human line against the computer")]
pub struct AuditArgs {
    /// Computer mark to audit (`x` or `o`); both when omitted
    #[arg(long, short = 'c')]
    pub computer: Option<String>,

    /// Print the reports as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AuditArgs) -> Result<()> {
    let marks = match &args.computer {
        Some(value) => vec![parse_player_token(value, "--computer")?],
        None => vec![Player::X, Player::O],
    };

    let reports: Vec<AuditReport> = marks.into_iter().map(exhaustive_audit).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let losses: usize = reports.iter().map(|r| r.computer_losses).sum();
    if losses > 0 {
        bail!("computer lost {losses} game(s)");
    }
    Ok(())
}

fn print_report(report: &AuditReport) {
    print_section(&format!(
        "Computer plays {} (human {} moves first)",
        report.computer,
        report.computer.opponent()
    ));
    let games = report.games.to_string();
    let wins = report.computer_wins.to_string();
    let draws = report.draws.to_string();
    let losses = report.computer_losses.to_string();
    let nodes = report.nodes_searched.to_string();
    print_stats_table(&[
        ("Games", games.as_str()),
        ("Computer wins", wins.as_str()),
        ("Draws", draws.as_str()),
        ("Computer losses", losses.as_str()),
        ("Nodes searched", nodes.as_str()),
    ]);
}
