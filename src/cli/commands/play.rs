//! Play command - Interactive game against the minimax computer

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use rand::Rng;

use crate::{
    Error,
    adapters::Tally,
    app::{App, GameConfig},
    cli::{
        output::{display_index, write_board},
        parse_player_token,
    },
    session::GameSession,
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Your mark (`x` or `o`); asked interactively when omitted
    #[arg(long, short = 'm')]
    pub mark: Option<String>,

    /// Random seed for the reveal delay
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimum delay before the computer's move is shown (ms)
    #[arg(long)]
    pub min_delay: Option<u64>,

    /// Maximum delay before the computer's move is shown (ms)
    #[arg(long)]
    pub max_delay: Option<u64>,

    /// Number cells 1-9 instead of 0-8
    #[arg(long)]
    pub one_based: bool,

    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cell(usize),
    NewGame,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str, one_based: bool) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "n" | "new" => return Command::NewGame,
            _ => {}
        }

        match trimmed.parse::<usize>() {
            Ok(n) if one_based => n
                .checked_sub(1)
                .map(Command::Cell)
                .unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
            Ok(n) => Command::Cell(n),
            Err(_) => Command::Unknown(trimmed.to_string()),
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    let app = App::new(config)?;
    let mut session = app.create_session();
    let mut rng = app.create_rng();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let tally = run(
        &app,
        &mut session,
        &mut rng,
        &mut input,
        &mut out,
        thread::sleep,
    )?;
    writeln!(
        out,
        "Final score: you {} - computer {} - draws {}",
        tally.human_wins, tally.computer_wins, tally.draws
    )?;
    Ok(())
}

fn build_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(mark) = &args.mark {
        config = config.with_human(parse_player_token(mark, "--mark")?);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.min_delay.is_some() || args.max_delay.is_some() {
        let min = args.min_delay.unwrap_or(config.reveal_delay.min_ms);
        let max = args.max_delay.unwrap_or(config.reveal_delay.max_ms.max(min));
        config = config.with_reveal_delay(min, max)?;
    }
    if args.one_based {
        config = config.with_one_based(true);
    }
    Ok(config)
}

/// Drive games over `input`/`out` until the player quits or input ends.
///
/// `sleep` is called with each reveal delay before the computer's move is
/// applied.
pub fn run<R, W, G, S>(
    app: &App,
    session: &mut GameSession,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
    mut sleep: S,
) -> Result<Tally>
where
    R: BufRead,
    W: Write,
    G: Rng,
    S: FnMut(Duration),
{
    let one_based = app.config().one_based;
    let delay = app.config().reveal_delay;
    let (first, last) = (display_index(0, one_based), display_index(8, one_based));

    'games: loop {
        let human = match app.config().human {
            Some(mark) => mark,
            None => match prompt_mark(input, out)? {
                Some(mark) => mark,
                None => break,
            },
        };

        session.start_game(human);
        writeln!(
            out,
            "\nYou play {human}, the computer plays {}. You move first.\n",
            session.computer()
        )?;

        while !session.phase().is_finished() {
            write_board(out, session.board(), one_based)?;
            write!(
                out,
                "Your move ({first}-{last}, n = new game, q = quit): "
            )?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                break 'games;
            };

            let position = match Command::parse(&line, one_based) {
                Command::Quit => break 'games,
                Command::NewGame => continue 'games,
                Command::Unknown(text) => {
                    writeln!(out, "Unrecognised input '{text}'.")?;
                    continue;
                }
                Command::Cell(position) => position,
            };

            match session.submit_human_move(position) {
                Ok(report) if report.outcome.is_terminal() => {}
                Ok(_) => {
                    let pending = session.schedule_computer_move(&delay, rng)?;
                    writeln!(out, "Computer is thinking...")?;
                    out.flush()?;
                    sleep(pending.delay);
                    let reply = session.resolve_pending(pending)?;
                    writeln!(
                        out,
                        "Computer plays {}.",
                        display_index(reply.mv.position, one_based)
                    )?;
                }
                Err(Error::InvalidMove { .. }) => {
                    writeln!(out, "That cell is already taken.")?;
                }
                Err(Error::InvalidPosition { .. }) => {
                    writeln!(out, "Pick a cell between {first} and {last}.")?;
                }
                Err(err @ Error::InvalidGameState { .. }) => {
                    writeln!(out, "{err}")?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if session.phase().is_finished() {
            write_board(out, session.board(), one_based)?;
            write_result(out, session, one_based)?;
            let tally = app.tally().snapshot();
            writeln!(
                out,
                "Score: you {} - computer {} - draws {}",
                tally.human_wins, tally.computer_wins, tally.draws
            )?;

            write!(out, "Play again? [y/N]: ")?;
            out.flush()?;
            match read_line(input)? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }
    }

    Ok(app.tally().snapshot())
}

fn write_result<W: Write>(out: &mut W, session: &GameSession, one_based: bool) -> Result<()> {
    let outcome = session.outcome();
    writeln!(out, "{outcome}")?;

    if let GameOutcome::Win(winner) = outcome {
        if let Some(line) = session.board().winning_line(winner) {
            let cells: Vec<String> = line
                .iter()
                .map(|&pos| display_index(pos, one_based).to_string())
                .collect();
            writeln!(out, "Winning line: {}", cells.join("-"))?;
        }
        if winner == session.human() {
            writeln!(out, "You win!")?;
        } else {
            writeln!(out, "The computer wins.")?;
        }
    }
    Ok(())
}

fn prompt_mark<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Player>> {
    loop {
        write!(out, "Choose your mark [x/o] (q = quit): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<Player>() {
            Ok(mark) => return Ok(Some(mark)),
            Err(_) => writeln!(out, "Please type x or o.")?,
        }
    }
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
