//! Terminal front end: play against the engine or watch it play itself.
//!
//! Cells are entered as indices (`row * size + col`). `u` undoes the last
//! turn, `q` quits.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use tictactoe_engine::agent::ai::Tier;
use tictactoe_engine::config::{win_length_for, GameConfig, PlayerConfig, TimeoutAction, TurnTimeout};
use tictactoe_engine::game_repr::Mark;
use tictactoe_engine::orchestrator::Orchestrator;
use tictactoe_engine::GameStatus;

/// Who sits in a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeatKind {
    Human,
    Random,
    Greedy,
    Minimax,
}

impl From<SeatKind> for PlayerConfig {
    fn from(seat: SeatKind) -> Self {
        match seat {
            SeatKind::Human => PlayerConfig::Human,
            SeatKind::Random => PlayerConfig::Computer { tier: Tier::Random },
            SeatKind::Greedy => PlayerConfig::Computer { tier: Tier::Greedy },
            SeatKind::Minimax => PlayerConfig::Computer { tier: Tier::Minimax },
        }
    }
}

/// k-in-a-row on an N×N board
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play k-in-a-row against a tiered computer opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Board side length
    #[arg(short, long, default_value = "3")]
    size: usize,

    /// Marks in a row needed to win (3 up to 3x3, 4 above when omitted)
    #[arg(short = 'k', long)]
    win_length: Option<usize>,

    /// Seat for X
    #[arg(short = 'x', long, value_enum, default_value = "human")]
    x: SeatKind,

    /// Seat for O
    #[arg(short = 'o', long, value_enum, default_value = "minimax")]
    o: SeatKind,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Mark that opens the first game
    #[arg(long, default_value = "X")]
    start: Mark,

    /// Alternate the opening mark every game
    #[arg(long)]
    swap_start: bool,

    /// Seed for reproducible computer play
    #[arg(long)]
    seed: Option<u64>,

    /// Split minimax root moves across threads
    #[arg(long)]
    parallel: bool,

    /// Typing `t` at a prompt places a random mark instead of passing
    #[arg(long)]
    timeout_random: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let action = if self.timeout_random {
            TimeoutAction::RandomMove
        } else {
            TimeoutAction::Pass
        };
        let mut config = GameConfig::from_seats(self.size, self.x.into(), self.o.into())
            .with_win_length(self.win_length.unwrap_or_else(|| win_length_for(self.size)))
            .with_start_player(self.start)
            .with_swap_start(self.swap_start)
            .with_turn_timeout(TurnTimeout {
                action,
                ..TurnTimeout::default()
            })
            .with_parallel(self.parallel);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

enum Command {
    Cell(usize),
    Undo,
    Timeout,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "q" | "quit" => Some(Command::Quit),
        "u" | "undo" => Some(Command::Undo),
        "t" | "timeout" => Some(Command::Timeout),
        other => other.parse().ok().map(Command::Cell),
    }
}

/// Play one game; returns false if the user quit.
fn play_game(orch: &mut Orchestrator, input: &mut impl BufRead) -> Result<bool> {
    println!("{}\n", orch.session().board());

    while !orch.session().is_over() {
        if let Some(index) = orch.request_computer_move()? {
            println!("{} plays {}", orch.current_player(), index);
            orch.commit_computer_move()?;
            println!("{}\n", orch.session().board());
            continue;
        }

        print!("{} to move: ", orch.current_player());
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let outcome = match parse_command(&line) {
            Some(Command::Quit) => return Ok(false),
            Some(Command::Undo) => orch.undo().map(|n| println!("took back {} move(s)", n)),
            Some(Command::Timeout) => orch.on_turn_timeout().map(|_| ()),
            Some(Command::Cell(index)) => orch.handle_input(index).map(|_| ()),
            None => {
                println!("enter a cell index, u, t or q");
                continue;
            }
        };
        match outcome {
            Ok(()) => println!("{}\n", orch.session().board()),
            Err(err) => println!("{}", err),
        }
    }

    match orch.session().status() {
        GameStatus::Won { winner, line } => println!("{} wins on {:?}", winner, line.cells()),
        GameStatus::Drawn => println!("Draw"),
        GameStatus::InProgress => {}
    }
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut orch = Orchestrator::new(cli.game_config()).context("invalid game configuration")?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    for game in 0..cli.games {
        if game > 0 {
            let start = orch.rematch();
            println!("--- game {} ({} starts) ---", game + 1, start);
        }
        let finished = play_game(&mut orch, &mut input)?;
        println!("{}", orch.scoreboard());
        if !finished {
            break;
        }
    }
    Ok(())
}
