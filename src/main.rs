//! Command line Isolation game against the engine.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use log::{info, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;

use isolation_engine::coretypes::MoveList;
use isolation_engine::timeman::{Clock, DEFAULT_THRESHOLD_MS};
use isolation_engine::{error, Board, EngineBuilder, Evaluator, GameState, Method, Move, Player};

/// Which player, if any, takes moves from stdin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Human(Option<Player>);

fn parse_human(s: &str) -> error::Result<Human> {
    match s.trim().to_ascii_lowercase().as_str() {
        "none" => Ok(Human(None)),
        _ => s.parse().map(|player| Human(Some(player))),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = 7)]
    width: u32,
    /// Board height in cells.
    #[arg(long, default_value_t = 7)]
    height: u32,
    /// Player controlled from stdin: one, two or none.
    #[arg(long, default_value = "one", value_parser = parse_human)]
    human: Human,
    /// Milliseconds the engine may spend on each move.
    #[arg(long, default_value_t = 1000)]
    move_time: u64,
    /// Depth searched when iterative deepening is off.
    #[arg(long, default_value_t = 3)]
    depth: u32,
    /// Evaluation strategy: center, mobility or weighted.
    #[arg(long, default_value_t = Evaluator::WeightedMobility)]
    evaluator: Evaluator,
    /// Search method: minimax or alphabeta.
    #[arg(long, default_value_t = Method::AlphaBeta)]
    method: Method,
    /// Search once at --depth instead of deepening until time runs out.
    #[arg(long)]
    fixed_depth: bool,
    /// Milliseconds left at which the engine stops searching.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_MS)]
    threshold: f64,
    /// Place both players randomly with this seed before play begins.
    #[arg(long)]
    seed: Option<u64>,
    /// Log level: error, warn, info, debug or trace.
    #[arg(long, default_value_t = Level::Warn)]
    log_level: Level,
}

/// Command typed by the human player.
enum Input {
    Exit,
    Help,
    Error,
    GameMove(Move),
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        if let Ok(move_) = s.parse() {
            return Self::GameMove(move_);
        }
        match s {
            "exit" | "quit" => Self::Exit,
            "help" => Self::Help,
            _ => Self::Error,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let engine = EngineBuilder::new()
        .depth(args.depth)
        .evaluator(args.evaluator)
        .iterative(!args.fixed_depth)
        .method(args.method)
        .threshold_ms(args.threshold)
        .build();
    info!("{engine:?}");

    let mut board = Board::new(args.width, args.height)?;
    if let Some(seed) = args.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        board = board.play_random(&mut rng, 2)?;
    }

    println!("Isolation {}x{}\n", args.width, args.height);

    loop {
        println!("{board}");
        let player = board.active_player();
        let legal_moves = board.active_moves();

        if legal_moves.is_empty() {
            println!("{player} cannot move. {} wins!", player.opponent());
            break;
        }

        let move_ = if args.human.0 == Some(player) {
            match read_move(&legal_moves)? {
                Some(move_) => move_,
                None => break,
            }
        } else {
            println!("thinking...");
            let clock = Clock::start(Duration::from_millis(args.move_time));
            let result = engine.search(&board, &legal_moves, clock.probe())?;
            println!("{result}");

            if result.best_move.is_null() {
                println!("{player} ran out of time and forfeits.");
                break;
            }
            println!("{player} played {}.", result.best_move);
            result.best_move
        };

        board.apply_move(move_)?;
    }

    Ok(())
}

/// Prompt until the human enters one of `legal_moves`. Returns None on exit or end of input.
fn read_move(legal_moves: &MoveList) -> io::Result<Option<Move>> {
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        match Input::from(input.trim()) {
            Input::Exit => return Ok(None),
            Input::Help => {
                println!("Commands:");
                println!("help => Print this help text.");
                println!("exit => End the game.");
                println!("\nTo move, enter a row and column, e.g. `2 3` or `(2, 3)`.");
                println!("Legal moves: {}", list_moves(legal_moves));
            }
            Input::Error => println!("Invalid command: {}", input.trim()),
            Input::GameMove(move_) if legal_moves.contains(&move_) => return Ok(Some(move_)),
            Input::GameMove(move_) => {
                println!("{move_} is illegal. Legal moves: {}", list_moves(legal_moves));
            }
        }
    }
}

fn list_moves(moves: &MoveList) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
