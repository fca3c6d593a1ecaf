use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::{fs, path::PathBuf};
use sudogen::{logger::EventLog, rules, Board, Difficulty, PuzzleGenerator};

#[derive(Parser, Debug)]
#[command(name = "sudogen", version, about = "Sudoku puzzle generator and solver")]
struct Cli {
    /// Seed for the random source; a fixed seed reproduces the same output
    #[arg(long)]
    seed: Option<u64>,

    /// Narrate each step with timestamps
    #[arg(short, long)]
    verbose: bool,

    /// Colored output
    #[arg(long)]
    color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new puzzle
    New {
        #[arg(short, long, value_enum, default_value_t = Level::Medium)]
        difficulty: Level,
    },
    /// Complete a puzzle and print the solution
    Solve {
        /// Puzzle file (81 chars with 0 or . for blanks). Reads stdin if omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Check whether a filled board is a valid solution
    Check {
        /// Board file (81 chars with 0 or . for blanks). Reads stdin if omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

fn read_board(input: &Option<PathBuf>) -> Result<Board> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Board::parse(&s).context("parse board")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = EventLog::new(cli.verbose, cli.color);
    let mut engine = PuzzleGenerator::new(cli.seed);

    match cli.command {
        Command::New { difficulty } => {
            let difficulty = Difficulty::from(difficulty);
            log.event(
                "Generating puzzle",
                &format!("difficulty {difficulty:?}, {} clues", difficulty.clue_target()),
            );
            engine.create_puzzle(difficulty);
            println!("{}", engine.grid().to_compact());
            println!("\n{}", engine.grid());
        }
        Command::Solve { input } => {
            let mut board = read_board(&input)?;
            log.event("Solving", &format!("{} givens\n{board}", board.filled_count()));
            if !rules::is_consistent(&board) {
                bail!("the given cells already conflict; nothing to solve");
            }
            if !engine.solve_into(&mut board) {
                bail!("no solution exists for this puzzle");
            }
            println!("{}", board.to_compact());
            println!("\n{}", board);
        }
        Command::Check { input } => {
            let board = read_board(&input)?;
            let empty = 81 - board.filled_count();
            let verdict = if empty > 0 {
                format!("incomplete: {empty} empty cells").yellow()
            } else if !rules::is_consistent(&board) {
                "invalid: conflicting digits".red()
            } else if engine.is_valid_solution(&board) {
                "valid solution".green()
            } else {
                "invalid solution".red()
            };
            if cli.color {
                println!("{verdict}");
            } else {
                println!("{}", verdict.clear());
            }
        }
    }
    Ok(())
}
