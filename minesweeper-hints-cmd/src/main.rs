use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minesweeper_hints::generate::random_board;
use minesweeper_hints::{read_board, render_hints};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Turns minesweeper mine maps into hint grids")]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Read board descriptions and print their hint grids (the default).
  Render {
    /// File with board descriptions; standard input when absent.
    input: Option<PathBuf>,
  },
  /// Print a random board in the input format, terminator included.
  Generate {
    rows: u32,
    cols: u32,
    mines: u32,
    /// Seed for a reproducible board.
    #[arg(long)]
    seed: Option<u64>,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  match Cli::parse().command.unwrap_or(Command::Render { input: None }) {
    Command::Render { input } => render(input),
    Command::Generate { rows, cols, mines, seed } => generate(rows, cols, mines, seed),
  }
}

fn render(input: Option<PathBuf>) -> Result<()> {
  match input {
    Some(path) => {
      let file = File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;
      render_stream(&mut BufReader::new(file))
    }
    None => render_stream(&mut io::stdin().lock()),
  }
}

fn render_stream<R: BufRead>(input: &mut R) -> Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut first = true;
  loop {
    match read_board(input) {
      Ok(Some(board)) => {
        if !first {
          writeln!(out)?;
        }
        first = false;
        write!(out, "{}", render_hints(&board))?;
      }
      Ok(None) => return Ok(()),
      Err(err) => {
        // A malformed entry ends the stream the same way the terminator
        // does; nothing is printed for it.
        warn!("stopping: {err}");
        return Ok(());
      }
    }
  }
}

fn generate(rows: u32, cols: u32, mines: u32, seed: Option<u64>) -> Result<()> {
  let mut rng = match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  let board = random_board(cols, rows, mines, &mut rng)?;
  print!("{} {}\n{}0 0\n", rows, cols, board);
  Ok(())
}
