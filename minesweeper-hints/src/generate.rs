use derive_more::{Display, Error};
use rand::prelude::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::{Cell, MineBoard};

/// Asked for more mines than the board has cells.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot place {mines} mines on a {width}x{height} board")]
pub struct TooManyMines {
  pub width: u32,
  pub height: u32,
  pub mines: u32,
}

/// Builds a board with exactly `mines` mines spread uniformly at random.
pub fn random_board<R: Rng>(
  width: u32,
  height: u32,
  mines: u32,
  rng: &mut R,
) -> Result<MineBoard, TooManyMines> {
  if mines > width * height {
    return Err(TooManyMines { width, height, mines });
  }
  let mut board = Board::new(width, height, Cell::Empty);
  let mut positions: Vec<_> = board.positions().collect();
  positions.shuffle(rng);
  for &pos in positions.iter().take(mines as usize) {
    board[pos] = Cell::Mine;
  }
  debug!(width, height, mines, "generated board");
  Ok(board)
}
