use core::fmt;

use crate::board::{Board, BoardVec};
use crate::{Cell, MineBoard};

/// The symbol derived for one cell: the mine marker, or how many of the
/// surrounding cells hold a mine.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Hint {
  Mine,
  Clear(u8),
}

impl Hint {
  /// The rendered character, `'*'` or one of `'0'..='8'`.
  pub fn symbol(self) -> char {
    match self {
      Hint::Mine => '*',
      Hint::Clear(mines) => (b'0' + mines) as char,
    }
  }
}

impl fmt::Display for Hint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

/// The grid of hint symbols derived from a [MineBoard], same dimensions,
/// owned independently of it. Its textual form is the [fmt::Display] impl
/// on [Board].
pub type HintGrid = Board<Hint>;

/// Mines among the up-to-8 cells around `pos`. Off-board offsets contribute
/// nothing: no wraparound, no virtual mines past the edge.
pub fn count_adjacent_mines(board: &MineBoard, pos: BoardVec) -> u8 {
  board.get_around(pos).filter(|cell| cell.is_mine()).count() as u8
}

/// Derives the hint for every cell. Pure: the same board always renders to
/// the same grid.
pub fn render_hints(board: &MineBoard) -> HintGrid {
  let hints = board
    .enumerate()
    .map(|(pos, &cell)| match cell {
      Cell::Mine => Hint::Mine,
      Cell::Empty => Hint::Clear(count_adjacent_mines(board, pos)),
    })
    .collect();
  Board::from_fields(board.width, board.height, hints)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::read_board;

  fn board(text: &str) -> MineBoard {
    read_board(&mut text.as_bytes()).unwrap().unwrap()
  }

  #[test]
  fn symbols_cover_the_output_alphabet() {
    assert_eq!('*', Hint::Mine.symbol());
    assert_eq!('0', Hint::Clear(0).symbol());
    assert_eq!('8', Hint::Clear(8).symbol());
  }

  #[test]
  fn renders_the_three_by_three_board() {
    let board = board("3 3\n..*\n...\n.**\n");
    assert_eq!("01*\n133\n1**\n", render_hints(&board).to_string());
  }

  #[test]
  fn counts_every_neighbour_of_an_interior_cell() {
    let board = board("3 3\n***\n*.*\n***\n");
    let hints = render_hints(&board);
    assert_eq!(Hint::Clear(8), hints[BoardVec::new(1, 1)]);
  }

  #[test]
  fn one_by_one_boards_render_to_a_single_symbol() {
    assert_eq!("0\n", render_hints(&board("1 1\n.\n")).to_string());
    assert_eq!("*\n", render_hints(&board("1 1\n*\n")).to_string());
  }

  #[test]
  fn mine_cells_always_render_as_the_marker() {
    let board = board("2 2\n**\n**\n");
    assert!(render_hints(&board).iter().all(|&hint| hint == Hint::Mine));
  }

  #[test]
  fn hint_grid_keeps_the_board_dimensions() {
    let board = board("2 5\n.....\n..*..\n");
    let hints = render_hints(&board);
    assert_eq!(board.width, hints.width);
    assert_eq!(board.height, hints.height);
  }

  #[test]
  fn counts_stay_inside_the_digit_range() {
    let board = board("4 4\n*..*\n....\n.**.\n*..*\n");
    for (pos, &cell) in board.enumerate() {
      if !cell.is_mine() {
        assert!(count_adjacent_mines(&board, pos) <= 8);
      }
    }
  }

  #[test]
  fn edges_do_not_wrap_around() {
    // A mine in the top-left corner must not count for the far corners.
    let board = board("3 3\n*..\n...\n...\n");
    let hints = render_hints(&board);
    assert_eq!(Hint::Clear(0), hints[BoardVec::new(2, 0)]);
    assert_eq!(Hint::Clear(0), hints[BoardVec::new(0, 2)]);
    assert_eq!(Hint::Clear(0), hints[BoardVec::new(2, 2)]);
    assert_eq!(Hint::Clear(1), hints[BoardVec::new(1, 1)]);
  }

  #[test]
  fn rendering_is_idempotent() {
    let board = board("3 4\n*...\n..*.\n.*..\n");
    assert_eq!(render_hints(&board), render_hints(&board));
  }
}
