use std::io::{self, BufRead};

use derive_more::{Display, Error};
use tracing::debug;

use crate::board::Board;
use crate::{Cell, MineBoard};

/// Why a board description did not match the input grammar.
///
/// Parsing is all-or-nothing: whichever variant comes back, no partial board
/// is ever exposed, and the reader is left where the failure was detected.
#[derive(Debug, Display, Error)]
pub enum MalformedBoard {
  #[display("could not read input: {_0}")]
  Io(#[error(source)] io::Error),
  #[display("input ended in the middle of a board header")]
  MissingDimension,
  #[display("dimension {token:?} is not a non-negative integer")]
  InvalidDimension { token: String },
  #[display("input ended after {read} of {expected} board rows")]
  MissingRow { read: u32, expected: u32 },
  #[display("row {row} has {len} cells, expected {expected}")]
  ShortRow { row: u32, len: u32, expected: u32 },
  #[display("invalid cell {found:?} at row {row}, column {col}")]
  InvalidCell { row: u32, col: u32, found: char },
}

impl From<io::Error> for MalformedBoard {
  fn from(err: io::Error) -> Self {
    MalformedBoard::Io(err)
  }
}

/// Reads one board description: a `rows cols` header followed by `rows`
/// lines over the alphabet `{'.', '*'}`.
///
/// `Ok(None)` is the stream terminator: a zero in the header, or a clean end
/// of input before any header token. Everything else that violates the
/// grammar is a [MalformedBoard], and a caller draining a stream treats it
/// as end of stream too.
pub fn read_board<R: BufRead>(input: &mut R) -> Result<Option<MineBoard>, MalformedBoard> {
  let (rows, cols) = match read_header(input)? {
    None | Some((0, _)) | Some((_, 0)) => return Ok(None),
    Some(dims) => dims,
  };
  let cells = read_cells(input, rows, cols)?;
  debug!(rows, cols, "read board");
  Ok(Some(Board::from_fields(cols, rows, cells)))
}

/// Collects the two header integers. They may be spread over several lines;
/// whatever follows the second token on its line is discarded.
fn read_header<R: BufRead>(input: &mut R) -> Result<Option<(u32, u32)>, MalformedBoard> {
  let mut dims = [0u32; 2];
  let mut seen = 0;
  let mut line = String::new();
  while seen < dims.len() {
    line.clear();
    if input.read_line(&mut line)? == 0 {
      // A stream that simply ends is normal termination. One that ends
      // half-way through a header is not.
      return if seen == 0 { Ok(None) } else { Err(MalformedBoard::MissingDimension) };
    }
    for token in line.split_whitespace().take(dims.len() - seen) {
      dims[seen] = token.parse().map_err(|_| MalformedBoard::InvalidDimension {
        token: token.to_string(),
      })?;
      seen += 1;
    }
  }
  Ok(Some((dims[0], dims[1])))
}

fn read_cells<R: BufRead>(input: &mut R, rows: u32, cols: u32) -> Result<Vec<Cell>, MalformedBoard> {
  let mut cells = Vec::with_capacity((rows * cols) as usize);
  let mut line = String::new();
  for row in 0..rows {
    line.clear();
    if input.read_line(&mut line)? == 0 {
      return Err(MalformedBoard::MissingRow { read: row, expected: rows });
    }
    let mut chars = line.trim_end_matches(['\r', '\n']).chars();
    for col in 0..cols {
      match chars.next() {
        Some('.') => cells.push(Cell::Empty),
        Some('*') => cells.push(Cell::Mine),
        Some(found) => return Err(MalformedBoard::InvalidCell { row, col, found }),
        None => return Err(MalformedBoard::ShortRow { row, len: col, expected: cols }),
      }
    }
    // Characters past `cols` are discarded, like the header line remainder.
  }
  Ok(cells)
}
