//! The 8x8 playing board.

use crate::{Cell, Color, Square};
#[cfg(feature = "serde")]
use serde::Deserialize as _;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, got {got}")]
    RowLength { row: usize, got: usize },

    #[error("row {row}: invalid cell character '{ch}'")]
    InvalidCell { row: usize, ch: char },
}

/// An 8x8 grid of cells, row-major.
///
/// The board is a plain 64-byte value; exploratory mutation during
/// capture search works on copies. Pieces only ever occupy dark
/// squares (row + col odd) on boards reachable from [`Board::new_game`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Returns a board with no pieces on it.
    #[inline]
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Returns the canonical starting position.
    ///
    /// Black men fill the dark squares of rows 0-2, White men those of
    /// rows 5-7, twelve pieces each.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            if !sq.is_dark() {
                continue;
            }
            if sq.row() < 3 {
                board.set(sq, Cell::man(Color::Black));
            } else if sq.row() > 4 {
                board.set(sq, Cell::man(Color::White));
            }
        }
        board
    }

    /// Returns the cell at the given square.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Writes the cell at the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Iterates over the squares holding pieces of the given color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().filter_map(move |sq| {
            let cell = self.get(sq);
            cell.owned_by(color).then_some((sq, cell))
        })
    }

    /// Parses a board from an 8-line diagram.
    ///
    /// Each line holds the 8 cell characters of one row (row 0 first);
    /// whitespace between characters is ignored, as are blank lines.
    ///
    /// ```
    /// use draughts_core::Board;
    ///
    /// let board = Board::from_ascii(
    ///     ". b . b . b . b
    ///      b . b . b . b .
    ///      . b . b . b . b
    ///      . . . . . . . .
    ///      . . . . . . . .
    ///      w . w . w . w .
    ///      . w . w . w . w
    ///      w . w . w . w .",
    /// )
    /// .unwrap();
    /// assert_eq!(board, Board::new_game());
    /// ```
    pub fn from_ascii(s: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != 8 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != 8 {
                return Err(BoardParseError::RowLength {
                    row,
                    got: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell =
                    Cell::from_char(ch).ok_or(BoardParseError::InvalidCell { row, ch })?;
                // Row and column are both < 8 here.
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    board.set(sq, cell);
                }
            }
        }
        Ok(board)
    }

    /// Renders the board as an 8-line diagram accepted by
    /// [`Board::from_ascii`].
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(8 * 16);
        for row in self.cells.iter() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(cell.to_char());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self.to_ascii())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|row| row.as_slice()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let rows = <Vec<Vec<Cell>>>::deserialize(deserializer)?;
        if rows.len() != 8 {
            return Err(D::Error::custom(format!(
                "expected 8 board rows, got {}",
                rows.len()
            )));
        }
        let mut cells = [[Cell::Empty; 8]; 8];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 8 {
                return Err(D::Error::custom(format!(
                    "expected 8 cells in row {}, got {}",
                    r,
                    row.len()
                )));
            }
            for (c, &cell) in row.iter().enumerate() {
                cells[r][c] = cell;
            }
        }
        Ok(Board { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_counts() {
        let board = Board::new_game();
        assert_eq!(board.pieces(Color::White).count(), 12);
        assert_eq!(board.pieces(Color::Black).count(), 12);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::new_game();
        for sq in Square::all() {
            let cell = board.get(sq);
            if !sq.is_dark() {
                assert!(cell.is_empty(), "light square {} must stay empty", sq);
            } else if sq.row() < 3 {
                assert_eq!(cell, Cell::BlackMan);
            } else if sq.row() > 4 {
                assert_eq!(cell, Cell::WhiteMan);
            } else {
                assert!(cell.is_empty());
            }
        }
    }

    #[test]
    fn get_set_roundtrip() {
        let mut board = Board::empty();
        board.set(sq(4, 3), Cell::WhiteKing);
        assert_eq!(board.get(sq(4, 3)), Cell::WhiteKing);
        assert_eq!(board.get(sq(3, 4)), Cell::Empty);
    }

    #[test]
    fn ascii_roundtrip() {
        let board = Board::new_game();
        assert_eq!(Board::from_ascii(&board.to_ascii()).unwrap(), board);
    }

    #[test]
    fn ascii_rejects_bad_diagrams() {
        assert_eq!(
            Board::from_ascii("w . w"),
            Err(BoardParseError::RowCount(1))
        );
        let short_row = ". . . . . . . .\n".repeat(7) + ". . .";
        assert_eq!(
            Board::from_ascii(&short_row),
            Err(BoardParseError::RowLength { row: 7, got: 3 })
        );
        let bad_char = ". . . . . . . .\n".repeat(7) + ". . . q . . . .";
        assert_eq!(
            Board::from_ascii(&bad_char),
            Err(BoardParseError::InvalidCell { row: 7, ch: 'q' })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_wire_format() {
        let mut board = Board::empty();
        board.set(sq(0, 1), Cell::BlackMan);
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with(r#"[[".","b",".""#));
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert!(serde_json::from_str::<Board>("[[\".\"]]").is_err());
    }
}
