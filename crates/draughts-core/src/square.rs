//! Board square coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize as _, Serialize as _};
use std::fmt;

/// A coordinate on the 8x8 board.
///
/// Both row and column are guaranteed to be in 0..8, so indexing a
/// board with a `Square` can never go out of range. Row 0 is Black's
/// back row; row 7 is White's.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column indices.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns true if this is a dark (playable) square.
    ///
    /// Pieces only ever occupy squares where row + col is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the square offset by the given row and column deltas,
    /// or `None` if that would leave the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.row, self.col).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (row, col) = <(u8, u8)>::deserialize(deserializer)?;
        Square::new(row, col).ok_or_else(|| {
            serde::de::Error::custom(format!("square ({},{}) out of range", row, col))
        })
    }
}
