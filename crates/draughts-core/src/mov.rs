//! Move representation.

use crate::Square;
use std::fmt;

/// A draughts move.
///
/// A capture chain of several sequential jumps is collapsed into one
/// move: `to` is the landing square after the last jump and `captures`
/// lists every jumped square in jump order. The entries of `captures`
/// are pairwise distinct; a square cannot be captured twice in one
/// chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// The square the piece moves from.
    pub from: Square,
    /// The square the piece finally lands on.
    pub to: Square,
    /// The squares captured along the way, in jump order.
    pub captures: Vec<Square>,
}

impl Move {
    /// Creates a non-capturing move.
    #[inline]
    pub fn step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captures: Vec::new(),
        }
    }

    /// Creates a capturing move with the given capture chain.
    #[inline]
    pub fn jump(from: Square, to: Square, captures: Vec<Square>) -> Self {
        Move { from, to, captures }
    }

    /// Returns true if this move captures at least one piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn step_has_no_captures() {
        let m = Move::step(sq(5, 2), sq(4, 3));
        assert!(!m.is_capture());
        assert!(m.captures.is_empty());
    }

    #[test]
    fn jump_records_chain() {
        let m = Move::jump(sq(5, 2), sq(1, 2), vec![sq(4, 3), sq(2, 3)]);
        assert!(m.is_capture());
        assert_eq!(m.captures.len(), 2);
        assert_eq!(m.captures[0], sq(4, 3));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Move::step(sq(5, 2), sq(4, 3))), "(5,2)-(4,3)");
        assert_eq!(
            format!("{}", Move::jump(sq(3, 4), sq(1, 2), vec![sq(2, 3)])),
            "(3,4)x(1,2)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_wire_format() {
        let m = Move::jump(sq(3, 4), sq(1, 2), vec![sq(2, 3)]);
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"from":[3,4],"to":[1,2],"captures":[[2,3]]}"#
        );
        let back: Move = serde_json::from_str(r#"{"from":[3,4],"to":[1,2],"captures":[]}"#).unwrap();
        assert_eq!(back, Move::step(sq(3, 4), sq(1, 2)));
    }
}
