//! Trivial greedy move picker.

use crate::movegen::legal_moves;
use draughts_core::{Board, Color, Move};

/// Picks the first legal move for `color`, if any.
///
/// No search and no evaluation. Because capturing is mandatory, the
/// first enumerated move is already a maximal capture whenever one
/// exists.
pub fn choose_move(board: &Board, color: Color) -> Option<Move> {
    legal_moves(board, color).into_iter().next()
}
