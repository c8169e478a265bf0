//! Legal move generation and application.
//!
//! Men step and jump diagonally forward; kings slide and capture any
//! distance along a diagonal ("flying" kings). Capturing is mandatory,
//! chains must be followed to a dead end, and only the chains capturing
//! the most pieces are legal.

use draughts_core::{Board, Cell, Color, Move, Square};

/// The four diagonal directions as (row, col) deltas.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Enumerates every legal move for `color` on `board`.
///
/// If any capture exists, non-capturing moves are discarded and only
/// the capture chains of the greatest length survive; the maximum is
/// taken across all of the player's pieces, so a piece with a shorter
/// chain may not move at all. Without captures, every simple move is
/// returned.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (sq, piece) in board.pieces(color) {
        moves.extend(piece_moves(board, sq, piece, false, sq, &[]));
    }

    let longest = moves.iter().map(|m| m.captures.len()).max().unwrap_or(0);
    if longest > 0 {
        moves.retain(|m| m.captures.len() == longest);
    }
    moves
}

/// Returns true if `color` has at least one legal move.
///
/// A player left without a legal move has lost; the caller compares
/// against the opponent after applying a move to detect the win.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    !legal_moves(board, color).is_empty()
}

/// Applies `mv` to `board` and returns the resulting board.
///
/// Clears the origin, writes the moving piece to the destination,
/// crowns a man landing on its king row, and clears every captured
/// square. The move must come from [`legal_moves`] on the same board;
/// no legality check is performed here.
pub fn make_move(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    let piece = next.get(mv.from);
    next.set(mv.from, Cell::Empty);

    let landed = match piece.color() {
        Some(color) if !piece.is_king() && mv.to.row() == color.king_row() => piece.crowned(),
        _ => piece,
    };
    next.set(mv.to, landed);

    for &taken in &mv.captures {
        next.set(taken, Cell::Empty);
    }
    next
}

/// Every way a single piece can move or chain-capture from `sq`.
///
/// `origin` is where the eventual move starts (the piece's square
/// before the first jump) and `captured` lists the squares already
/// taken earlier in the chain, so no square is captured twice. A chain
/// is materialized as a move only once no further jump exists from its
/// landing square; a prefix of a longer chain is never returned on its
/// own. With `must_capture` set (inside a chain) simple moves are not
/// emitted.
fn piece_moves(
    board: &Board,
    sq: Square,
    piece: Cell,
    must_capture: bool,
    origin: Square,
    captured: &[Square],
) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(color) = piece.color() else {
        return moves;
    };

    if piece.is_king() {
        for (dr, dc) in DIAGONALS {
            let mut dist = 1i8;
            while let Some(stop) = sq.offset(dr * dist, dc * dist) {
                let cell = board.get(stop);
                if cell.is_empty() {
                    if !must_capture {
                        moves.push(Move::step(sq, stop));
                    }
                    dist += 1;
                    continue;
                }
                if cell.owned_by(color.opposite()) {
                    // Flying capture: any empty square behind the
                    // victim is a landing square, until a second piece
                    // blocks the ray.
                    let mut beyond = dist + 1;
                    while let Some(landing) = sq.offset(dr * beyond, dc * beyond) {
                        if !board.get(landing).is_empty() {
                            break;
                        }
                        if !captured.contains(&stop) {
                            explore_jump(board, sq, piece, stop, landing, origin, captured, &mut moves);
                        }
                        beyond += 1;
                    }
                }
                // The ray stops at the first occupied square.
                break;
            }
        }
        return moves;
    }

    let fwd = color.forward_direction();
    for dc in [-1i8, 1] {
        let Some(ahead) = sq.offset(fwd, dc) else {
            continue;
        };
        let neighbor = board.get(ahead);
        if neighbor.is_empty() {
            if !must_capture {
                moves.push(Move::step(sq, ahead));
            }
        } else if neighbor.owned_by(color.opposite()) && !captured.contains(&ahead) {
            if let Some(landing) = sq.offset(2 * fwd, 2 * dc) {
                if board.get(landing).is_empty() {
                    explore_jump(board, sq, piece, ahead, landing, origin, captured, &mut moves);
                }
            }
        }
    }
    moves
}

/// Explores one jump over `victim` onto `landing`.
///
/// Recurses from the landing square on a copy of the board with the
/// mover and the victim removed. If longer chains exist they are
/// appended; otherwise the completed chain itself is. The piece keeps
/// its rank during the chain: a man passing its king row mid-chain is
/// not crowned until the whole move is applied.
#[allow(clippy::too_many_arguments)]
fn explore_jump(
    board: &Board,
    sq: Square,
    piece: Cell,
    victim: Square,
    landing: Square,
    origin: Square,
    captured: &[Square],
    out: &mut Vec<Move>,
) {
    let mut next = *board;
    next.set(sq, Cell::Empty);
    next.set(victim, Cell::Empty);
    next.set(landing, piece);

    let mut chain = captured.to_vec();
    chain.push(victim);

    let further = piece_moves(&next, landing, piece, true, origin, &chain);
    if further.is_empty() {
        out.push(Move::jump(origin, landing, chain));
    } else {
        out.extend(further);
    }
}
