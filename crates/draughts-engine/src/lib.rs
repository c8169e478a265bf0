//! Draughts move generation and game-state evaluation.
//!
//! This crate implements the rules engine on top of [`draughts_core`]:
//! - [`legal_moves`] enumerates every legal move for a player,
//!   enforcing mandatory captures and the maximal-capture rule
//! - [`make_move`] applies an enumerated move, resolving capture
//!   removal and crowning
//! - [`has_any_move`] backs win detection: a player left without a
//!   legal move has lost
//! - [`ai::choose_move`] is the trivial greedy picker used by the
//!   human-vs-machine endpoint
//!
//! The engine is pure: it holds no state and only computes over board
//! values handed to it, so it can be called concurrently on independent
//! boards without synchronization.
//!
//! # Example
//!
//! ```
//! use draughts_core::{Board, Color};
//! use draughts_engine::{legal_moves, make_move};
//!
//! let board = Board::new_game();
//! let moves = legal_moves(&board, Color::White);
//! assert_eq!(moves.len(), 7);
//!
//! let next = make_move(&board, &moves[0]);
//! assert_ne!(next, board);
//! ```

pub mod ai;
mod movegen;

pub use movegen::{has_any_move, legal_moves, make_move};
