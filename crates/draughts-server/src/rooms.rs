//! In-memory room store for multiplayer games.

use chrono::{DateTime, Utc};
use draughts_core::{Board, Color, Move, Square};
use draughts_engine::{has_any_move, legal_moves, make_move};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::error::ApiError;

/// A single game session.
///
/// Rooms live behind the store's mutex, so validating and applying a
/// move is atomic with respect to concurrent requests for the same
/// room.
#[derive(Debug, Clone)]
pub struct Room {
    /// Current position.
    pub board: Board,
    /// Side to move; cleared once the game is over.
    pub turn: Option<Color>,
    /// Winner, once the side to move has no reply.
    pub winner: Option<Color>,
    /// The last applied move.
    pub last_move: Option<Move>,
    /// Colors taken by joined players.
    pub players: Vec<Color>,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Creates a room with a fresh board, White to move.
    pub fn new() -> Self {
        Room {
            board: Board::new_game(),
            turn: Some(Color::White),
            winner: None,
            last_move: None,
            players: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Seats a player on the given color.
    pub fn join(&mut self, color: Color) -> Result<(), ApiError> {
        if self.players.contains(&color) {
            return Err(ApiError::SeatTaken);
        }
        if self.players.len() >= 2 {
            return Err(ApiError::RoomFull);
        }
        self.players.push(color);
        Ok(())
    }

    /// Validates and applies a move for `player`.
    ///
    /// The request is matched by origin and destination against the
    /// enumerated legal moves; the matched move, with its full capture
    /// chain, is the one applied. If the opponent then has no reply,
    /// the mover is recorded as winner and the turn is cleared.
    pub fn submit_move(&mut self, player: Color, from: Square, to: Square) -> Result<(), ApiError> {
        if self.winner.is_some() {
            return Err(ApiError::GameFinished);
        }
        if self.turn != Some(player) {
            return Err(ApiError::NotYourTurn);
        }

        let mv = legal_moves(&self.board, player)
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .ok_or(ApiError::InvalidMove)?;

        self.board = make_move(&self.board, &mv);
        self.last_move = Some(mv);

        let opponent = player.opposite();
        if has_any_move(&self.board, opponent) {
            self.turn = Some(opponent);
        } else {
            self.winner = Some(player);
            self.turn = None;
        }
        Ok(())
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

/// All live rooms behind one global lock.
pub type RoomStore = Arc<Mutex<HashMap<String, Room>>>;

/// Creates an empty room store.
pub fn new_store() -> RoomStore {
    Arc::new(Mutex::new(HashMap::new()))
}

/// Creates a room and returns its id.
///
/// Ids are the first 8 characters of a v4 uuid, re-rolled on the off
/// chance of a collision with a live room.
pub fn create_room(store: &RoomStore) -> String {
    let mut rooms = store.lock().unwrap();
    loop {
        let id = Uuid::new_v4().to_string()[..8].to_string();
        if !rooms.contains_key(&id) {
            rooms.insert(id.clone(), Room::new());
            return id;
        }
    }
}
