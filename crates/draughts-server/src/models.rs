//! Request and response bodies for the HTTP API.

use chrono::{DateTime, Utc};
use draughts_core::{Board, Color, Move, Square};
use serde::{Deserialize, Serialize};

use crate::rooms::Room;

/// Origin and destination of a requested move, as `[row, col]` pairs.
///
/// Clients identify moves by endpoints only; the server resolves the
/// capture chain from the legal-move set.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveCoords {
    pub from: Square,
    pub to: Square,
}

/// Response to room creation.
#[derive(Debug, Serialize)]
pub struct RoomCreated {
    /// Identifier to share with the other player.
    pub room_id: String,
}

/// Request to join a room on a color.
#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub room_id: String,
    /// Requested seat, "w" or "b".
    pub player: Color,
}

/// Acknowledgement of a successful join.
#[derive(Debug, Serialize)]
pub struct Joined {
    pub success: bool,
}

/// Request naming a room.
#[derive(Debug, Deserialize)]
pub struct RoomIdRequest {
    pub room_id: String,
}

/// Full session snapshot.
#[derive(Debug, Serialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Option<Color>,
    pub winner: Option<Color>,
    pub last_move: Option<Move>,
    /// When the room was created.
    pub created: DateTime<Utc>,
}

impl GameState {
    /// Snapshots a room for the client.
    pub fn from_room(room: &Room) -> Self {
        GameState {
            board: room.board,
            turn: room.turn,
            winner: room.winner,
            last_move: room.last_move.clone(),
            created: room.created_at,
        }
    }
}

/// Board, turn, and winner after an applied move.
#[derive(Debug, Serialize)]
pub struct MoveOutcome {
    pub board: Board,
    pub turn: Option<Color>,
    pub winner: Option<Color>,
}

/// Move submission for a multiplayer room.
#[derive(Debug, Deserialize)]
pub struct RoomMoveRequest {
    pub room_id: String,
    pub player: Color,
    #[serde(rename = "move")]
    pub mv: MoveCoords,
}

/// Move submission for a human-vs-machine game.
///
/// The client holds the board between turns; nothing is stored
/// server-side.
#[derive(Debug, Deserialize)]
pub struct AiMoveRequest {
    pub board: Board,
    pub player: Color,
    #[serde(rename = "move")]
    pub mv: MoveCoords,
}
