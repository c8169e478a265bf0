//! Move submission handlers.

use axum::extract::State;
use axum::Json;
use draughts_core::{Board, Color};
use draughts_engine::{ai, has_any_move, legal_moves, make_move};

use crate::error::ApiError;
use crate::models::{AiMoveRequest, MoveOutcome, RoomMoveRequest};
use crate::AppState;

/// Submit a move in a multiplayer room.
///
/// # Endpoint
///
/// `POST /api/move_multiplayer`
///
/// # Response
///
/// - `200 OK`: `{board, turn, winner}` after the move
/// - `404 Not Found`: no room with the given id
/// - `400 Bad Request`: game finished, wrong turn, or invalid move
pub async fn move_multiplayer(
    State(state): State<AppState>,
    Json(req): Json<RoomMoveRequest>,
) -> Result<Json<MoveOutcome>, ApiError> {
    let mut rooms = state.rooms.lock().unwrap();
    let room = rooms.get_mut(&req.room_id).ok_or(ApiError::RoomNotFound)?;
    room.submit_move(req.player, req.mv.from, req.mv.to)?;

    tracing::info!(
        room_id = %req.room_id,
        player = %req.player,
        from = %req.mv.from,
        to = %req.mv.to,
        "move applied"
    );
    if let Some(winner) = room.winner {
        tracing::info!(room_id = %req.room_id, %winner, "game over");
    }

    Ok(Json(MoveOutcome {
        board: room.board,
        turn: room.turn,
        winner: room.winner,
    }))
}

/// Start a fresh single-player game.
///
/// # Endpoint
///
/// `POST /api/new_game`
///
/// # Response
///
/// - `200 OK`: starting board, White to move, no winner
pub async fn new_game() -> Json<MoveOutcome> {
    Json(MoveOutcome {
        board: Board::new_game(),
        turn: Some(Color::White),
        winner: None,
    })
}

/// Play one human turn against the machine.
///
/// The client holds the board; the human move is validated against the
/// legal-move set, then the greedy picker answers for the opponent.
///
/// # Endpoint
///
/// `POST /api/move`
///
/// # Response
///
/// - `200 OK`: `{board, turn, winner}` after both moves
/// - `400 Bad Request`: the human move is not legal
pub async fn move_vs_ai(Json(req): Json<AiMoveRequest>) -> Result<Json<MoveOutcome>, ApiError> {
    let human = req.player;
    let mv = legal_moves(&req.board, human)
        .into_iter()
        .find(|m| m.from == req.mv.from && m.to == req.mv.to)
        .ok_or(ApiError::InvalidMove)?;
    let mut board = make_move(&req.board, &mv);

    let machine = human.opposite();
    if !has_any_move(&board, machine) {
        return Ok(Json(MoveOutcome {
            board,
            turn: None,
            winner: Some(human),
        }));
    }

    match ai::choose_move(&board, machine) {
        Some(reply) => {
            tracing::debug!(%reply, "machine reply");
            board = make_move(&board, &reply);
            if has_any_move(&board, human) {
                Ok(Json(MoveOutcome {
                    board,
                    turn: Some(human),
                    winner: None,
                }))
            } else {
                Ok(Json(MoveOutcome {
                    board,
                    turn: None,
                    winner: Some(machine),
                }))
            }
        }
        None => Ok(Json(MoveOutcome {
            board,
            turn: None,
            winner: Some(human),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoveCoords;
    use crate::rooms;
    use draughts_core::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn test_state() -> AppState {
        AppState {
            rooms: rooms::new_store(),
        }
    }

    fn coords(from: Square, to: Square) -> MoveCoords {
        MoveCoords { from, to }
    }

    #[tokio::test]
    async fn multiplayer_move_switches_turn() {
        let state = test_state();
        let room_id = rooms::create_room(&state.rooms);

        let Json(outcome) = move_multiplayer(
            State(state.clone()),
            Json(RoomMoveRequest {
                room_id,
                player: Color::White,
                mv: coords(sq(5, 2), sq(4, 3)),
            }),
        )
        .await
        .unwrap();
        assert_eq!(outcome.turn, Some(Color::Black));
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.board.get(sq(4, 3)), draughts_core::Cell::WhiteMan);
    }

    #[tokio::test]
    async fn multiplayer_rejects_wrong_turn_and_bad_moves() {
        let state = test_state();
        let room_id = rooms::create_room(&state.rooms);

        let err = move_multiplayer(
            State(state.clone()),
            Json(RoomMoveRequest {
                room_id: room_id.clone(),
                player: Color::Black,
                mv: coords(sq(2, 1), sq(3, 0)),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::NotYourTurn);

        let err = move_multiplayer(
            State(state),
            Json(RoomMoveRequest {
                room_id,
                player: Color::White,
                mv: coords(sq(5, 2), sq(3, 2)),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::InvalidMove);
    }

    #[tokio::test]
    async fn new_game_starts_with_white() {
        let Json(outcome) = new_game().await;
        assert_eq!(outcome.board, Board::new_game());
        assert_eq!(outcome.turn, Some(Color::White));
        assert_eq!(outcome.winner, None);
    }

    #[tokio::test]
    async fn vs_ai_round_trip_returns_turn_to_human() {
        let Json(outcome) = move_vs_ai(Json(AiMoveRequest {
            board: Board::new_game(),
            player: Color::White,
            mv: coords(sq(5, 2), sq(4, 3)),
        }))
        .await
        .unwrap();
        // No capture is possible on move one, so the machine answered
        // with a simple step and it is the human's turn again.
        assert_eq!(outcome.turn, Some(Color::White));
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.board.pieces(Color::Black).count(), 12);
        assert_ne!(outcome.board, make_move(
            &Board::new_game(),
            &draughts_core::Move::step(sq(5, 2), sq(4, 3)),
        ));
    }

    #[tokio::test]
    async fn vs_ai_rejects_illegal_move() {
        let err = move_vs_ai(Json(AiMoveRequest {
            board: Board::new_game(),
            player: Color::White,
            mv: coords(sq(5, 2), sq(2, 2)),
        }))
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::InvalidMove);
    }

    #[tokio::test]
    async fn vs_ai_capturing_the_last_piece_wins() {
        let board = Board::from_ascii(
            ". . . . . . . .
             . . . . . . . .
             . . . b . . . .
             . . . . w . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        )
        .unwrap();
        let Json(outcome) = move_vs_ai(Json(AiMoveRequest {
            board,
            player: Color::White,
            mv: coords(sq(3, 4), sq(1, 2)),
        }))
        .await
        .unwrap();
        assert_eq!(outcome.winner, Some(Color::White));
        assert_eq!(outcome.turn, None);
    }
}
