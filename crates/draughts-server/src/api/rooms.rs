//! Room lifecycle handlers.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::models::{GameState, JoinRoomRequest, Joined, RoomCreated, RoomIdRequest};
use crate::rooms;
use crate::AppState;

/// Create a new room.
///
/// # Endpoint
///
/// `POST /api/create_room`
///
/// # Response
///
/// - `200 OK`: `{"room_id": "..."}`
pub async fn create_room(State(state): State<AppState>) -> Json<RoomCreated> {
    let room_id = rooms::create_room(&state.rooms);
    tracing::info!(%room_id, "room created");
    Json(RoomCreated { room_id })
}

/// Join a room on a color.
///
/// # Endpoint
///
/// `POST /api/join_room`
///
/// # Response
///
/// - `200 OK`: `{"success": true}`
/// - `404 Not Found`: no room with the given id
/// - `400 Bad Request`: seat already taken or room full
pub async fn join_room(
    State(state): State<AppState>,
    Json(req): Json<JoinRoomRequest>,
) -> Result<Json<Joined>, ApiError> {
    let mut rooms = state.rooms.lock().unwrap();
    let room = rooms.get_mut(&req.room_id).ok_or(ApiError::RoomNotFound)?;
    room.join(req.player)?;
    tracing::info!(room_id = %req.room_id, player = %req.player, "player joined");
    Ok(Json(Joined { success: true }))
}

/// Fetch the current state of a room.
///
/// # Endpoint
///
/// `POST /api/game_state`
///
/// # Response
///
/// - `200 OK`: `{board, turn, winner, last_move}`
/// - `404 Not Found`: no room with the given id
pub async fn game_state(
    State(state): State<AppState>,
    Json(req): Json<RoomIdRequest>,
) -> Result<Json<GameState>, ApiError> {
    let rooms = state.rooms.lock().unwrap();
    let room = rooms.get(&req.room_id).ok_or(ApiError::RoomNotFound)?;
    Ok(Json(GameState::from_room(room)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Color;

    fn test_state() -> AppState {
        AppState {
            rooms: rooms::new_store(),
        }
    }

    #[tokio::test]
    async fn create_then_join_and_fetch() {
        let state = test_state();
        let Json(created) = create_room(State(state.clone())).await;

        let join = join_room(
            State(state.clone()),
            Json(JoinRoomRequest {
                room_id: created.room_id.clone(),
                player: Color::White,
            }),
        )
        .await
        .unwrap();
        assert!(join.0.success);

        let Json(game) = game_state(
            State(state),
            Json(RoomIdRequest {
                room_id: created.room_id,
            }),
        )
        .await
        .unwrap();
        assert_eq!(game.turn, Some(Color::White));
        assert_eq!(game.winner, None);
    }

    #[tokio::test]
    async fn join_unknown_room_is_not_found() {
        let state = test_state();
        let err = join_room(
            State(state),
            Json(JoinRoomRequest {
                room_id: "missing1".to_string(),
                player: Color::Black,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::RoomNotFound);
    }

    #[tokio::test]
    async fn double_join_is_rejected() {
        let state = test_state();
        let Json(created) = create_room(State(state.clone())).await;
        for expected in [Ok(()), Err(ApiError::SeatTaken)] {
            let result = join_room(
                State(state.clone()),
                Json(JoinRoomRequest {
                    room_id: created.room_id.clone(),
                    player: Color::Black,
                }),
            )
            .await
            .map(|_| ());
            assert_eq!(result, expected);
        }
    }
}
