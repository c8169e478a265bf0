//! User-facing API errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The user-facing failure modes of the room coordinator.
///
/// Each variant maps to a distinct client error response; an invalid
/// move is reported as such, never coerced into a different move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("room not found")]
    RoomNotFound,

    #[error("seat already taken")]
    SeatTaken,

    #[error("room is full")]
    RoomFull,

    #[error("game already finished")]
    GameFinished,

    #[error("not your turn")]
    NotYourTurn,

    #[error("invalid move")]
    InvalidMove,
}

impl ApiError {
    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RoomNotFound => StatusCode::NOT_FOUND,
            ApiError::SeatTaken
            | ApiError::RoomFull
            | ApiError::GameFinished
            | ApiError::NotYourTurn
            | ApiError::InvalidMove => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
