//! API handlers for the draughts room server.

pub mod moves;
pub mod rooms;
