use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/game
pub async fn get_game(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<JsonValue>, AppError> {
    Ok(Json(json!({
        "metadata": &state.record.metadata,
        "moves": &state.record.moves,
        "pgn": &state.record.pgn,
        "total_plies": state.record.moves.len(),
    })))
}

/// GET /api/game/positions
pub async fn get_positions(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<JsonValue>, AppError> {
    Ok(Json(json!({
        "positions": &state.positions,
        "count": state.positions.len(),
    })))
}

/// GET /api/game/positions/{ply}
///
/// Ply 0 is the start position; ply N the position after the last move.
pub async fn get_position_at(
    Extension(state): Extension<Arc<AppState>>,
    Path(ply): Path<usize>,
) -> Result<Json<JsonValue>, AppError> {
    let fen = state
        .positions
        .get(ply)
        .ok_or_else(|| AppError::NotFound(format!("No position at ply {ply}")))?;

    let last_move = if ply > 0 {
        Some(state.record.moves[ply - 1].as_str())
    } else {
        None
    };

    Ok(Json(json!({
        "ply": ply,
        "fen": fen,
        "last_move": last_move,
        "move_number": (ply + 1) / 2,
    })))
}
