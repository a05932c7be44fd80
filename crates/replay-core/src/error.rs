//! Replay error types

use thiserror::Error;

use crate::rules::Side;

#[derive(Error, Debug, Clone)]
pub enum ReplayError {
    /// The rules engine refused the next token of the fixed sequence. This is
    /// a content error in the authored record, never transient: the same
    /// token replayed at the same position cannot succeed, so it is reported
    /// once with full context and forward progress halts.
    #[error("invalid move \"{token}\" at ply {ply} (move {move_number}, {side} to move): {reason}")]
    MoveRejected {
        token: String,
        /// 1-based ply index within the sequence.
        ply: usize,
        /// 1-based move number, ceil(ply / 2).
        move_number: u32,
        side: Side,
        position_fen: String,
        legal_moves: Vec<String>,
        reason: String,
    },

    #[error("PGN contains no moves")]
    EmptyPgn,
}

impl ReplayError {
    /// Multi-line diagnostic with the position encoding and the full
    /// legal-move set, for surfacing a playback fault to the user.
    pub fn diagnostic_report(&self) -> String {
        match self {
            ReplayError::MoveRejected {
                token,
                ply,
                move_number,
                side,
                position_fen,
                legal_moves,
                reason,
            } => format!(
                "====== INVALID MOVE DETECTED ======\n\
                 Move: \"{token}\" at ply {ply} (move {move_number})\n\
                 Turn: {side}\n\
                 Reason: {reason}\n\
                 Current FEN: {position_fen}\n\
                 Legal moves: {}\n\
                 ===================================",
                legal_moves.join(", ")
            ),
            other => other.to_string(),
        }
    }
}
