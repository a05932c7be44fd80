//! Rules engine abstraction and the shakmaty-backed implementation.
//!
//! The playback layer only needs a narrow capability set: apply a SAN token,
//! undo the last applied move, and describe the current position. Keeping it
//! behind a trait lets tests drive playback with a scripted engine.

use serde::Serialize;
use shakmaty::{
    fen::Fen,
    san::{San, SanPlus},
    Chess, EnPassantMode, Position,
};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    White,
    Black,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// The capabilities the playback controller relies on. All calls are
/// synchronous and non-blocking.
pub trait RulesEngine {
    /// Attempt to apply one SAN token. On rejection the engine state must be
    /// unchanged; the returned string describes why the token was refused.
    fn apply_move(&mut self, token: &str) -> Result<(), String>;

    /// Undo the most recently applied move. Returns false only when there is
    /// nothing to undo.
    fn undo_last_move(&mut self) -> bool;

    /// Serializable encoding of the current position.
    fn position_fen(&self) -> String;

    fn side_to_move(&self) -> Side;

    /// SAN tokens for every legal move in the current position.
    fn legal_moves(&self) -> Vec<String>;

    /// Restore the initial position, discarding all applied moves.
    fn reset(&mut self);
}

/// Rules engine backed by shakmaty. Undo is implemented with a position
/// stack (one snapshot per applied ply), so undoing a previously applied
/// move cannot fail.
pub struct ShakmatyRules {
    pos: Chess,
    history: Vec<Chess>,
}

impl ShakmatyRules {
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
            history: Vec::new(),
        }
    }
}

impl Default for ShakmatyRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for ShakmatyRules {
    fn apply_move(&mut self, token: &str) -> Result<(), String> {
        // SanPlus tolerates check/mate suffixes ("Bb5+"), which PGN-derived
        // tokens carry.
        let san: SanPlus = token
            .trim()
            .parse()
            .map_err(|e| format!("invalid SAN '{token}': {e}"))?;

        let mv = san
            .san
            .to_move(&self.pos)
            .map_err(|e| format!("illegal move '{token}': {e}"))?;

        self.history.push(self.pos.clone());
        self.pos.play_unchecked(mv);
        Ok(())
    }

    fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.pos = prev;
                true
            }
            None => false,
        }
    }

    fn position_fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    fn side_to_move(&self) -> Side {
        match self.pos.turn() {
            shakmaty::Color::White => Side::White,
            shakmaty::Color::Black => Side::Black,
        }
    }

    fn legal_moves(&self) -> Vec<String> {
        self.pos
            .legal_moves()
            .iter()
            .map(|m| San::from_move(&self.pos, *m).to_string())
            .collect()
    }

    fn reset(&mut self) {
        self.pos = Chess::default();
        self.history.clear();
    }
}
