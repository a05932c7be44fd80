//! Sequential move playback over a fixed SAN sequence.
//!
//! The controller owns the move cursor, the autoplay flag, and the fault
//! latch; legality and board state belong to the [`RulesEngine`], rendering
//! to the [`BoardView`]. Invariant: the engine state is always the result of
//! applying exactly the first `cursor` tokens of the sequence, in order, so
//! forward/backward navigation is deterministic and reversible.

use crate::board::BoardView;
use crate::error::ReplayError;
use crate::rules::{RulesEngine, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    AtStart,
    InProgress,
    AtEnd,
    /// A token was rejected. Terminal for the current sequence until
    /// `reset()` or `step_backward()`.
    Faulted,
}

/// Outcome of a forward step that did not fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// Cursor already at the end of the sequence; nothing changed.
    EndOfSequence,
    /// A previous step faulted; the sequence is not consumed further.
    Refused,
}

impl StepOutcome {
    pub fn advanced(self) -> bool {
        matches!(self, StepOutcome::Advanced)
    }
}

pub struct PlaybackController<R, V> {
    sequence: Vec<String>,
    cursor: usize,
    autoplay: bool,
    fault: Option<ReplayError>,
    result: Option<String>,
    rules: R,
    board: V,
}

impl<R: RulesEngine, V: BoardView> PlaybackController<R, V> {
    /// Build a controller over a fixed sequence. The engine is expected to be
    /// at its initial position; the board view is synced to it immediately.
    pub fn new(sequence: Vec<String>, rules: R, mut board: V) -> Self {
        board.render_start();
        Self {
            sequence,
            cursor: 0,
            autoplay: false,
            fault: None,
            result: None,
            rules,
            board,
        }
    }

    /// Attach the game result ("1-0" etc.) shown in the terminal status line.
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay
    }

    /// The latched fault, if the last forward step rejected a token.
    pub fn fault(&self) -> Option<&ReplayError> {
        self.fault.as_ref()
    }

    pub fn position_fen(&self) -> String {
        self.rules.position_fen()
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.fault.is_some() {
            PlaybackPhase::Faulted
        } else if self.cursor == self.sequence.len() && !self.sequence.is_empty() {
            PlaybackPhase::AtEnd
        } else if self.cursor == 0 {
            PlaybackPhase::AtStart
        } else {
            PlaybackPhase::InProgress
        }
    }

    /// Apply the next token of the sequence. At end of sequence this is a
    /// quiet no-op that also stops autoplay. A rejected token is a fatal
    /// playback fault: autoplay stops, the fault is latched and logged with
    /// full diagnostics, and the cursor is left unchanged.
    pub fn step_forward(&mut self) -> Result<StepOutcome, ReplayError> {
        if self.fault.is_some() {
            self.stop_autoplay();
            return Ok(StepOutcome::Refused);
        }
        if self.cursor >= self.sequence.len() {
            self.stop_autoplay();
            return Ok(StepOutcome::EndOfSequence);
        }

        let token = self.sequence[self.cursor].clone();
        if let Err(reason) = self.rules.apply_move(&token) {
            self.stop_autoplay();
            let err = ReplayError::MoveRejected {
                ply: self.cursor + 1,
                move_number: (self.cursor / 2 + 1) as u32,
                side: self.rules.side_to_move(),
                position_fen: self.rules.position_fen(),
                legal_moves: self.rules.legal_moves(),
                token,
                reason,
            };
            tracing::error!("{}", err.diagnostic_report());
            self.fault = Some(err.clone());
            return Err(err);
        }

        self.cursor += 1;
        self.board.render_position(&self.rules.position_fen());
        Ok(StepOutcome::Advanced)
    }

    /// Undo the most recently applied move. No-op returning false at cursor
    /// 0; otherwise always succeeds and clears any latched fault.
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        if !self.rules.undo_last_move() {
            // Unreachable while the cursor invariant holds.
            return false;
        }
        self.cursor -= 1;
        self.fault = None;
        self.board.render_position(&self.rules.position_fen());
        true
    }

    /// Restore the initial position: cursor 0, autoplay off, fault cleared.
    pub fn reset(&mut self) {
        self.rules.reset();
        self.cursor = 0;
        self.fault = None;
        self.stop_autoplay();
        self.board.render_start();
    }

    /// Step forward until end of sequence or fault, synchronously. Autoplay
    /// is off afterwards. Returns the number of plies applied.
    pub fn jump_to_end(&mut self) -> Result<usize, ReplayError> {
        let mut applied = 0;
        loop {
            match self.step_forward() {
                Ok(StepOutcome::Advanced) => applied += 1,
                Ok(_) => break,
                Err(e) => {
                    self.stop_autoplay();
                    return Err(e);
                }
            }
        }
        self.stop_autoplay();
        Ok(applied)
    }

    /// Flip the autoplay state; returns the new state.
    pub fn toggle_autoplay(&mut self) -> bool {
        if self.autoplay {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
        self.autoplay
    }

    pub fn start_autoplay(&mut self) {
        self.autoplay = true;
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = false;
    }

    /// Timer-driven entry point: one forward step per tick while autoplay is
    /// on. Returns true if a move was applied; on end of sequence or fault
    /// autoplay is off and the tick returns false.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay {
            return false;
        }
        match self.step_forward() {
            Ok(outcome) => outcome.advanced(),
            Err(_) => false, // already latched and logged
        }
    }

    /// Human-readable playback status, derived from the cursor.
    pub fn status_text(&self) -> String {
        if self.cursor == 0 {
            "Start position".to_string()
        } else if self.cursor >= self.sequence.len() {
            match &self.result {
                Some(r) => format!("Game ended ({r})"),
                None => "Game ended".to_string(),
            }
        } else {
            let move_number = (self.cursor + 1) / 2;
            let side = if self.cursor % 2 == 1 {
                Side::White
            } else {
                Side::Black
            };
            let token = &self.sequence[self.cursor - 1];
            format!("{move_number}. {token} ({side})")
        }
    }
}
