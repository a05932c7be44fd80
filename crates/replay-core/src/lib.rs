//! Core library for the Harmonic Gambit replay study: the Fischer vs Spassky
//! 1972 Game 6 record, sequential move playback over a rules engine, and the
//! authored analysis datasets that accompany the paper.

pub mod board;
pub mod dataset;
pub mod error;
pub mod game_data;
pub mod i18n;
pub mod pgn;
pub mod playback;
pub mod rules;

pub use error::ReplayError;
pub use playback::{PlaybackController, PlaybackPhase, StepOutcome};
pub use rules::{RulesEngine, ShakmatyRules, Side};
