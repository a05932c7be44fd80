//! Authored analysis datasets for the study. These are static tables keyed
//! by move number (index 0 = start position, 41 = resignation); they are not
//! derived from playback state and are read-only at runtime.

use serde::Serialize;

/// Number of entries in every per-move curve: moves 0..=41.
pub const CURVE_LEN: usize = 42;

/// Position evaluation in pawns, positive favors White. 99.0 is the
/// resignation sentinel.
pub const EVALUATION_DATA: [f64; CURVE_LEN] = [
    0.0, 0.2, 0.3, 0.3, 0.3, 0.4, 0.4, 0.5, 0.5, 0.5, //
    0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.5, 1.6, //
    1.7, 1.9, 2.0, 2.1, 2.2, 2.5, 2.6, 2.8, 3.0, 3.2, //
    3.5, 3.8, 4.0, 4.2, 4.3, 4.5, 4.8, 5.2, 6.5, 8.0, //
    10.0, 99.0,
];

/// Material balance in pawn units, positive favors White. The -3 from move
/// 38 on reflects the exchange sacrifice.
pub const MATERIAL_BALANCE: [i32; CURVE_LEN] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, -3, -3, //
    -3, -3,
];

/// Foundation layer (king safety / long-term stability), 0-1 normalized.
pub const FOUNDATION_FISCHER: [f64; CURVE_LEN] = [
    0.5, 0.5, 0.5, 0.5, 0.6, 0.7, 0.7, 0.7, 0.7, 0.7, //
    0.8, 0.8, 0.8, 0.8, 0.8, 0.9, 0.9, 0.9, 0.95, 0.95, //
    0.95, 0.95, 0.95, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, //
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, //
    1.0, 1.0,
];

pub const FOUNDATION_SPASSKY: [f64; CURVE_LEN] = [
    0.8, 0.8, 0.8, 0.8, 0.8, 0.7, 0.7, 0.7, 0.7, 0.7, //
    0.7, 0.7, 0.6, 0.6, 0.6, 0.5, 0.5, 0.5, 0.4, 0.4, //
    0.4, 0.3, 0.3, 0.3, 0.3, 0.3, 0.2, 0.2, 0.2, 0.2, //
    0.2, 0.2, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.05, 0.05, //
    0.05, 0.0,
];

/// Groove layer (piece activity / position control), 0-1 normalized.
pub const GROOVE_FISCHER: [f64; CURVE_LEN] = [
    0.3, 0.4, 0.4, 0.5, 0.5, 0.5, 0.5, 0.6, 0.6, 0.6, //
    0.7, 0.7, 0.8, 0.8, 0.8, 0.85, 0.85, 0.9, 0.95, 0.95, //
    0.95, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, //
    0.95, 0.95, 0.9, 0.9, 0.9, 0.9, 0.85, 0.85, 0.9, 0.9, //
    0.9, 0.8,
];

pub const GROOVE_SPASSKY: [f64; CURVE_LEN] = [
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, //
    0.5, 0.5, 0.5, 0.5, 0.5, 0.4, 0.4, 0.4, 0.4, 0.3, //
    0.3, 0.3, 0.3, 0.3, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, //
    0.2, 0.15, 0.15, 0.15, 0.15, 0.1, 0.1, 0.1, 0.05, 0.05, //
    0.05, 0.0,
];

/// Lead layer: discrete tactical events (captures, checks, sacrifices).
pub const LEAD_EVENTS: [u8; CURVE_LEN] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, //
    1, 0, 0, 0, 1, 0, 0, 0, 1, 1, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, 0, 0, 1, 1, 0, //
    0, 1,
];

/// Harmonic tension index, 0-1 (1 = maximum dissonance).
pub const HARMONIC_TENSION: [f64; CURVE_LEN] = [
    0.4, 0.4, 0.45, 0.45, 0.5, 0.5, 0.55, 0.55, 0.6, 0.6, //
    0.6, 0.65, 0.65, 0.7, 0.7, 0.75, 0.75, 0.8, 0.82, 0.82, //
    0.8, 0.8, 0.8, 0.8, 0.82, 0.8, 0.75, 0.75, 0.7, 0.7, //
    0.65, 0.6, 0.55, 0.5, 0.5, 0.45, 0.4, 0.35, 0.3, 0.25, //
    0.2, 0.15,
];

/// Timeline layer: rhythmic stability, 0-1 (high = stable tempo).
pub const TIMELINE_STABILITY: [f64; CURVE_LEN] = [
    0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, //
    0.75, 0.75, 0.75, 0.75, 0.75, 0.7, 0.7, 0.7, 0.7, 0.7, //
    0.7, 0.7, 0.7, 0.7, 0.7, 0.75, 0.75, 0.75, 0.75, 0.75, //
    0.8, 0.8, 0.8, 0.8, 0.8, 0.85, 0.85, 0.85, 0.9, 0.9, //
    0.95, 1.0,
];

#[derive(Debug, Clone, Serialize)]
pub struct SideSeries {
    pub fischer: Vec<f64>,
    pub spassky: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventDistribution {
    /// Moves 1-10.
    pub opening: u32,
    /// Moves 11-25.
    pub middlegame: u32,
    /// Moves 26-41.
    pub endgame: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhaseRange {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GamePhases {
    pub opening: PhaseRange,
    pub middlegame: PhaseRange,
    pub endgame: PhaseRange,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventCount {
    pub captures: u32,
    pub checks: u32,
    pub castling: u32,
    pub promotion: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Correlation {
    /// Correlation between Spassky Foundation and Fischer Groove, moves 15-35.
    pub foundation_groove: f64,
    pub p_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_moves: u32,
    pub game_phases: GamePhases,
    pub critical_moves: Vec<u32>,
    pub event_count: EventCount,
    pub correlation: Correlation,
}

/// The full authored dataset bundle consumed by the chart widgets.
#[derive(Debug, Clone, Serialize)]
pub struct GameDatasets {
    pub evaluation: Vec<f64>,
    pub material_balance: Vec<i32>,
    pub foundation_activity: SideSeries,
    pub groove_activity: SideSeries,
    pub lead_events: Vec<u8>,
    pub harmonic_tension: Vec<f64>,
    pub timeline_stability: Vec<f64>,
    pub event_distribution: EventDistribution,
    pub statistics: Statistics,
}

impl GameDatasets {
    pub fn fischer_spassky_1972_g6() -> Self {
        GameDatasets {
            evaluation: EVALUATION_DATA.to_vec(),
            material_balance: MATERIAL_BALANCE.to_vec(),
            foundation_activity: SideSeries {
                fischer: FOUNDATION_FISCHER.to_vec(),
                spassky: FOUNDATION_SPASSKY.to_vec(),
            },
            groove_activity: SideSeries {
                fischer: GROOVE_FISCHER.to_vec(),
                spassky: GROOVE_SPASSKY.to_vec(),
            },
            lead_events: LEAD_EVENTS.to_vec(),
            harmonic_tension: HARMONIC_TENSION.to_vec(),
            timeline_stability: TIMELINE_STABILITY.to_vec(),
            event_distribution: EventDistribution {
                opening: 2,
                middlegame: 3,
                endgame: 4,
            },
            statistics: Statistics {
                total_moves: 41,
                game_phases: GamePhases {
                    opening: PhaseRange { start: 1, end: 10 },
                    middlegame: PhaseRange { start: 11, end: 25 },
                    endgame: PhaseRange { start: 26, end: 41 },
                },
                critical_moves: vec![1, 18, 25, 31, 38],
                event_count: EventCount {
                    captures: 6,
                    checks: 2,
                    castling: 2,
                    promotion: 0,
                },
                correlation: Correlation {
                    foundation_groove: -0.78,
                    p_value: 0.003,
                },
            },
        }
    }
}
