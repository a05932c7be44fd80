use replay_core::board::NullBoard;
use replay_core::dataset::GameDatasets;
use replay_core::game_data::GameRecord;
use replay_core::{PlaybackController, ReplayError, ShakmatyRules};

/// Immutable application state, built once at startup and shared read-only.
pub struct AppState {
    pub record: GameRecord,
    pub datasets: GameDatasets,
    /// Position FEN for every cursor value 0..=N of the corrected sequence.
    pub positions: Vec<String>,
}

impl AppState {
    pub fn build() -> Result<Self, ReplayError> {
        let record = GameRecord::fischer_spassky_1972_g6();

        let mut controller =
            PlaybackController::new(record.moves.clone(), ShakmatyRules::new(), NullBoard);

        let mut positions = vec![controller.position_fen()];
        while controller.step_forward()?.advanced() {
            positions.push(controller.position_fen());
        }

        Ok(Self {
            record,
            datasets: GameDatasets::fischer_spassky_1972_g6(),
            positions,
        })
    }
}
