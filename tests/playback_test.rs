//! Integration tests: replay the embedded Fischer vs Spassky record through
//! the real shakmaty-backed rules engine and check the playback properties
//! end to end.

use replay_core::board::NullBoard;
use replay_core::game_data::{GameRecord, ARCHIVAL_PGN};
use replay_core::pgn;
use replay_core::rules::START_FEN;
use replay_core::{
    PlaybackController, PlaybackPhase, ReplayError, ShakmatyRules, Side, StepOutcome,
};

fn corrected_controller() -> PlaybackController<ShakmatyRules, NullBoard> {
    let record = GameRecord::fischer_spassky_1972_g6();
    PlaybackController::new(record.moves, ShakmatyRules::new(), NullBoard)
        .with_result(record.metadata.result)
}

#[test]
fn corrected_sequence_replays_to_the_end() {
    let mut c = corrected_controller();
    assert_eq!(c.sequence_len(), 81);

    let applied = c.jump_to_end().expect("corrected sequence must be legal");
    assert_eq!(applied, 81);
    assert_eq!(c.cursor(), 81);
    assert_eq!(c.phase(), PlaybackPhase::AtEnd);
    assert!(!c.autoplay_active());
    assert_eq!(c.status_text(), "Game ended (1-0)");

    // Forward at the end is a quiet no-op.
    assert_eq!(c.step_forward().unwrap(), StepOutcome::EndOfSequence);
    assert_eq!(c.cursor(), 81);
}

#[test]
fn full_prefix_round_trip_restores_the_start_position() {
    let mut c = corrected_controller();
    let n = c.sequence_len();

    for _ in 0..n {
        assert!(c.step_forward().unwrap().advanced());
    }
    for _ in 0..n {
        assert!(c.step_backward());
    }

    assert_eq!(c.cursor(), 0);
    assert_eq!(c.position_fen(), START_FEN);
    assert_eq!(c.phase(), PlaybackPhase::AtStart);
}

#[test]
fn single_step_round_trip_from_start() {
    let mut c = corrected_controller();
    let before = c.position_fen();

    assert!(c.step_forward().unwrap().advanced());
    assert!(c.step_backward());

    assert_eq!(c.cursor(), 0);
    assert_eq!(c.position_fen(), before);
}

#[test]
fn backward_at_start_is_a_no_op() {
    let mut c = corrected_controller();
    assert!(!c.step_backward());
    assert_eq!(c.cursor(), 0);
    assert_eq!(c.status_text(), "Start position");
}

#[test]
fn status_text_tracks_move_number_and_side() {
    let mut c = corrected_controller();

    c.step_forward().unwrap();
    assert_eq!(c.status_text(), "1. c4 (White)");

    c.step_forward().unwrap();
    assert_eq!(c.status_text(), "1. e6 (Black)");

    c.step_forward().unwrap();
    assert_eq!(c.status_text(), "2. Nf3 (White)");
}

#[test]
fn autoplay_ticks_drive_the_game_and_stop_at_the_end() {
    let mut c = corrected_controller();
    c.start_autoplay();

    let mut ticks = 0;
    while c.tick() {
        ticks += 1;
    }

    assert_eq!(ticks, 81);
    assert_eq!(c.cursor(), 81);
    assert!(!c.autoplay_active());
}

#[test]
fn toggling_autoplay_twice_leaves_it_off() {
    let mut c = corrected_controller();
    assert!(c.toggle_autoplay());
    assert!(!c.toggle_autoplay());
    assert!(!c.autoplay_active());
    assert_eq!(c.cursor(), 0);
}

#[test]
fn archival_pgn_faults_on_the_duplicated_nd7() {
    // The as-recorded PGN repeats "Nd7" at Black's 17th move; replaying it
    // must halt there with full diagnostics.
    let moves = pgn::extract_moves(ARCHIVAL_PGN);
    assert_eq!(moves.len(), 81);

    let mut c = PlaybackController::new(moves, ShakmatyRules::new(), NullBoard);
    let err = c.jump_to_end().unwrap_err();

    match &err {
        ReplayError::MoveRejected {
            token,
            ply,
            move_number,
            side,
            position_fen,
            legal_moves,
            ..
        } => {
            assert_eq!(token, "Nd7");
            assert_eq!(*ply, 34);
            assert_eq!(*move_number, 17);
            assert_eq!(*side, Side::Black);
            assert!(position_fen.contains(" b "));
            assert!(!legal_moves.is_empty());
            // The legal-move set cannot contain the rejected token.
            assert!(!legal_moves.iter().any(|m| m == "Nd7"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Cursor stays before the faulted token; the fault is latched.
    assert_eq!(c.cursor(), 33);
    assert_eq!(c.phase(), PlaybackPhase::Faulted);
    assert_eq!(c.step_forward().unwrap(), StepOutcome::Refused);

    // The diagnostic report carries the position and the move set.
    let report = err.diagnostic_report();
    assert!(report.contains("Nd7"));
    assert!(report.contains("move 17"));
    assert!(report.contains("Legal moves:"));

    // Reset recovers.
    c.reset();
    assert_eq!(c.cursor(), 0);
    assert_eq!(c.phase(), PlaybackPhase::AtStart);
    assert_eq!(c.position_fen(), START_FEN);
}

#[test]
fn corrected_and_archival_sequences_agree_until_the_garbled_line() {
    let archival = pgn::extract_moves(ARCHIVAL_PGN);
    let corrected = GameRecord::fischer_spassky_1972_g6().moves;

    // Identical through 13...Rc8; the archival record then garbles the
    // 14-17 line, duplicating "Nd7" at Black's 14th and 17th moves.
    assert_eq!(archival[..26], corrected[..26]);
    assert_eq!(archival[27], "Nd7");
    assert_eq!(archival[33], "Nd7");
    assert_eq!(corrected[27], "a6");
    assert_eq!(corrected[33], "Nd7");
}
