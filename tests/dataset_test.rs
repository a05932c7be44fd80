//! Integration tests for the authored datasets and the heading table, as a
//! chart/i18n consumer would see them after serialization.

use replay_core::dataset::{GameDatasets, CURVE_LEN};
use replay_core::game_data::GameRecord;
use replay_core::i18n::{self, Lang};

#[test]
fn datasets_serialize_with_every_chart_series() {
    let datasets = GameDatasets::fischer_spassky_1972_g6();
    let value = serde_json::to_value(&datasets).unwrap();

    for key in [
        "evaluation",
        "material_balance",
        "foundation_activity",
        "groove_activity",
        "lead_events",
        "harmonic_tension",
        "timeline_stability",
        "event_distribution",
        "statistics",
    ] {
        assert!(value.get(key).is_some(), "missing dataset series: {key}");
    }

    let evaluation = value["evaluation"].as_array().unwrap();
    assert_eq!(evaluation.len(), CURVE_LEN);
    // Resignation sentinel at the last move.
    assert_eq!(evaluation[41].as_f64().unwrap(), 99.0);

    assert_eq!(value["statistics"]["total_moves"].as_u64().unwrap(), 41);
    assert_eq!(value["event_distribution"]["middlegame"].as_u64().unwrap(), 3);
}

#[test]
fn material_swing_matches_the_exchange_sacrifice() {
    let datasets = GameDatasets::fischer_spassky_1972_g6();
    // Equal material until the move 38 exchange sacrifice, then -3.
    assert!(datasets.material_balance[..38].iter().all(|v| *v == 0));
    assert!(datasets.material_balance[38..].iter().all(|v| *v == -3));
}

#[test]
fn critical_moves_fall_inside_the_game() {
    let datasets = GameDatasets::fischer_spassky_1972_g6();
    let total = datasets.statistics.total_moves;
    for mv in &datasets.statistics.critical_moves {
        assert!((1..=total).contains(mv));
    }
}

#[test]
fn game_record_round_trips_through_json() {
    let record = GameRecord::fischer_spassky_1972_g6();
    let json = serde_json::to_string(&record).unwrap();
    let back: GameRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.moves, record.moves);
    assert_eq!(back.metadata.white, "Bobby Fischer");
    assert_eq!(back.metadata.eco.as_deref(), Some("D59"));
}

#[test]
fn heading_table_translates_section_names() {
    let zh = i18n::table(Lang::Zh);
    assert_eq!(zh.get("Abstract"), Some(&"摘要"));
    assert_eq!(zh.get("Conclusion"), Some(&"結論"));

    let en = i18n::table(Lang::En);
    assert_eq!(en.get("Abstract"), Some(&"Abstract"));

    assert_eq!(i18n::translate(Lang::Zh, "Not A Heading"), "Not A Heading");
}
