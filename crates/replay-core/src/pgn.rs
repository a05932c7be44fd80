//! PGN parsing utilities — lightweight regex-based parser.

use regex::Regex;

use crate::error::ReplayError;
use crate::game_data::{GameMetadata, GameRecord};

/// Parse a PGN string into a GameRecord. The move list is taken verbatim
/// from the PGN text; no legality checking happens here, so a recording
/// error in the source survives into the extracted sequence.
pub fn parse_pgn(pgn: &str) -> Result<GameRecord, ReplayError> {
    let moves = extract_moves(pgn);
    if moves.is_empty() {
        return Err(ReplayError::EmptyPgn);
    }

    Ok(GameRecord {
        metadata: parse_metadata(pgn),
        moves,
        pgn: pgn.to_string(),
    })
}

/// Extract game metadata from PGN headers.
pub fn parse_metadata(pgn: &str) -> GameMetadata {
    let header_re = Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).expect("valid header regex");

    let mut event = "Unknown".to_string();
    let mut site = "Unknown".to_string();
    let mut white = "Unknown".to_string();
    let mut black = "Unknown".to_string();
    let mut result = "*".to_string();
    let mut date = None;
    let mut round = None;
    let mut eco = None;

    for cap in header_re.captures_iter(pgn) {
        let key = &cap[1];
        let value = cap[2].to_string();
        match key {
            "Event" => event = value,
            "Site" => site = value,
            "White" => white = value,
            "Black" => black = value,
            "Result" => result = value,
            "Date" => date = Some(value),
            "Round" => round = Some(value),
            "ECO" => eco = Some(value),
            _ => {}
        }
    }

    GameMetadata {
        event,
        site,
        date,
        round,
        white,
        black,
        result,
        eco,
    }
}

/// Extract SAN moves from PGN text (after removing headers, comments, variations).
pub fn extract_moves(pgn: &str) -> Vec<String> {
    // Remove headers
    let header_re = Regex::new(r"\[[^\]]*\]").unwrap();
    let no_headers = header_re.replace_all(pgn, "");

    // Remove comments
    let comment_re = Regex::new(r"\{[^}]*\}").unwrap();
    let no_comments = comment_re.replace_all(&no_headers, "");

    // Remove variations
    let variation_re = Regex::new(r"\([^)]*\)").unwrap();
    let no_variations = variation_re.replace_all(&no_comments, "");

    // Extract moves
    let move_re =
        Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|O-O-O|O-O").unwrap();

    move_re
        .find_iter(&no_variations)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_data::ARCHIVAL_PGN;

    #[test]
    fn test_parse_pgn_basic() {
        let pgn = r#"[Event "Test Match"]
[White "Player1"]
[Black "Player2"]
[Result "1-0"]
[Date "2025.01.15"]

1. e4 e5 2. Nf3 Nc6 1-0"#;

        let game = parse_pgn(pgn).unwrap();
        assert_eq!(game.metadata.event, "Test Match");
        assert_eq!(game.metadata.white, "Player1");
        assert_eq!(game.metadata.black, "Player2");
        assert_eq!(game.metadata.result, "1-0");
        assert_eq!(game.moves.len(), 4);
        assert_eq!(game.moves[0], "e4");
    }

    #[test]
    fn test_parse_pgn_without_moves() {
        let err = parse_pgn(r#"[White "Nobody"]"#).unwrap_err();
        assert!(matches!(err, ReplayError::EmptyPgn));
    }

    #[test]
    fn test_extract_moves_strips_annotations() {
        let pgn = "1. e4 {best by test} e5 (1... c5 2. Nf3) 2. Nf3 Nc6";
        assert_eq!(extract_moves(pgn), vec!["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_archival_pgn_carries_the_recording_error() {
        let game = parse_pgn(ARCHIVAL_PGN).unwrap();
        assert_eq!(game.moves.len(), 81);
        // Black's 17th move (ply 34) duplicates "Nd7" from move 14.
        assert_eq!(game.moves[27], "Nd7");
        assert_eq!(game.moves[33], "Nd7");
        assert_eq!(game.metadata.eco.as_deref(), Some("D59"));
    }
}
