use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub event: String,
    pub site: String,
    pub date: Option<String>,
    pub round: Option<String>,
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2"
    pub eco: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub metadata: GameMetadata,
    /// Corrected SAN sequence, one token per ply.
    pub moves: Vec<String>,
    /// Archival PGN as recorded, including the move 17 recording error.
    pub pgn: String,
}

/// Fischer vs Spassky, World Championship 1972, Game 6, as recorded. The
/// record garbled moves 14-17 (Black's "Nd7" appears at both move 14 and
/// move 17); replayed from the start, it breaks down at move 17, where the
/// duplicated "Nd7" has no legal interpretation.
pub const ARCHIVAL_PGN: &str = r#"[Event "World Chess Championship 1972"]
[Site "Reykjavik, Iceland"]
[Date "1972.07.23"]
[Round "6"]
[White "Bobby Fischer"]
[Black "Boris Spassky"]
[Result "1-0"]
[ECO "D59"]

1. c4 e6 2. Nf3 d5 3. d4 Nf6 4. Nc3 Be7 5. Bg5 O-O
6. e3 h6 7. Bh4 b6 8. cxd5 Nxd5 9. Bxe7 Qxe7
10. Nxd5 exd5 11. Rc1 Be6 12. Qa4 c5 13. Qa3 Rc8
14. Bb5+ Nd7 15. dxc5 bxc5 16. O-O Rcb8 17. Be2 Nd7
18. Nd4 Qf8 19. Nxe6 fxe6 20. e4 d4 21. f4 Qe7
22. e5 Rb6 23. Bc4 Kh8 24. Qh3 Nf8 25. b3 a5
26. f5 exf5 27. Rxf5 Nh7 28. Rcf1 Qd8 29. Qg3 Re7
30. h4 Rbb7 31. e6 Rbc7 32. Qe5 Qe8 33. a4 Qd8
34. R1f2 Qe8 35. R2f3 Qd8 36. Bd3 Qe8 37. Qe4 Nf6
38. Rxf6 gxf6 39. Rxf6 Kg8 40. Bc4 Kh8 41. Qf4 1-0"#;

/// The corrected 81-ply sequence, restored from the tournament record:
/// 14...a6 and 16...Ra7 in place of the garbled "Bb5+ Nd7 ... Rcb8" line,
/// so that 17...Nd7 is the knight's first (and only) visit to d7. This
/// sequence replays legally from the start position to 41. Qf4.
pub const CORRECTED_MOVES: [&str; 81] = [
    "c4", "e6", "Nf3", "d5", "d4", "Nf6", "Nc3", "Be7", "Bg5", "O-O",
    "e3", "h6", "Bh4", "b6", "cxd5", "Nxd5", "Bxe7", "Qxe7", "Nxd5", "exd5",
    "Rc1", "Be6", "Qa4", "c5", "Qa3", "Rc8", "Bb5", "a6", "dxc5", "bxc5",
    "O-O", "Ra7", "Be2", "Nd7", "Nd4", "Qf8", "Nxe6", "fxe6", "e4", "d4",
    "f4", "Qe7", "e5", "Rb8", "Bc4", "Kh8", "Qh3", "Nf8", "b3", "a5",
    "f5", "exf5", "Rxf5", "Nh7", "Rcf1", "Qd8", "Qg3", "Re7", "h4", "Rbb7",
    "e6", "Rbc7", "Qe5", "Qe8", "a4", "Qd8", "R1f2", "Qe8", "R2f3", "Qd8",
    "Bd3", "Qe8", "Qe4", "Nf6", "Rxf6", "gxf6", "Rxf6", "Kg8", "Bc4", "Kh8",
    "Qf4",
];

impl GameRecord {
    /// The single game this study replays, with the corrected move sequence
    /// and the archival PGN side by side.
    pub fn fischer_spassky_1972_g6() -> Self {
        GameRecord {
            metadata: GameMetadata {
                event: "World Chess Championship 1972".to_string(),
                site: "Reykjavik, Iceland".to_string(),
                date: Some("1972.07.23".to_string()),
                round: Some("6".to_string()),
                white: "Bobby Fischer".to_string(),
                black: "Boris Spassky".to_string(),
                result: "1-0".to_string(),
                eco: Some("D59".to_string()),
            },
            moves: CORRECTED_MOVES.iter().map(|s| s.to_string()).collect(),
            pgn: ARCHIVAL_PGN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_shape() {
        let record = GameRecord::fischer_spassky_1972_g6();
        assert_eq!(record.moves.len(), 81);
        assert_eq!(record.moves[0], "c4");
        assert_eq!(record.moves[80], "Qf4");
        assert_eq!(record.metadata.result, "1-0");
    }

    #[test]
    fn test_correction_restores_the_tournament_line() {
        // The archival record duplicates "Nd7" at moves 14 and 17; the
        // corrected line has 14...a6, leaving 17...Nd7 legal.
        assert!(ARCHIVAL_PGN.contains("14. Bb5+ Nd7"));
        assert!(ARCHIVAL_PGN.contains("17. Be2 Nd7"));
        assert_eq!(CORRECTED_MOVES[27], "a6");
        assert_eq!(CORRECTED_MOVES[33], "Nd7");
    }
}
