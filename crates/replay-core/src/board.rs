//! Board view abstraction: the playback controller pushes a position
//! encoding to whatever renders the board.

use crate::rules::START_FEN;

pub trait BoardView {
    fn render_position(&mut self, fen: &str);

    /// Render the initial-position sentinel (used by reset).
    fn render_start(&mut self) {
        self.render_position(START_FEN);
    }
}

/// Board view that renders nothing. Used by tests and by the server, which
/// only needs the position encodings.
pub struct NullBoard;

impl BoardView for NullBoard {
    fn render_position(&mut self, _fen: &str) {}
}

/// Terminal board view: prints an 8x8 diagram for each position.
pub struct AsciiBoard;

impl BoardView for AsciiBoard {
    fn render_position(&mut self, fen: &str) {
        println!("{}", diagram(fen));
    }
}

/// Expand the board field of a FEN into a text diagram, rank 8 at the top.
/// Unknown characters pass through unchanged.
pub fn diagram(fen: &str) -> String {
    let board_field = fen.split_whitespace().next().unwrap_or("");
    let mut out = String::new();

    for (i, rank) in board_field.split('/').take(8).enumerate() {
        out.push_str(&format!("{} ", 8 - i));
        for c in rank.chars() {
            if let Some(n) = c.to_digit(10) {
                for _ in 0..n {
                    out.push_str(" .");
                }
            } else {
                out.push(' ');
                out.push(c);
            }
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h");
    out
}
