use super::Board;
use crate::types::*;
use std::fmt::Write;

impl Board {
    /// ASCII dump of the grid, rank 8 at the top. Used by the perft
    /// harness and by failing-test diagnostics.
    pub fn ascii(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let _ = write!(out, "{} ", 8 - row);
            for col in 0..8 {
                match self.get_piece(Square::new(row, col)) {
                    Some(piece) => {
                        out.push(piece.fen_char());
                        out.push(' ');
                    }
                    None => out.push_str(". "),
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

/// Space-separated notation list of a move set, in generator order.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.notation())
        .collect::<Vec<_>>()
        .join(" ")
}
