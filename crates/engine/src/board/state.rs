use super::Board;
use crate::types::*;

impl Board {
    /// Execute a move unconditionally: clear the start square, put the
    /// moved piece on the end square, log the move, flip the turn. No
    /// legality check happens here: this is also the simulation
    /// primitive the legality filter drives, so it stays cheap and trusts
    /// its caller to pass only generator-produced moves.
    pub fn make_move(&mut self, mv: Move) {
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mv.piece_moved));
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.to);
        }
        self.history.push(mv);
        self.turn = self.turn.opposite();
    }

    /// Undo the last move, restoring the start square to the moved piece
    /// and the end square to whatever was captured. Exact inverse of
    /// `make_move` for any generator-produced move. No-op on empty
    /// history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.set_piece(mv.from, Some(mv.piece_moved));
        self.set_piece(mv.to, mv.captured);
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.from);
        }
        self.turn = self.turn.opposite();
        // a position with a move to undo was not terminal
        self.checkmate = false;
        self.stalemate = false;
        Some(mv)
    }

    /// Validated, UI-facing mutator: the move must match an entry of the
    /// current legal set (matching compares coordinates only). The
    /// matched entry is the one applied, so the piece fields recorded at
    /// generation time flow into the history. On error the grid is left
    /// untouched.
    pub fn try_make_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        if self.checkmate || self.stalemate {
            return Err(MoveError::GameOver);
        }

        let legal = self.legal_moves();
        match legal.into_iter().find(|candidate| *candidate == mv) {
            Some(matched) => {
                self.make_move(matched);
                Ok(matched)
            }
            None => Err(MoveError::Illegal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(notation: &str) -> Square {
        let bytes = notation.as_bytes();
        Square::new(b'8' - bytes[1], bytes[0] - b'a')
    }

    /// Snapshot of everything a make/undo pair must restore.
    fn snapshot(board: &Board) -> (Vec<Option<Piece>>, Color, usize, Square, Square) {
        let mut cells = Vec::with_capacity(64);
        for row in 0..8 {
            for col in 0..8 {
                cells.push(board.get_piece(Square::new(row, col)));
            }
        }
        (
            cells,
            board.turn,
            board.history.len(),
            board.king_square(Color::White),
            board.king_square(Color::Black),
        )
    }

    fn count_kings(board: &Board, color: Color) -> usize {
        let mut count = 0;
        for row in 0..8 {
            for col in 0..8 {
                if board.get_piece(Square::new(row, col))
                    == Some(Piece::new(color, PieceKind::King))
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn make_then_undo_restores_everything() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            // mid-game position with captures available both ways
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4",
            "4k3/8/8/3q4/8/8/4P3/4K3 b - - 0 1",
        ];

        for fen in fens {
            let mut board = Board::from_fen(fen).unwrap();
            let before = snapshot(&board);

            for mv in board.legal_moves() {
                board.make_move(mv);
                board.undo_move();
                assert_eq!(snapshot(&board), before, "{} not reverted in {}", mv.notation(), fen);
            }
        }
    }

    #[test]
    fn make_move_flips_turn_and_logs() {
        let mut board = Board::new();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = Move::new(square("e2"), square("e4"), pawn, None);

        board.make_move(mv);
        assert_eq!(board.turn, Color::Black);
        assert_eq!(board.history.len(), 1);
        assert_eq!(board.get_piece(square("e2")), None);
        assert_eq!(board.get_piece(square("e4")), Some(pawn));
    }

    #[test]
    fn king_cache_follows_the_king() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let king = Piece::new(Color::White, PieceKind::King);
        let mv = Move::new(square("e1"), square("d2"), king, None);

        board.make_move(mv);
        assert_eq!(board.king_square(Color::White), square("d2"));
        assert_eq!(board.king_square(Color::Black), square("e8"));

        board.undo_move();
        assert_eq!(board.king_square(Color::White), square("e1"));
    }

    #[test]
    fn undo_with_empty_history_is_a_noop() {
        let mut board = Board::new();
        let before = snapshot(&board);
        assert_eq!(board.undo_move(), None);
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn undo_restores_captured_piece() {
        // white pawn e4 takes black pawn d5
        let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let capture = Move::new(
            square("e4"),
            square("d5"),
            Piece::new(Color::White, PieceKind::Pawn),
            Some(Piece::new(Color::Black, PieceKind::Pawn)),
        );

        board.make_move(capture);
        assert_eq!(
            board.get_piece(square("d5")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );

        board.undo_move();
        assert_eq!(
            board.get_piece(square("d5")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(
            board.get_piece(square("e4")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn try_make_move_applies_only_legal_moves() {
        let mut board = Board::new();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);

        // e2e5 is not a pawn move
        let before = snapshot(&board);
        let bogus = Move::new(square("e2"), square("e5"), pawn, None);
        assert_eq!(board.try_make_move(bogus), Err(MoveError::Illegal));
        assert_eq!(snapshot(&board), before);

        let push = Move::new(square("e2"), square("e4"), pawn, None);
        assert!(board.try_make_move(push).is_ok());
        assert_eq!(board.turn, Color::Black);
    }

    #[test]
    fn try_make_move_rejects_after_checkmate() {
        let mut board = Board::from_fen("3rkr2/3p1p2/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
        assert!(board.legal_moves().is_empty());
        assert!(board.checkmate);

        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let mv = Move::new(square("d7"), square("d6"), pawn, None);
        assert_eq!(board.try_make_move(mv), Err(MoveError::GameOver));
    }

    #[test]
    fn one_king_per_color_survives_play() {
        let mut board = Board::new();
        let line = ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "f3e5", "c6e5"];

        for notation in line {
            let from = square(&notation[..2]);
            let to = square(&notation[2..]);
            let matched = board
                .legal_moves()
                .into_iter()
                .find(|mv| mv.from == from && mv.to == to)
                .unwrap_or_else(|| panic!("{} not legal", notation));
            board.make_move(matched);

            assert_eq!(count_kings(&board, Color::White), 1);
            assert_eq!(count_kings(&board, Color::Black), 1);
        }
    }
}
