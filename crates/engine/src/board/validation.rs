use super::Board;
use crate::types::*;

impl Board {
    /// The authoritative legal move set for the side to move, and the one
    /// place the checkmate/stalemate flags are decided. Each pseudo-legal
    /// candidate is simulated and dropped if it leaves the mover's own
    /// king attacked. The returned list keeps the generator's order minus
    /// the removed entries, and is only valid until the next applied or
    /// reverted move, so recompute it after every state change.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut moves = self.pseudo_legal_moves();

        // walk from the end so removal never skips an element
        for i in (0..moves.len()).rev() {
            if self.leaves_king_in_check(moves[i]) {
                moves.remove(i);
            }
        }

        if moves.is_empty() {
            if self.in_check() {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        moves
    }

    /// Simulate one candidate: apply it, ask whether the mover's king is
    /// attacked, revert it. Single entry and single exit, so the board is
    /// restored on every path.
    fn leaves_king_in_check(&mut self, mv: Move) -> bool {
        self.make_move(mv);
        // make_move handed the turn to the opponent; look from the
        // mover's side while the move is on the board
        self.turn = self.turn.opposite();
        let exposed = self.in_check();
        self.turn = self.turn.opposite();
        self.undo_move();
        exposed
    }

    /// Is the side to move currently in check?
    pub fn in_check(&mut self) -> bool {
        self.square_under_attack(self.king_square(self.turn))
    }

    /// Brute-force attack probe: flip the turn, generate the opponent's
    /// full pseudo-legal set, and look for any move ending on the queried
    /// square. Costs one full generation per call, which is fine at
    /// human-game pace.
    pub fn square_under_attack(&mut self, square: Square) -> bool {
        self.turn = self.turn.opposite();
        let opponent_moves = self.pseudo_legal_moves();
        self.turn = self.turn.opposite();

        opponent_moves.iter().any(|mv| mv.to == square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(notation: &str) -> Square {
        let bytes = notation.as_bytes();
        Square::new(b'8' - bytes[1], bytes[0] - b'a')
    }

    #[test]
    fn detects_check_from_adjacent_rook() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        assert!(board.in_check());

        // d1, f1 step off the rook's lines; capturing on e2 is also legal
        let legal = board.legal_moves();
        assert_eq!(legal.len(), 3);
        assert!(legal.iter().any(|mv| mv.to == square("d1")));
        assert!(legal.iter().any(|mv| mv.to == square("f1")));
        let capture = legal.iter().find(|mv| mv.to == square("e2")).unwrap();
        assert_eq!(capture.captured, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(!board.checkmate);
        assert!(!board.stalemate);
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // knight on e2 shields the white king from the rook on e7
        let mut board = Board::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let legal = board.legal_moves();
        assert!(legal.iter().all(|mv| mv.from != square("e2")));
        // the king itself still has somewhere to go
        assert!(legal.iter().any(|mv| mv.from == square("e1")));
    }

    #[test]
    fn kings_never_move_adjacent() {
        let mut board = Board::from_fen("8/8/4k3/8/4K3/8/8/8 w - - 0 1").unwrap();
        let legal = board.legal_moves();
        // d5, e5, f5 are covered by the black king
        assert_eq!(legal.len(), 5);
        for target in ["d5", "e5", "f5"] {
            assert!(!legal.iter().any(|mv| mv.to == square(target)));
        }
    }

    #[test]
    fn back_rank_mate_sets_checkmate() {
        let mut board = Board::from_fen("3rkr2/3p1p2/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
        assert!(board.in_check());

        let legal = board.legal_moves();
        assert!(legal.is_empty());
        assert!(board.checkmate);
        assert!(!board.stalemate);
    }

    #[test]
    fn cornered_king_sets_stalemate() {
        let mut board = Board::from_fen("k7/2Q5/8/8/8/8/8/7K b - - 0 1").unwrap();
        assert!(!board.in_check());

        let legal = board.legal_moves();
        assert!(legal.is_empty());
        assert!(board.stalemate);
        assert!(!board.checkmate);
    }

    #[test]
    fn undo_leaves_a_mated_game_playable_again() {
        // white rook delivers the back-rank mate, then takes it back
        let mut board = Board::from_fen("3rkr2/3p1p2/8/8/8/8/8/2R3K1 w - - 0 1").unwrap();
        let mate = board
            .legal_moves()
            .into_iter()
            .find(|mv| mv.from == square("c1") && mv.to == square("e1"))
            .unwrap();

        board.make_move(mate);
        assert!(board.legal_moves().is_empty());
        assert!(board.checkmate);

        board.undo_move();
        assert!(!board.checkmate);
        assert!(!board.legal_moves().is_empty());
    }

    #[test]
    fn board_unchanged_by_legal_move_computation() {
        let mut board =
            Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4")
                .unwrap();
        let before = format!("{:?}", board);
        board.legal_moves();
        let after = format!("{:?}", board);
        assert_eq!(before, after);
    }
}
