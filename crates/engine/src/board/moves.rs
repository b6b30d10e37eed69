use super::Board;
use crate::types::*;

/// Knight jump offsets as (row, col) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The standard eight adjacent king offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Every candidate move for the side to move, before any check
    /// filtering. Scans the grid row-major and dispatches on the piece
    /// kind, so the surviving order is stable across calls.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col);
                let piece = match self.get_piece(square) {
                    Some(piece) if piece.color == self.turn => piece,
                    _ => continue,
                };

                match piece.kind {
                    PieceKind::Pawn => self.pawn_moves(square, piece, &mut moves),
                    PieceKind::Rook => {
                        self.sliding_moves(square, piece, &ROOK_DIRECTIONS, &mut moves)
                    }
                    PieceKind::Knight => {
                        self.offset_moves(square, piece, &KNIGHT_OFFSETS, &mut moves)
                    }
                    PieceKind::Bishop => {
                        self.sliding_moves(square, piece, &BISHOP_DIRECTIONS, &mut moves)
                    }
                    PieceKind::Queen => self.queen_moves(square, piece, &mut moves),
                    PieceKind::King => self.offset_moves(square, piece, &KING_OFFSETS, &mut moves),
                }
            }
        }

        moves
    }

    /// Pawn pushes and diagonal captures. No en passant and no promotion:
    /// a pawn that reaches the back rank stays a pawn.
    fn pawn_moves(&self, square: Square, piece: Piece, moves: &mut Vec<Move>) {
        // white pawns advance toward row 0, black toward row 7
        let (dir, start_row) = match piece.color {
            Color::White => (-1i8, 6),
            Color::Black => (1i8, 1),
        };
        let row = square.row as i8;
        let col = square.col as i8;

        let one_ahead = row + dir;
        if (0..8).contains(&one_ahead) {
            let forward = Square::new(one_ahead as u8, square.col);
            if self.get_piece(forward).is_none() {
                moves.push(Move::new(square, forward, piece, None));

                // double push only from the starting rank, and only when
                // the square jumped over is empty too
                if square.row == start_row {
                    let two_ahead = Square::new((row + 2 * dir) as u8, square.col);
                    if self.get_piece(two_ahead).is_none() {
                        moves.push(Move::new(square, two_ahead, piece, None));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let (r, c) = (row + dir, col + dc);
            if !(0..8).contains(&r) || !(0..8).contains(&c) {
                continue;
            }
            let target = Square::new(r as u8, c as u8);
            if let Some(occupant) = self.get_piece(target) {
                if occupant.color != piece.color {
                    moves.push(Move::new(square, target, piece, Some(occupant)));
                }
            }
        }
    }

    /// Slide along each direction until blocked: stop before a friendly
    /// piece, include an enemy piece's square, never continue past either.
    fn sliding_moves(
        &self,
        square: Square,
        piece: Piece,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            for step in 1..8 {
                let r = square.row as i8 + dr * step;
                let c = square.col as i8 + dc * step;
                if !(0..8).contains(&r) || !(0..8).contains(&c) {
                    break;
                }

                let target = Square::new(r as u8, c as u8);
                match self.get_piece(target) {
                    None => moves.push(Move::new(square, target, piece, None)),
                    Some(occupant) => {
                        if occupant.color != piece.color {
                            moves.push(Move::new(square, target, piece, Some(occupant)));
                        }
                        break;
                    }
                }
            }
        }
    }

    /// Queen = rook directions plus bishop directions, by delegation.
    fn queen_moves(&self, square: Square, piece: Piece, moves: &mut Vec<Move>) {
        self.sliding_moves(square, piece, &ROOK_DIRECTIONS, moves);
        self.sliding_moves(square, piece, &BISHOP_DIRECTIONS, moves);
    }

    /// Fixed-offset movers (knight and king): every on-board offset
    /// landing on a non-friendly square is a candidate. No path blocking.
    fn offset_moves(
        &self,
        square: Square,
        piece: Piece,
        offsets: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in offsets {
            let r = square.row as i8 + dr;
            let c = square.col as i8 + dc;
            if !(0..8).contains(&r) || !(0..8).contains(&c) {
                continue;
            }

            let target = Square::new(r as u8, c as u8);
            match self.get_piece(target) {
                Some(occupant) if occupant.color == piece.color => {}
                occupant => moves.push(Move::new(square, target, piece, occupant)),
            }
        }
    }
}
