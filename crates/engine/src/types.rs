use std::fmt;

/// The two sides. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds. A closed enum, so every dispatch over it is
/// checked for exhaustiveness at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }
}

/// Board coordinate. Row 0 is rank 8 (black's back rank), row 7 is rank 1;
/// col 0 is file a. White pawns move toward decreasing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// "e2"-style file-letter + rank-digit notation.
    pub fn notation(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }

    /// Map a position inside the board rect to a square. Row 0 (rank 8)
    /// is the top row on screen, so no flip is needed.
    pub fn from_coords(x: f32, y: f32, square_size: f32) -> Option<Self> {
        let col = (x / square_size).floor() as i32;
        let row = (y / square_size).floor() as i32;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// A single move. `piece_moved` and `captured` are filled in when the move
/// is generated, by reading the board at that moment; they are what undo
/// later restores.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn new(from: Square, to: Square, piece_moved: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece_moved,
            captured,
        }
    }

    /// Start then end square, e.g. "e2e4".
    pub fn notation(self) -> String {
        format!("{}{}", self.from.notation(), self.to.notation())
    }
}

/// Move identity is the coordinate pair alone. The piece fields are
/// bookkeeping for undo and never take part in matching a user-entered
/// move against the legal set.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

/// Why `try_make_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Not in the current legal move set.
    Illegal,
    /// The game already ended in checkmate or stalemate.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal => write!(f, "move is not legal in the current position"),
            MoveError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for MoveError {}
