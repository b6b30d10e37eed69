use egui::{Color32, Rect, Sense, Vec2};
use engine::{Board, Color, GameLogger, Move, Piece, PieceKind, Square};

pub struct ChessApp {
    board: Board,
    /// Legal set for the current position. Only valid for the state it
    /// was computed from, so it is refreshed after every applied or
    /// reverted move.
    legal_moves: Vec<Move>,
    selected: Option<Square>,
    logger: GameLogger,
    log_saved: bool,
}

impl ChessApp {
    pub fn new() -> Self {
        let mut board = Board::new();
        let legal_moves = board.legal_moves();
        Self {
            board,
            legal_moves,
            selected: None,
            logger: GameLogger::new(),
            log_saved: false,
        }
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = self.board.legal_moves();

        if (self.board.checkmate || self.board.stalemate) && !self.log_saved {
            let reason = if self.board.checkmate {
                match self.board.turn {
                    Color::White => "checkmate, black wins",
                    Color::Black => "checkmate, white wins",
                }
            } else {
                "stalemate"
            };
            if let Err(err) = self.logger.save_to_file(reason) {
                eprintln!("failed to save game log: {}", err);
            }
            self.log_saved = true;
        }
    }

    fn new_game(&mut self) {
        self.board.reset();
        self.selected = None;
        self.logger = GameLogger::new();
        self.log_saved = false;
        self.refresh_legal_moves();
    }

    fn undo(&mut self) {
        if let Some(undone) = self.board.undo_move() {
            self.logger.log_undo(undone);
            self.selected = None;
            self.log_saved = false;
            self.refresh_legal_moves();
        }
    }

    /// The square, if it holds a piece the side to move may pick up.
    fn own_piece_at(&self, square: Square) -> Option<Square> {
        match self.board.get_piece(square) {
            Some(piece) if piece.color == self.board.turn => Some(square),
            _ => None,
        }
    }

    fn handle_square_click(&mut self, clicked: Square) {
        if self.board.checkmate || self.board.stalemate {
            return;
        }

        match self.selected {
            Some(selected) if selected == clicked => {
                // clicking the selected square deselects
                self.selected = None;
            }
            Some(selected) => {
                if let Some(piece) = self.board.get_piece(selected) {
                    let candidate =
                        Move::new(selected, clicked, piece, self.board.get_piece(clicked));
                    match self.board.try_make_move(candidate) {
                        Ok(applied) => {
                            self.logger.log_move(applied);
                            self.selected = None;
                            self.refresh_legal_moves();
                        }
                        Err(_) => {
                            // rejected: either re-select another of our
                            // pieces or drop the selection
                            self.selected = self.own_piece_at(clicked);
                        }
                    }
                }
            }
            None => {
                self.selected = self.own_piece_at(clicked);
            }
        }
    }

    fn status_line(&mut self) -> String {
        if self.board.checkmate {
            match self.board.turn {
                Color::White => "Checkmate - black wins".to_string(),
                Color::Black => "Checkmate - white wins".to_string(),
            }
        } else if self.board.stalemate {
            "Stalemate".to_string()
        } else {
            let side = match self.board.turn {
                Color::White => "White to move",
                Color::Black => "Black to move",
            };
            if self.board.in_check() {
                format!("{} (in check)", side)
            } else {
                side.to_string()
            }
        }
    }

    fn is_legal_destination(&self, square: Square) -> bool {
        match self.selected {
            Some(from) => self
                .legal_moves
                .iter()
                .any(|mv| mv.from == from && mv.to == square),
            None => false,
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();

        // row 0 (rank 8) at the top, so screen rows map straight through
        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = Square::new(row, col);
                let is_light = (row + col) % 2 == 0;

                let square_rect = Rect::from_min_size(
                    board_rect.min
                        + Vec2::new(col as f32 * square_size, row as f32 * square_size),
                    Vec2::splat(square_size),
                );

                let base_color = if is_light {
                    Color32::from_rgb(240, 217, 181)
                } else {
                    Color32::from_rgb(181, 136, 99)
                };

                let square_color = if Some(square) == self.selected {
                    Color32::from_rgb(255, 255, 0)
                } else {
                    base_color
                };

                painter.rect_filled(square_rect, 0.0, square_color);

                if self.is_legal_destination(square) {
                    let center = square_rect.center();
                    let marker = Color32::from_rgba_premultiplied(128, 128, 128, 179);

                    if self.board.get_piece(square).is_some() {
                        // capture square: donut around the piece
                        painter.circle_filled(center, square_size * 0.4, marker);
                        painter.circle_filled(center, square_size * 0.25, square_color);
                    } else {
                        painter.circle_filled(center, square_size * 0.15, marker);
                    }
                }

                if let Some(piece) = self.board.get_piece(square) {
                    draw_piece(painter, piece, square_rect);
                }
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, Color32::BLACK));
    }
}

impl Default for ChessApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 'z' takes back the last move
        if ctx.input(|i| i.key_pressed(egui::Key::Z)) {
            self.undo();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chess");
            ui.label(self.status_line());

            let available_size = ui.available_size();
            let board_size = (available_size.x.min(available_size.y) - 20.0).max(0.0);
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(ui.cursor().min, Vec2::splat(board_size));

            let response = ui.allocate_rect(board_rect, Sense::click());

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let relative_pos = pos - board_rect.min;
                    if let Some(clicked_square) =
                        Square::from_coords(relative_pos.x, relative_pos.y, square_size)
                    {
                        self.handle_square_click(clicked_square);
                    }
                }
            }

            self.draw_board(ui, board_rect, square_size);

            if self.board.checkmate || self.board.stalemate {
                if ui.button("New game").clicked() {
                    self.new_game();
                }
            }
        });
    }
}

fn draw_piece(painter: &egui::Painter, piece: Piece, square_rect: Rect) {
    let center = square_rect.center();
    let size = square_rect.size() * 0.8;

    let glyph = match (piece.kind, piece.color) {
        (PieceKind::King, Color::White) => "♔",
        (PieceKind::Queen, Color::White) => "♕",
        (PieceKind::Rook, Color::White) => "♖",
        (PieceKind::Bishop, Color::White) => "♗",
        (PieceKind::Knight, Color::White) => "♘",
        (PieceKind::Pawn, Color::White) => "♙",
        (PieceKind::King, Color::Black) => "♚",
        (PieceKind::Queen, Color::Black) => "♛",
        (PieceKind::Rook, Color::Black) => "♜",
        (PieceKind::Bishop, Color::Black) => "♝",
        (PieceKind::Knight, Color::Black) => "♞",
        (PieceKind::Pawn, Color::Black) => "♟",
    };

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(size.x),
        Color32::BLACK,
    );
}
