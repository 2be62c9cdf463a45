use super::{ChessBoard, ChessField, Color, PieceType, Square};

const KNIGHT_MOVES: [(isize, isize); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
const KING_MOVES: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Destinations reachable by the selected piece, one flag per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalityMask {
    squares: [[bool; 8]; 8],
}

impl LegalityMask {
    pub fn is_legal(&self, field: ChessField) -> bool {
        self.squares[field.row as usize][field.col as usize]
    }

    pub fn clear(&mut self) {
        self.squares = [[false; 8]; 8];
    }

    pub fn is_clear(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        self.squares.iter().flatten().filter(|legal| **legal).count()
    }

    /// The marked fields, row by row starting at A1.
    pub fn fields(&self) -> impl Iterator<Item = ChessField> + '_ {
        ChessField::all().filter(move |field| self.is_legal(*field))
    }

    fn mark(&mut self, row: isize, col: isize) {
        self.squares[row as usize][col as usize] = true;
    }
}

impl ChessBoard {
    /// Computes the legality mask for the piece on `selected`.
    ///
    /// Returns an all-false mask when nothing is selected or the selected square is empty.
    pub fn compute_legal_mask(&self, selected: Option<ChessField>) -> LegalityMask {
        let mut mask = LegalityMask::default();
        if let Some(field) = selected {
            self.fill_legal_mask(field, &mut mask);
        }
        mask
    }

    /// Clears `mask`, then marks every destination of the piece on `field`.
    pub fn fill_legal_mask(&self, field: ChessField, mask: &mut LegalityMask) {
        mask.clear();
        if let Square::Occupied(piece) = self.square(field) {
            let (row, col) = (field.row as isize, field.col as isize);
            match piece.kind {
                PieceType::Pawn => self.mark_pawn_moves(row, col, piece.color, mask),
                PieceType::Knight => self.mark_moves_from_offsets(row, col, piece.color, &KNIGHT_MOVES, mask),
                PieceType::Bishop => self.mark_bishop_moves(row, col, piece.color, mask),
                PieceType::Rook => self.mark_rook_moves(row, col, piece.color, mask),
                PieceType::Queen => self.mark_queen_moves(row, col, piece.color, mask),
                PieceType::King => self.mark_moves_from_offsets(row, col, piece.color, &KING_MOVES, mask),
            }
        }
    }

    fn mark_pawn_moves(&self, row: isize, col: isize, color: Color, mask: &mut LegalityMask) {
        let forward = color.forward();
        let new_row = row + forward;

        // Regular forward move, never a capture
        if self.is_empty(new_row, col) {
            mask.mark(new_row, col);

            // Double move from start position
            let two_forward = new_row + forward;
            if row == color.pawn_row() as isize && self.is_empty(two_forward, col) {
                mask.mark(two_forward, col);
            }
        }

        // Capture diagonally
        for dc in [-1, 1] {
            if self.is_enemy(new_row, col + dc, color) {
                mask.mark(new_row, col + dc);
            }
        }
    }

    /// Walks each ray until the first occupied square, which is marked only when it holds an enemy.
    fn mark_sliding_moves(
        &self,
        row: isize,
        col: isize,
        color: Color,
        directions: &[(isize, isize)],
        mask: &mut LegalityMask,
    ) {
        for &(dr, dc) in directions {
            let mut new_row = row;
            let mut new_col = col;

            loop {
                new_row += dr;
                new_col += dc;

                if !ChessBoard::in_bounds(new_row, new_col) {
                    break;
                }

                if self.is_empty(new_row, new_col) {
                    mask.mark(new_row, new_col);
                } else {
                    if self.is_enemy(new_row, new_col, color) {
                        mask.mark(new_row, new_col);
                    }
                    break; // Block sliding
                }
            }
        }
    }

    fn mark_bishop_moves(&self, row: isize, col: isize, color: Color, mask: &mut LegalityMask) {
        self.mark_sliding_moves(row, col, color, &BISHOP_DIRECTIONS, mask);
    }

    fn mark_rook_moves(&self, row: isize, col: isize, color: Color, mask: &mut LegalityMask) {
        self.mark_sliding_moves(row, col, color, &ROOK_DIRECTIONS, mask);
    }

    fn mark_queen_moves(&self, row: isize, col: isize, color: Color, mask: &mut LegalityMask) {
        self.mark_rook_moves(row, col, color, mask);
        self.mark_bishop_moves(row, col, color, mask);
    }

    fn mark_moves_from_offsets(
        &self,
        row: isize,
        col: isize,
        color: Color,
        offsets: &[(isize, isize)],
        mask: &mut LegalityMask,
    ) {
        for &(dr, dc) in offsets {
            let (new_row, new_col) = (row + dr, col + dc);
            if ChessBoard::in_bounds(new_row, new_col) && !self.is_friendly(new_row, new_col, color) {
                mask.mark(new_row, new_col);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{assert_fields, field};
    use super::super::Piece;
    use super::*;
    use test_strategy::proptest;

    fn mask_of(fen: &str, square: &str) -> LegalityMask {
        let (board, _) = ChessBoard::from_fen(fen).unwrap();
        board.compute_legal_mask(Some(field(square)))
    }

    #[test]
    fn test_no_selection_yields_clear_mask() {
        let board = ChessBoard::initial();
        assert!(board.compute_legal_mask(None).is_clear());
        assert!(board.compute_legal_mask(Some(field("e4"))).is_clear());
    }

    #[test]
    fn test_fill_discards_previous_selection() {
        let board = ChessBoard::initial();
        let mut mask = board.compute_legal_mask(Some(field("b1")));
        board.fill_legal_mask(field("e2"), &mut mask);
        assert_fields(mask.fields(), vec!["e3", "e4"]);
        board.fill_legal_mask(field("e5"), &mut mask);
        assert!(mask.is_clear());
    }

    #[test]
    fn test_pawn_moves_from_start() {
        let board = ChessBoard::initial();
        assert_fields(board.compute_legal_mask(Some(field("e2"))).fields(), vec!["e3", "e4"]);
        assert_fields(board.compute_legal_mask(Some(field("d7"))).fields(), vec!["d6", "d5"]);
    }

    #[test]
    fn test_pawn_blocked() {
        // Blocked directly: no forward move at all, not even the double step.
        assert!(mask_of("8/8/8/8/8/4n3/4P3/8 w - - 0 1", "e2").is_clear());
        // Blocked on the second square: single step only.
        assert_fields(mask_of("8/8/8/8/4n3/8/4P3/8 w - - 0 1", "e2").fields(), vec!["e3"]);
    }

    #[test]
    fn test_pawn_captures_diagonally_only_enemies() {
        let mask = mask_of("8/8/8/3p1N2/4P3/8/8/8 w - - 0 1", "e4");
        assert_fields(mask.fields(), vec!["e5", "d5"]);
        let mask = mask_of("8/8/8/8/4p3/3P1p2/8/8 b - - 0 1", "e4");
        assert_fields(mask.fields(), vec!["e3", "d3"]);
    }

    #[test]
    fn test_pawn_on_edge_file() {
        assert_fields(mask_of("8/8/8/8/8/1p6/P7/8 w - - 0 1", "a2").fields(), vec!["a3", "a4", "b3"]);
        assert_fields(mask_of("8/7p/6P1/8/8/8/8/8 b - - 0 1", "h7").fields(), vec!["h6", "h5", "g6"]);
    }

    #[test]
    fn test_pawn_on_last_row_has_no_moves() {
        assert!(mask_of("4P3/8/8/8/8/8/8/8 w - - 0 1", "e8").is_clear());
        assert!(mask_of("8/8/8/8/8/8/8/4p3 b - - 0 1", "e1").is_clear());
    }

    #[test]
    fn test_pawn_double_step_only_from_start_row() {
        let mask = mask_of("8/8/8/8/8/4P3/8/8 w - - 0 1", "e3");
        assert_fields(mask.fields(), vec!["e4"]);
    }

    #[test]
    fn test_knight_moves() {
        let board = ChessBoard::initial();
        assert_fields(board.compute_legal_mask(Some(field("b1"))).fields(), vec!["a3", "c3"]);
        let mask = mask_of("8/8/8/8/3N4/8/8/8 w - - 0 1", "d4");
        assert_fields(mask.fields(), vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]);
        let mask = mask_of("8/8/8/8/8/1p6/2P5/N7 w - - 0 1", "a1");
        assert_fields(mask.fields(), vec!["b3"]);
    }

    #[test]
    fn test_rook_captures_stop_rays() {
        let mask = mask_of("8/8/8/8/1p1R2p1/8/8/8 w - - 0 1", "d4");
        assert_fields(
            mask.fields(),
            vec!["c4", "b4", "e4", "f4", "g4", "d1", "d2", "d3", "d5", "d6", "d7", "d8"],
        );
        assert!(!mask.is_legal(field("a4")));
        assert!(!mask.is_legal(field("h4")));
    }

    #[test]
    fn test_rook_stops_before_friendly() {
        let board = ChessBoard::initial();
        assert!(board.compute_legal_mask(Some(field("a1"))).is_clear());
        let mask = mask_of("8/8/8/8/8/8/P7/R1N5 w - - 0 1", "a1");
        assert_fields(mask.fields(), vec!["b1"]);
    }

    #[test]
    fn test_bishop_moves() {
        let mask = mask_of("8/8/5P2/8/3B4/8/1p6/8 w - - 0 1", "d4");
        assert_fields(mask.fields(), vec!["c5", "b6", "a7", "e5", "c3", "b2", "e3", "f2", "g1"]);
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let fen = "3k4/1p6/8/8/3Q2P1/8/8/6n1 w - - 0 1";
        let (board, _) = ChessBoard::from_fen(fen).unwrap();
        let queen = board.compute_legal_mask(Some(field("d4")));

        let mut composed = board.clone();
        composed.put(field("d4"), Piece::new(Color::White, PieceType::Rook));
        let rook = composed.compute_legal_mask(Some(field("d4")));
        composed.put(field("d4"), Piece::new(Color::White, PieceType::Bishop));
        let bishop = composed.compute_legal_mask(Some(field("d4")));

        for f in ChessField::all() {
            assert_eq!(queen.is_legal(f), rook.is_legal(f) || bishop.is_legal(f), "{}", f);
        }
        assert!(queen.is_legal(field("d8")));
        assert!(queen.is_legal(field("g1")));
        assert!(!queen.is_legal(field("g4")));
    }

    #[test]
    fn test_king_moves_ignore_attacks() {
        let mask = mask_of("8/8/8/2r5/8/4K3/8/8 w - - 0 1", "e3");
        assert_fields(mask.fields(), vec!["d2", "d3", "d4", "e2", "e4", "f2", "f3", "f4"]);
        let mask = mask_of("8/8/8/8/8/8/PP6/K1q5 w - - 0 1", "a1");
        assert_fields(mask.fields(), vec!["b1"]);
    }

    #[proptest]
    fn sliding_rays_stop_at_first_occupied_square(
        #[strategy(0usize..3)] slider: usize,
        origin: ChessField,
        blockers: Vec<(ChessField, Color)>,
    ) {
        let kind = [PieceType::Rook, PieceType::Bishop, PieceType::Queen][slider];
        let mut board = ChessBoard::new();
        for (f, color) in blockers {
            board.put(f, Piece::new(color, PieceType::Pawn));
        }
        board.put(origin, Piece::new(Color::White, kind));
        let mask = board.compute_legal_mask(Some(origin));

        for (dr, dc) in ROOK_DIRECTIONS.iter().chain(BISHOP_DIRECTIONS.iter()) {
            let mut blocked = false;
            let mut current = origin.offset(*dr, *dc);
            while let Some(f) = current {
                let on_ray = match kind {
                    PieceType::Rook => *dr == 0 || *dc == 0,
                    PieceType::Bishop => *dr != 0 && *dc != 0,
                    _ => true,
                };
                if blocked || !on_ray {
                    assert!(!mask.is_legal(f), "{} beyond a blocker", f);
                } else if let Some(p) = board.piece_at(f) {
                    assert_eq!(mask.is_legal(f), p.color == Color::Black);
                    blocked = true;
                } else {
                    assert!(mask.is_legal(f));
                }
                current = f.offset(*dr, *dc);
            }
        }
    }

    #[proptest]
    fn pawn_away_from_start_row_never_double_steps(
        #[strategy(2u8..6)] row: u8,
        #[strategy(0u8..8)] col: u8,
        color: Color,
    ) {
        let mut board = ChessBoard::new();
        let origin = ChessField::new(row, col);
        board.put(origin, Piece::new(color, PieceType::Pawn));
        let mask = board.compute_legal_mask(Some(origin));
        let forward = color.forward();
        if row != color.pawn_row() {
            if let Some(two) = origin.offset(2 * forward, 0) {
                assert!(!mask.is_legal(two));
            }
            assert_eq!(mask.count(), usize::from(origin.offset(forward, 0).is_some()));
        }
    }

    #[proptest]
    fn mask_never_marks_friendly_squares(field: ChessField) {
        let board = ChessBoard::initial();
        let mask = board.compute_legal_mask(Some(field));
        let color = board.piece_at(field).map(|p| p.color);
        for f in mask.fields() {
            assert_ne!(board.piece_at(f).map(|p| p.color), color);
        }
    }
}
