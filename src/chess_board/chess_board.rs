use super::PieceType::{Bishop, King, Knight, Pawn, Queen, Rook};
use super::{fen, ChessField, Color, FenError, Piece, PieceType, Square};

const BACK_RANK: [PieceType; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Square; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::initial()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// The standard starting layout: White on rows 0 and 1, Black mirrored on rows 7 and 6.
    pub fn initial() -> Self {
        let mut board = Self::new();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[color.back_row() as usize][col] = Square::Occupied(Piece::new(color, *kind));
                board.squares[color.pawn_row() as usize][col] = Square::Occupied(Piece::new(color, Pawn));
            }
        }
        board
    }

    /// Delegates FEN parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        fen::from_fen(fen)
    }

    pub fn to_fen(&self, active_color: Color) -> String {
        fen::to_fen(self, active_color)
    }
}

impl ChessBoard {
    pub fn square(&self, field: ChessField) -> Square {
        self.squares[field.row as usize][field.col as usize]
    }

    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        self.square(field).piece()
    }

    pub fn put(&mut self, field: ChessField, piece: Piece) {
        self.squares[field.row as usize][field.col as usize] = Square::Occupied(piece);
    }

    pub fn clear(&mut self, field: ChessField) {
        self.squares[field.row as usize][field.col as usize] = Square::Empty;
    }

    /// Moves whatever stands on `from` to `to`, overwriting the destination. The moved piece is
    /// marked as moved. Returns the overwritten piece, if any.
    pub fn make_move(&mut self, from: ChessField, to: ChessField) -> Option<Piece> {
        let captured = self.piece_at(to);
        if let Square::Occupied(mut piece) = self.square(from) {
            piece.has_moved = true;
            self.clear(from);
            self.put(to, piece);
        }
        captured
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        ChessField::all().filter_map(move |field| self.piece_at(field).map(|piece| (field, piece)))
    }
}

/// Occupancy predicates. They accept signed coordinates so generators can probe past the edges;
/// anything off the board is neither empty, enemy nor friendly.
impl ChessBoard {
    pub fn in_bounds(row: isize, col: isize) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    pub fn is_empty(&self, row: isize, col: isize) -> bool {
        Self::in_bounds(row, col) && self.squares[row as usize][col as usize] == Square::Empty
    }

    pub fn is_enemy(&self, row: isize, col: isize, color: Color) -> bool {
        self.occupant(row, col).is_some_and(|p| p.color != color)
    }

    pub fn is_friendly(&self, row: isize, col: isize, color: Color) -> bool {
        self.occupant(row, col).is_some_and(|p| p.color == color)
    }

    fn occupant(&self, row: isize, col: isize) -> Option<Piece> {
        if Self::in_bounds(row, col) {
            self.squares[row as usize][col as usize].piece()
        } else {
            None
        }
    }
}
