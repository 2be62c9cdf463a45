use derive_more::{Display, Error};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a pawn of this color advances by.
    pub fn forward(&self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn back_row(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

/// A piece standing on the board.
///
/// `has_moved` flips to `true` the first time the piece lands on a square through a move and is
/// never reset. Move generation does not consult it: pawns are gated on their starting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self::new(color, kind))
    }

    /// Unicode chess glyph, used by both front ends.
    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Square {
    Occupied(Piece),
    #[default]
    Empty,
}

impl Square {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// A square coordinate. Row 0 is White's back rank, column 0 is the A file.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct ChessField {
    #[cfg_attr(test, strategy(0u8..8))]
    pub row: u8,
    #[cfg_attr(test, strategy(0u8..8))]
    pub col: u8,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display(fmt = "invalid square `{}`", _0)]
pub struct FieldParseError(#[error(not(source))] pub String);

impl ChessField {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "field ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// Builds a field from signed coordinates, `None` when off the board.
    pub fn try_new(row: isize, col: isize) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, FieldParseError> {
        let mut chars = algebraic.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                let file = file.to_ascii_lowercase();
                if ('a'..='h').contains(&file) && ('1'..='8').contains(&rank) {
                    Ok(Self::new(rank as u8 - b'1', file as u8 - b'a'))
                } else {
                    Err(FieldParseError(algebraic.to_string()))
                }
            }
            _ => Err(FieldParseError(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }

    /// The field `(dr, dc)` away from this one, if still on the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        Self::try_new(self.row as isize + dr, self.col as isize + dc)
    }

    /// Every field of the board, row by row starting at A1.
    pub fn all() -> impl Iterator<Item = ChessField> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| ChessField { row, col }))
    }
}

/// Upper-case file letter and rank digit, e.g. `E2`.
impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char;
    let rank = (row + 1).to_string();
    format!("{}{}", file, rank)
}
