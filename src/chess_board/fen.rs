use super::{ChessBoard, ChessField, Color, Piece, Square};
use derive_more::{Display, Error};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[display(fmt = "Invalid FEN string: empty")]
    Empty,
    #[display(fmt = "Invalid FEN string: expected 8 rows, found {}", _0)]
    RowCount(#[error(not(source))] usize),
    #[display(fmt = "Invalid FEN string: row {} does not have 8 squares", _0)]
    RowLength(#[error(not(source))] usize),
    #[display(fmt = "Invalid piece character in FEN string: {}", _0)]
    Piece(#[error(not(source))] char),
    #[display(fmt = "Invalid FEN string: invalid active color `{}`", _0)]
    ActiveColor(#[error(not(source))] String),
}

/// Parses the piece placement and the active color of a FEN string.
///
/// Castling rights, en passant target and clocks are accepted but ignored. The active color
/// defaults to White when omitted.
pub fn from_fen(fen: &str) -> Result<(ChessBoard, Color), FenError> {
    let mut board = ChessBoard::new();
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(FenError::Empty)?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                col_index += skip as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::Piece(c))?;
                if col_index > 7 {
                    return Err(FenError::RowLength(row_index));
                }
                board.put(ChessField::new(7 - row_index as u8, col_index as u8), piece);
                col_index += 1;
            }
        }
        if col_index != 8 {
            return Err(FenError::RowLength(row_index));
        }
    }

    let active_color = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(FenError::ActiveColor(other.to_string())),
    };

    Ok((board, active_color))
}

pub fn to_fen(board: &ChessBoard, active_color: Color) -> String {
    let mut board_representation = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0;

        for file in 0..8 {
            match board.squares[rank][file] {
                Square::Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Square::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if rank > 0 {
            board_representation.push('/');
        }
    }

    let active_color = if active_color == Color::White { "w" } else { "b" };
    format!("{} {} - - 0 1", board_representation, active_color)
}
