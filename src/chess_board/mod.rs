pub mod fen;
pub mod model;
pub mod perft;
pub use fen::{FenError, INITIAL_POSITION};
pub use model::{ChessField, Color, FieldParseError, Piece, PieceType, Square};

mod chess_board;
mod move_generation;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::ChessBoard;
pub use move_generation::LegalityMask;
