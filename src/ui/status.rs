use crate::chess_board::{ChessBoard, ChessField};
use crate::game::Game;

pub const TITLE: &str = "Chess Game - Turn-Based Mode";
pub const LEGEND: &str = "Click to select/move pieces - o: legal moves, x: captures";

/// How a square should be painted, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Selected,
    Capture,
    Move,
    Hovered,
    Light,
    Dark,
}

impl SquareShade {
    pub fn of(game: &Game, field: ChessField) -> Self {
        if game.selection() == Some(field) {
            SquareShade::Selected
        } else if game.legal_moves().is_legal(field) {
            if game.board().piece_at(field).is_some() {
                SquareShade::Capture
            } else {
                SquareShade::Move
            }
        } else if game.hovered() == Some(field) {
            SquareShade::Hovered
        } else if (field.row + field.col) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }

    /// RGB color used by the window front end.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SquareShade::Selected => (230, 179, 51),
            SquareShade::Capture => (204, 51, 51),
            SquareShade::Move => (51, 179, 51),
            SquareShade::Hovered => (102, 153, 204),
            SquareShade::Light => (230, 230, 230),
            SquareShade::Dark => (77, 51, 26),
        }
    }
}

/// `E2 - White Pawn` or `E4 - Empty square`.
pub fn describe_square(board: &ChessBoard, field: ChessField) -> String {
    match board.piece_at(field) {
        Some(piece) => format!("{} - {}", field, piece),
        None => format!("{} - Empty square", field),
    }
}

pub fn turn_line(game: &Game) -> String {
    format!("Turn: {} (Move #{})", game.turn(), game.full_move_number())
}

pub fn selection_lines(game: &Game) -> Vec<String> {
    let Some(selected) = game.selection() else {
        return Vec::new();
    };
    let mut lines = vec![format!("Selected: {}", describe_square(game.board(), selected))];
    let count = game.legal_moves().count();
    if count > 0 {
        lines.push(format!("Legal moves available: {}", count));
    }
    lines
}

pub fn hover_line(game: &Game) -> Option<String> {
    game.hovered()
        .map(|field| format!("Hover: {}", describe_square(game.board(), field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::test_utils::field;

    #[test]
    fn test_shades() {
        let (board, turn) = ChessBoard::from_fen("8/8/8/8/1p1R2p1/8/8/8 w - - 0 1").unwrap();
        let mut game = Game::from_board(board, turn);
        game.click(Some(field("d4")));
        game.hover(Some(field("a1")));
        assert_eq!(SquareShade::of(&game, field("d4")), SquareShade::Selected);
        assert_eq!(SquareShade::of(&game, field("g4")), SquareShade::Capture);
        assert_eq!(SquareShade::of(&game, field("e4")), SquareShade::Move);
        assert_eq!(SquareShade::of(&game, field("a1")), SquareShade::Hovered);
        assert_eq!(SquareShade::of(&game, field("h1")), SquareShade::Dark);
        assert_eq!(SquareShade::of(&game, field("h2")), SquareShade::Light);
    }

    #[test]
    fn test_hover_does_not_hide_legal_moves() {
        let mut game = Game::new();
        game.click(Some(field("e2")));
        game.hover(Some(field("e4")));
        assert_eq!(SquareShade::of(&game, field("e4")), SquareShade::Move);
    }

    #[test]
    fn test_status_lines() {
        let mut game = Game::new();
        assert_eq!(turn_line(&game), "Turn: White (Move #1)");
        assert!(selection_lines(&game).is_empty());
        assert_eq!(hover_line(&game), None);

        game.click(Some(field("e2")));
        game.hover(Some(field("e4")));
        assert_eq!(
            selection_lines(&game),
            vec!["Selected: E2 - White Pawn".to_string(), "Legal moves available: 2".to_string()]
        );
        assert_eq!(hover_line(&game), Some("Hover: E4 - Empty square".to_string()));

        game.click(Some(field("e4")));
        assert_eq!(turn_line(&game), "Turn: Black (Move #1)");
        game.click(Some(field("e7")));
        game.click(Some(field("e5")));
        assert_eq!(turn_line(&game), "Turn: White (Move #2)");
    }

    #[test]
    fn test_selected_piece_without_moves() {
        let mut game = Game::new();
        game.click(Some(field("a1")));
        assert_eq!(selection_lines(&game), vec!["Selected: A1 - White Rook".to_string()]);
    }
}
