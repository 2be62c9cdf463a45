//! Turn and selection handling for a two-player game on one board.
//!
//! A [`Game`] is either idle or has one piece of the side to move selected, together with the
//! legality mask of that piece. Clicks drive the transitions; every transition runs to
//! completion before the next event is handled.

mod feedback;

pub use feedback::Feedback;

use crate::chess_board::{ChessBoard, ChessField, Color, LegalityMask, Piece};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: ChessBoard,
    turn: Color,
    selection: Option<ChessField>,
    legal_moves: LegalityMask,
    move_count: u32,
    hovered: Option<ChessField>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard starting layout, White to move.
    pub fn new() -> Self {
        Self::from_board(ChessBoard::initial(), Color::White)
    }

    pub fn from_board(board: ChessBoard, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: None,
            legal_moves: LegalityMask::default(),
            move_count: 0,
            hovered: None,
        }
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<ChessField> {
        self.selection
    }

    pub fn legal_moves(&self) -> &LegalityMask {
        &self.legal_moves
    }

    /// Number of completed moves, counting both sides.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Move number in the usual sense: both sides' moves share one number.
    pub fn full_move_number(&self) -> u32 {
        self.move_count / 2 + 1
    }

    pub fn hovered(&self) -> Option<ChessField> {
        self.hovered
    }

    /// Handles a click on `field`, or outside the board when `None`.
    pub fn click(&mut self, field: Option<ChessField>) -> Feedback {
        let Some(field) = field else {
            return Feedback::OffBoard;
        };

        match self.board.piece_at(field) {
            Some(piece) => debug!(%field, %piece, "clicked"),
            None => debug!(%field, "clicked empty square"),
        }

        let feedback = match self.selection {
            None => self.click_when_idle(field),
            Some(selected) if selected == field => {
                self.deselect();
                Feedback::Deselected
            }
            Some(selected) if self.legal_moves.is_legal(field) => self.execute_move(selected, field),
            Some(_) => match self.own_piece_at(field) {
                Some(piece) => {
                    self.select(field);
                    Feedback::Reselected { field, piece }
                }
                None => Feedback::InvalidMove { field },
            },
        };

        if feedback.changed_state() {
            info!("{}", feedback);
        } else {
            debug!("{}", feedback);
        }
        feedback
    }

    /// Drops the current selection, whatever it is.
    pub fn clear_selection(&mut self) -> Feedback {
        if self.selection.is_none() {
            debug!("nothing to clear");
            return Feedback::NothingToClear;
        }
        self.deselect();
        info!("selection cleared");
        Feedback::SelectionCleared
    }

    /// Records the square under the pointer. Returns whether it changed.
    pub fn hover(&mut self, field: Option<ChessField>) -> bool {
        let changed = self.hovered != field;
        self.hovered = field;
        changed
    }

    fn click_when_idle(&mut self, field: ChessField) -> Feedback {
        match self.board.piece_at(field) {
            Some(piece) if piece.color == self.turn => {
                self.select(field);
                Feedback::Selected { field, piece }
            }
            Some(_) => Feedback::NotYourTurn { turn: self.turn },
            None => Feedback::NothingToSelect { field },
        }
    }

    fn execute_move(&mut self, from: ChessField, to: ChessField) -> Feedback {
        let color = self.turn;
        let captured = self.board.make_move(from, to);
        self.move_count += 1;
        self.turn = self.turn.opposite();
        self.deselect();
        Feedback::Moved {
            number: self.move_count,
            color,
            from,
            to,
            captured,
        }
    }

    fn own_piece_at(&self, field: ChessField) -> Option<Piece> {
        self.board.piece_at(field).filter(|piece| piece.color == self.turn)
    }

    fn select(&mut self, field: ChessField) {
        self.selection = Some(field);
        self.board.fill_legal_mask(field, &mut self.legal_moves);
    }

    fn deselect(&mut self) {
        self.selection = None;
        self.legal_moves.clear();
    }
}
