use crate::chess_board::{ChessField, Color, Piece};
use std::fmt;

/// What a single input event did to the game.
///
/// Invalid interactions are not errors: they leave the game untouched and are reported here so
/// a front end can tell the player why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The click landed outside the board.
    OffBoard,
    Selected { field: ChessField, piece: Piece },
    /// A piece of the side not to move was clicked while nothing was selected.
    NotYourTurn { turn: Color },
    NothingToSelect { field: ChessField },
    Deselected,
    Moved {
        number: u32,
        color: Color,
        from: ChessField,
        to: ChessField,
        captured: Option<Piece>,
    },
    Reselected { field: ChessField, piece: Piece },
    InvalidMove { field: ChessField },
    SelectionCleared,
    /// A clear was requested while nothing was selected.
    NothingToClear,
}

impl Feedback {
    /// Whether the event changed board, turn, selection or legality mask.
    pub fn changed_state(&self) -> bool {
        match self {
            Feedback::Selected { .. }
            | Feedback::Deselected
            | Feedback::Moved { .. }
            | Feedback::Reselected { .. }
            | Feedback::SelectionCleared => true,
            Feedback::OffBoard
            | Feedback::NotYourTurn { .. }
            | Feedback::NothingToSelect { .. }
            | Feedback::InvalidMove { .. }
            | Feedback::NothingToClear => false,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::OffBoard => write!(f, "Click outside the board"),
            Feedback::Selected { field, .. } => write!(f, "Selected piece at {}", field),
            Feedback::NotYourTurn { turn } => {
                write!(f, "It's {}'s turn! Cannot select {} piece.", turn, turn.opposite())
            }
            Feedback::NothingToSelect { field } => write!(f, "No piece to select at {}", field),
            Feedback::Deselected => write!(f, "Deselected square"),
            Feedback::Moved {
                number,
                color,
                from,
                to,
                captured,
            } => {
                write!(f, "Move #{}: {} moved from {} to {}", number, color, from, to)?;
                if let Some(piece) = captured {
                    write!(f, ", capturing {}", piece)?;
                }
                write!(f, ". Now it's {}'s turn.", color.opposite())
            }
            Feedback::Reselected { field, .. } => write!(f, "Selected new piece at {}", field),
            Feedback::InvalidMove { field } => write!(f, "Invalid move to {}", field),
            Feedback::SelectionCleared => write!(f, "Selection cleared"),
            Feedback::NothingToClear => write!(f, "Nothing to clear"),
        }
    }
}
