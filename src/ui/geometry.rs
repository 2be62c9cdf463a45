use crate::chess_board::ChessField;

/// Maps pointer positions to board squares.
///
/// Pixel coordinates grow right and down; the board is drawn with row 0 (White's back rank) at
/// the bottom and the A file on the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub square_size: f32,
}

impl BoardGeometry {
    pub fn new(origin_x: f32, origin_y: f32, square_size: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            square_size,
        }
    }

    /// The largest board that fits in `width` x `height` after leaving `margin` on every side,
    /// centred in the available area.
    pub fn fit(width: f32, height: f32, margin: f32) -> Self {
        let side = (width.min(height) - 2.0 * margin).max(0.0);
        let square_size = side / 8.0;
        Self::new((width - side) / 2.0, (height - side) / 2.0, square_size)
    }

    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    /// The square under `(x, y)`, `None` outside the board.
    pub fn square_at(&self, x: f32, y: f32) -> Option<ChessField> {
        if self.square_size <= 0.0 {
            return None;
        }
        let col = ((x - self.origin_x) / self.square_size).floor();
        let row_from_top = ((y - self.origin_y) / self.square_size).floor();
        if !(0.0..8.0).contains(&col) || !(0.0..8.0).contains(&row_from_top) {
            return None;
        }
        ChessField::try_new(7 - row_from_top as isize, col as isize)
    }
}
