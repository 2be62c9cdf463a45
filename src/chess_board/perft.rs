use super::{ChessBoard, ChessField, Color};

/// Counts the move sequences of length `depth` playable from `board` with `color` to move,
/// where every move goes to a destination of the moving piece's legality mask.
pub fn perft(board: &ChessBoard, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1u64;
    }

    let mut node_count = 0u64;
    for (from, to) in pseudo_moves(board, color) {
        let mut new_board = board.clone();
        new_board.make_move(from, to);
        node_count += perft(&new_board, color.opposite(), depth - 1);
    }
    node_count
}

/// All `(from, to)` pairs available to `color`, ordered by origin then destination.
pub fn pseudo_moves(board: &ChessBoard, color: Color) -> Vec<(ChessField, ChessField)> {
    board
        .pieces_with_coordinates()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(from, _)| {
            board
                .compute_legal_mask(Some(from))
                .fields()
                .map(move |to| (from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_initial_position() {
        let board = ChessBoard::initial();
        assert_eq!(perft(&board, Color::White, 0), 1u64);
        assert_eq!(perft(&board, Color::White, 1), 20u64);
        assert_eq!(perft(&board, Color::Black, 1), 20u64);
        assert_eq!(perft(&board, Color::White, 2), 400u64);
    }

    #[test]
    fn test_perft_lone_pieces() {
        let (board, color) = ChessBoard::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1").unwrap();
        assert_eq!(perft(&board, color, 1), 3u64);
        // Kings may walk next to each other and even capture one another.
        let (board, color) = ChessBoard::from_fen("8/8/8/8/8/8/8/Kk6 w - - 0 1").unwrap();
        assert_eq!(perft(&board, color, 1), 3u64);
    }

    #[test]
    fn test_pseudo_moves_only_for_side_to_move() {
        let board = ChessBoard::initial();
        assert!(pseudo_moves(&board, Color::Black)
            .iter()
            .all(|(from, _)| board.piece_at(*from).map(|p| p.color) == Some(Color::Black)));
    }
}
