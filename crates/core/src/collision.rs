//! Collision / movement engine
//!
//! A single predicate decides every proposed transform: descent, lateral moves
//! and in-place rotation.

use crate::board::Board;
use crate::pieces::{Piece, Shape};

/// Check whether `piece`, offset by `(dx, dy)` and optionally given a new
/// shape, fits on `board`.
///
/// A cell is rejected when its column is outside `[0, width)`, its row is at
/// or below the floor, or its row is on the board and already occupied. Rows
/// above the board are always allowed so freshly spawned pieces can hang over
/// the top edge.
pub fn is_valid_move(piece: &Piece, board: &Board, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
    let shape = shape.unwrap_or(&piece.shape);
    let base_x = piece.x + dx;
    let base_y = piece.y + dy;

    shape.cells().iter().all(|&(cx, cy)| {
        let x = base_x + cx;
        let y = base_y + cy;
        if x < 0 || x >= board.width() as i8 || y >= board.height() as i8 {
            return false;
        }
        y < 0 || !board.is_occupied(x, y)
    })
}

/// Whether the piece fits where it is.
pub fn fits(piece: &Piece, board: &Board) -> bool {
    is_valid_move(piece, board, 0, 0, None)
}

/// Whether the piece can descend one row.
pub fn can_descend(piece: &Piece, board: &Board) -> bool {
    is_valid_move(piece, board, 0, 1, None)
}

/// Lowest anchor row the piece can reach by falling straight down.
pub fn drop_row(piece: &Piece, board: &Board) -> i8 {
    let mut probe = *piece;
    while can_descend(&probe, board) {
        probe.y += 1;
    }
    probe.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn walls_and_floor_reject() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I, 10);

        piece.x = 0;
        assert!(!is_valid_move(&piece, &board, -1, 0, None));
        piece.x = 6;
        assert!(!is_valid_move(&piece, &board, 1, 0, None));
        piece.y = 19;
        assert!(!is_valid_move(&piece, &board, 0, 1, None));
        assert!(fits(&piece, &board));
    }

    #[test]
    fn rows_above_the_board_are_allowed() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::T, 10);
        assert!(is_valid_move(&piece, &board, 0, -1, None));
        assert!(is_valid_move(&piece, &board, 0, -5, None));
    }

    #[test]
    fn occupied_cells_reject() {
        let mut board = Board::new();
        board.set(4, 2, Some(PieceKind::Z));
        let piece = Piece::spawn(PieceKind::O, 10);

        assert!(can_descend(&piece, &board));
        let mut lower = piece;
        lower.y = 1;
        assert!(!can_descend(&lower, &board));
    }

    #[test]
    fn rotation_checks_substituted_shape() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.y = 17;
        let vertical = piece.shape.rotated_cw();

        // A vertical I anchored at row 17 would reach row 20.
        assert!(!is_valid_move(&piece, &board, 0, 0, Some(&vertical)));
        piece.y = 16;
        assert!(is_valid_move(&piece, &board, 0, 0, Some(&vertical)));
    }

    #[test]
    fn drop_row_on_empty_board() {
        let board = Board::new();
        assert_eq!(drop_row(&Piece::spawn(PieceKind::I, 10), &board), 19);
        assert_eq!(drop_row(&Piece::spawn(PieceKind::O, 10), &board), 18);
    }
}
