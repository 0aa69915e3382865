//! Board module - manages the game grid
//!
//! The board is a fixed-size grid (10x20 by default) where each cell is empty or
//! holds the kind of the piece that locked there. Storage is a flat row-major
//! vector; dimensions never change after construction.
//! Coordinates: (x, y) where x grows to the right and y grows downwards from the
//! top row 0. Rows above the board (negative y) are never stored.

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Result of a functional row clear.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearResult {
    pub board: Board,
    pub lines_removed: u32,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board with custom dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is outside `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert_dims(width, height);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from row-major `u8` cells (`0` empty, `1..=7` piece id).
    ///
    /// # Panics
    ///
    /// Panics on a length mismatch or a cell value above 7.
    pub fn from_grid(width: u8, height: u8, grid: &[u8]) -> Self {
        assert_dims(width, height);
        assert_eq!(
            grid.len(),
            width as usize * height as usize,
            "grid length does not match {}x{} board",
            width,
            height
        );
        let cells = grid
            .iter()
            .enumerate()
            .map(|(i, &v)| match v {
                0 => None,
                _ => Some(PieceKind::from_id(v).unwrap_or_else(|| {
                    panic!("invalid cell value {} at index {}", v, i)
                })),
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the board.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Write every filled cell of `piece` into a copy of this board.
    ///
    /// Cells above the board (negative row) are dropped. The input board is
    /// left untouched.
    ///
    /// # Panics
    ///
    /// Panics if a cell on a non-negative row falls outside the board; callers
    /// validate moves before placing.
    pub fn place(&self, piece: &Piece) -> Board {
        let mut next = self.clone();
        for (x, y) in piece.board_cells() {
            if y < 0 {
                continue;
            }
            assert!(
                next.set(x, y, Some(piece.kind)),
                "placing {:?} writes outside the board at ({}, {})",
                piece.kind,
                x,
                y
            );
        }
        next
    }

    /// Clear all full rows in place and return how many were removed.
    ///
    /// Rows above a cleared row shift down by the number of cleared rows below
    /// them; the top is padded with empty rows. Two-pointer scan, bottom to top.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut removed = 0u32;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                removed += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        removed
    }

    /// Functional form of [`Board::clear_full_rows`].
    pub fn cleared(&self) -> ClearResult {
        let mut board = self.clone();
        let lines_removed = board.clear_full_rows();
        ClearResult {
            board,
            lines_removed,
        }
    }

    /// Number of locked cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as `u8` ids into `out`, reusing its allocation.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.map_or(0, |k| k.id())));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn assert_dims(width: u8, height: u8) {
    assert!(
        (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&width),
        "board width must be in {}..={}, got {}",
        MIN_BOARD_DIM,
        MAX_BOARD_DIM,
        width
    );
    assert!(
        (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&height),
        "board height must be in {}..={}, got {}",
        MIN_BOARD_DIM,
        MAX_BOARD_DIM,
        height
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, except: Option<i8>) {
        for x in 0..board.width() as i8 {
            if Some(x) != except {
                board.set(x, y, Some(PieceKind::J));
            }
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn custom_size_board_indexes_by_its_width() {
        let board = Board::with_size(6, 8);
        assert_eq!(board.index(5, 1), Some(11));
        assert_eq!(board.index(6, 0), None);
        assert_eq!(board.cells().len(), 48);
    }

    #[test]
    fn place_is_functional() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O, 10);
        let placed = board.place(&piece);

        assert_eq!(board.filled_count(), 0);
        assert_eq!(placed.filled_count(), 4);
        assert_eq!(placed.get(4, 0), Some(Some(PieceKind::O)));
        assert_eq!(placed.get(5, 1), Some(Some(PieceKind::O)));
    }

    #[test]
    fn place_drops_cells_above_the_board() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O, 10);
        piece.y = -1;
        let placed = board.place(&piece);
        assert_eq!(placed.filled_count(), 2);
        assert!(placed.is_occupied(4, 0));
        assert!(placed.is_occupied(5, 0));
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn place_out_of_bounds_panics() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.x = 8;
        board.place(&piece);
    }

    #[test]
    fn clear_full_rows_shifts_rows_down() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        fill_row(&mut board, 17, None);
        board.set(2, 18, Some(PieceKind::T));
        board.set(7, 16, Some(PieceKind::S));

        let removed = board.clear_full_rows();

        assert_eq!(removed, 2);
        assert_eq!(board.cells().len(), 200);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(7, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.filled_count(), 2);
        assert!(board.row(0).iter().all(|c| c.is_none()));
        assert!(board.row(1).iter().all(|c| c.is_none()));
    }

    #[test]
    fn cleared_leaves_input_untouched() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        let result = board.cleared();
        assert_eq!(result.lines_removed, 1);
        assert_eq!(result.board.filled_count(), 0);
        assert_eq!(board.filled_count(), 10);
    }

    #[test]
    fn clear_without_full_rows_is_noop() {
        let mut board = Board::new();
        fill_row(&mut board, 19, Some(0));
        let before = board.clone();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn grid_round_trip() {
        let mut grid = vec![0u8; 200];
        grid[195] = 3;
        grid[0] = 7;
        let board = Board::from_grid(10, 20, &grid);
        assert_eq!(board.get(5, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(0, 0), Some(Some(PieceKind::L)));

        let mut out = Vec::new();
        board.write_u8_grid(&mut out);
        assert_eq!(out, grid);
    }

    #[test]
    #[should_panic(expected = "invalid cell value")]
    fn from_grid_rejects_unknown_ids() {
        let mut grid = vec![0u8; 200];
        grid[10] = 8;
        Board::from_grid(10, 20, &grid);
    }

    #[test]
    #[should_panic(expected = "board width")]
    fn rejects_tiny_board() {
        Board::with_size(2, 20);
    }
}
