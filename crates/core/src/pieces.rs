//! Pieces module - tetromino catalog, occupancy matrices and rotation
//!
//! Each of the seven kinds has a base occupancy matrix (row-major, top row
//! first) and a static color scheme. Rotation is a plain 90° clockwise matrix
//! transform with no kick tables: a rotation either fits in place or it is
//! rejected by the collision check.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb};

/// Largest row/column count of any occupancy matrix.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a filled cell relative to the piece anchor, as `(dx, dy)`.
pub type CellOffset = (i8, i8);

/// Filled cells of a shape; a 4x4 matrix holds at most 16.
pub type CellList = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Boolean occupancy matrix of a piece in its current rotation.
///
/// Stored inline so pieces stay `Copy` and rotation never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a `0`/`1` matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, larger than 4x4, contains values
    /// other than 0/1, or has an all-empty edge row or column.
    pub fn from_matrix(matrix: &[&[u8]]) -> Self {
        let rows = matrix.len();
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&rows),
            "shape must have 1..={} rows, got {}",
            MAX_SHAPE_DIM,
            rows
        );
        let cols = matrix[0].len();
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&cols),
            "shape must have 1..={} columns, got {}",
            MAX_SHAPE_DIM,
            cols
        );

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), cols, "shape row {} is ragged", r);
            for (c, &v) in row.iter().enumerate() {
                assert!(v <= 1, "shape cell ({}, {}) must be 0 or 1, got {}", c, r, v);
                cells[r][c] = v == 1;
            }
        }

        let shape = Self {
            rows: rows as u8,
            cols: cols as u8,
            cells,
        };
        shape.assert_well_formed();
        shape
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at `(col, row)` is filled. Out of range reads as empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Filled cells as `(dx, dy)` offsets, row by row.
    pub fn cells(&self) -> CellList {
        let mut out = CellList::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// For an R×C matrix the result is C×R with
    /// `rotated[c][R-1-r] = original[r][c]`.
    pub fn rotated_cw(&self) -> Self {
        let r_count = self.rows as usize;
        let c_count = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..r_count {
            for c in 0..c_count {
                cells[c][r_count - 1 - r] = self.cells[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Matrix as rows of `0`/`1`, for display and tests.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|r| {
                (0..self.cols as usize)
                    .map(|c| self.cells[r][c] as u8)
                    .collect()
            })
            .collect()
    }

    fn assert_well_formed(&self) {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let row_filled = |r: usize| (0..cols).any(|c| self.cells[r][c]);
        let col_filled = |c: usize| (0..rows).any(|r| self.cells[r][c]);

        assert!(row_filled(0), "shape has an empty top row");
        assert!(row_filled(rows - 1), "shape has an empty bottom row");
        assert!(col_filled(0), "shape has an empty left column");
        assert!(col_filled(cols - 1), "shape has an empty right column");
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Shape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.rows as usize))?;
        for r in 0..self.rows as usize {
            let row: ArrayVec<u8, MAX_SHAPE_DIM> = (0..self.cols as usize)
                .map(|c| self.cells[r][c] as u8)
                .collect();
            seq.serialize_element(row.as_slice())?;
        }
        seq.end()
    }
}

/// Color scheme of a piece kind: fill plus light/dark bevel outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PieceStyle {
    pub color: Rgb,
    /// Top/left edge highlight.
    pub outline_light: Rgb,
    /// Bottom/right edge shadow.
    pub outline_dark: Rgb,
}

struct CatalogEntry {
    matrix: &'static [&'static [u8]],
    style: PieceStyle,
}

const fn style(color: u32, outline_light: u32, outline_dark: u32) -> PieceStyle {
    PieceStyle {
        color: Rgb::from_hex(color),
        outline_light: Rgb::from_hex(outline_light),
        outline_dark: Rgb::from_hex(outline_dark),
    }
}

// Indexed by `PieceKind::id() - 1`.
static CATALOG: [CatalogEntry; 7] = [
    // I - cyan
    CatalogEntry {
        matrix: &[&[1, 1, 1, 1]],
        style: style(0x00FFFF, 0xB0FFFF, 0x0080FF),
    },
    // O - yellow
    CatalogEntry {
        matrix: &[&[1, 1], &[1, 1]],
        style: style(0xFFFF00, 0xFFFFB0, 0x808000),
    },
    // T - magenta
    CatalogEntry {
        matrix: &[&[0, 1, 0], &[1, 1, 1]],
        style: style(0xFF00FF, 0xFFB0FF, 0x800080),
    },
    // S - green
    CatalogEntry {
        matrix: &[&[0, 1, 1], &[1, 1, 0]],
        style: style(0x00FF00, 0xB0FFB0, 0x008000),
    },
    // Z - red
    CatalogEntry {
        matrix: &[&[1, 1, 0], &[0, 1, 1]],
        style: style(0xFF0000, 0xFFB0B0, 0x800000),
    },
    // J - blue
    CatalogEntry {
        matrix: &[&[1, 0, 0], &[1, 1, 1]],
        style: style(0x0000FF, 0xB0B0FF, 0x000080),
    },
    // L - orange
    CatalogEntry {
        matrix: &[&[0, 0, 1], &[1, 1, 1]],
        style: style(0xFF8000, 0xFFD0B0, 0x804000),
    },
];

fn entry(kind: PieceKind) -> &'static CatalogEntry {
    &CATALOG[(kind.id() - 1) as usize]
}

/// Spawn orientation of a piece kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    Shape::from_matrix(entry(kind).matrix)
}

/// Color scheme of a piece kind.
pub fn piece_style(kind: PieceKind) -> PieceStyle {
    entry(kind).style
}

/// A live piece: kind, current rotation state and board anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, centered horizontally on the top row.
    ///
    /// `x = floor(board_width / 2) - floor(shape_width / 2)`.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = base_shape(kind);
        let x = (board_width / 2) as i8 - (shape.cols() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    /// Board coordinates of every filled cell (rows may be negative).
    pub fn board_cells(&self) -> CellList {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Same anchor, shape rotated 90° clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    pub fn style(&self) -> PieceStyle {
        piece_style(self.kind)
    }
}
