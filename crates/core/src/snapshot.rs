use crate::pieces::{base_shape, CellList, Piece, Shape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, STARTING_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates of the filled cells.
    pub fn cells(&self) -> CellList {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a game handed to renderers and collaborators.
///
/// `board` holds `width * height` cells row-major: `0` empty, `1..=7` the
/// [`PieceKind::id`] of a locked piece.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<u8>,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub drop_interval_ms: f64,
}

impl GameSnapshot {
    /// Cell at `(x, y)`, or `0` outside the board.
    pub fn cell(&self, x: i8, y: i8) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return 0;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    /// Cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the board.
    pub fn row(&self, y: usize) -> &[u8] {
        let width = self.width as usize;
        &self.board[y * width..(y + 1) * width]
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![0; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                shape: base_shape(PieceKind::I),
                x: 0,
                y: 0,
            },
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            started: false,
            paused: false,
            game_over: false,
            drop_interval_ms: 0.0,
        }
    }
}
