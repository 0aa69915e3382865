//! Game configuration
//!
//! Everything here defaults to the classic rules: a 10x20 board, 1000ms gravity
//! at level 1 sped up by 8% per level down to 50ms, a level every 10 lines and
//! 100 points per line times the level.

use crate::types::{
    BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_FLOOR_MS, DROP_SPEEDUP_FACTOR,
    LINES_PER_LEVEL, MAX_BOARD_DIM, MIN_BOARD_DIM, POINTS_PER_LINE,
};

/// Tunable rules of a game.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Drop interval at level 1.
    pub base_interval_ms: f64,
    /// Multiplier applied per level above 1.
    pub speedup_factor: f64,
    /// Floor for the drop interval.
    pub min_interval_ms: f64,
    pub lines_per_level: u32,
    pub points_per_line: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            base_interval_ms: BASE_DROP_MS,
            speedup_factor: DROP_SPEEDUP_FACTOR,
            min_interval_ms: DROP_INTERVAL_FLOOR_MS,
            lines_per_level: LINES_PER_LEVEL,
            points_per_line: POINTS_PER_LINE,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, width: u8, height: u8) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Check the configuration contract.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violated constraint.
    pub fn assert_valid(&self) {
        assert!(
            (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.board_width),
            "board_width must be in {}..={}, got {}",
            MIN_BOARD_DIM,
            MAX_BOARD_DIM,
            self.board_width
        );
        assert!(
            (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.board_height),
            "board_height must be in {}..={}, got {}",
            MIN_BOARD_DIM,
            MAX_BOARD_DIM,
            self.board_height
        );
        assert!(
            self.base_interval_ms.is_finite() && self.base_interval_ms > 0.0,
            "base_interval_ms must be positive, got {}",
            self.base_interval_ms
        );
        assert!(
            self.speedup_factor > 0.0 && self.speedup_factor <= 1.0,
            "speedup_factor must be in (0, 1], got {}",
            self.speedup_factor
        );
        assert!(
            self.min_interval_ms.is_finite() && self.min_interval_ms > 0.0,
            "min_interval_ms must be positive, got {}",
            self.min_interval_ms
        );
        assert!(self.lines_per_level > 0, "lines_per_level must be positive");
    }
}
