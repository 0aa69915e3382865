//! Scoring module - line-clear points and level progression
//!
//! Points are `lines * points_per_line * level`, using the level in effect
//! before the clear. The level is always `lines / lines_per_level + 1`.

use crate::config::GameConfig;
use crate::types::{LockEvent, STARTING_LEVEL};

/// Points awarded for removing `lines` rows at `level`.
pub fn line_clear_points(lines: u32, level: u32, config: &GameConfig) -> u32 {
    lines
        .saturating_mul(config.points_per_line)
        .saturating_mul(level)
}

/// Level implied by a running line total.
pub fn level_for_lines(lines: u32, config: &GameConfig) -> u32 {
    lines / config.lines_per_level + STARTING_LEVEL
}

/// Tallies after one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockTally {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub event: LockEvent,
}

/// Fold a lock that removed `lines_removed` rows into the running tallies.
pub fn calculate_lock(
    score: u32,
    level: u32,
    lines: u32,
    lines_removed: u32,
    config: &GameConfig,
) -> LockTally {
    let score_delta = line_clear_points(lines_removed, level, config);
    let lines = lines.saturating_add(lines_removed);
    let new_level = level_for_lines(lines, config);
    LockTally {
        score: score.saturating_add(score_delta),
        level: new_level,
        lines,
        event: LockEvent {
            lines_removed,
            new_level,
            score_delta,
        },
    }
}
