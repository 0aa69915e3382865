//! Tick scheduler - converts elapsed time into gravity steps
//!
//! The host reports elapsed milliseconds; the scheduler accumulates them and
//! fires one descent per full drop interval. The interval shrinks
//! geometrically with the level down to a floor.

use crate::config::GameConfig;

/// Drop interval for `level`: `max(min, base * speedup^(level - 1))`.
pub fn drop_interval_ms(level: u32, config: &GameConfig) -> f64 {
    let exponent = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let interval = config.base_interval_ms * config.speedup_factor.powi(exponent);
    interval.max(config.min_interval_ms)
}

/// Millisecond accumulator driving gravity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickScheduler {
    accumulated_ms: f64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed host time.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.accumulated_ms += elapsed_ms as f64;
    }

    /// Consume one interval if enough time has built up.
    pub fn try_fire(&mut self, interval_ms: f64) -> bool {
        if interval_ms > 0.0 && self.accumulated_ms >= interval_ms {
            self.accumulated_ms -= interval_ms;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }

    pub fn pending_ms(&self) -> f64 {
        self.accumulated_ms
    }
}
