//! Wall-clock to gravity-time conversion for the frame loop.

use std::time::{Duration, Instant};

/// Credits elapsed time in whole milliseconds without losing the remainder.
///
/// The reference instant only advances by the milliseconds handed out, so the
/// sub-millisecond part of each frame is carried into the next one.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Time since the last credited instant.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last)
    }

    /// Whole milliseconds elapsed up to `now`, marking them as consumed.
    pub fn take_elapsed_ms(&mut self, now: Instant) -> u32 {
        let ms = self.elapsed(now).as_millis().min(u32::MAX as u128) as u32;
        self.last += Duration::from_millis(ms as u64);
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_frames_add_up() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);

        // 10,000 frames of 16.7 ms: 167 s of wall time.
        let mut total: u64 = 0;
        for i in 1..=10_000u64 {
            total += clock.take_elapsed_ms(start + Duration::from_micros(16_700 * i)) as u64;
        }
        assert_eq!(total, 167_000);
    }

    #[test]
    fn remainder_carries_into_next_frame() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);

        assert_eq!(clock.take_elapsed_ms(start + Duration::from_micros(16_600)), 16);
        assert_eq!(clock.elapsed(start + Duration::from_micros(16_600)), Duration::from_micros(600));
        assert_eq!(clock.take_elapsed_ms(start + Duration::from_micros(33_200)), 17);
    }

    #[test]
    fn earlier_instant_credits_nothing() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start + Duration::from_millis(5));
        assert_eq!(clock.take_elapsed_ms(start), 0);
    }
}
