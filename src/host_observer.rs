//! Observer wired into the terminal host.

use basetris::core::GameObserver;
use basetris::types::{GameOverReport, LockEvent};

/// Logs game events; the game-over report is written as JSON.
#[derive(Debug, Default)]
pub struct HostObserver {
    last_report: Option<GameOverReport>,
}

impl HostObserver {
    pub fn last_report(&self) -> Option<&GameOverReport> {
        self.last_report.as_ref()
    }
}

impl GameObserver for HostObserver {
    fn on_game_start(&mut self) {
        self.last_report = None;
        log::info!("new game");
    }

    fn on_lock(&mut self, event: &LockEvent) {
        if event.lines_removed > 0 {
            log::debug!(
                "cleared {} lines for {} points",
                event.lines_removed,
                event.score_delta
            );
        }
    }

    fn on_level_up(&mut self, new_level: u32) {
        log::info!("reached level {}", new_level);
    }

    fn on_game_over(&mut self, report: &GameOverReport) {
        match serde_json::to_string(report) {
            Ok(json) => log::info!("game over {}", json),
            Err(err) => log::warn!("game over {} (json: {})", report, err),
        }
        if !report.is_recordable() {
            log::debug!("score of zero is not recorded");
        }
        self.last_report = Some(*report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_report_until_next_start() {
        let mut obs = HostObserver::default();
        let report = GameOverReport {
            score: 300,
            level: 1,
            lines: 3,
        };
        obs.on_game_over(&report);
        assert_eq!(obs.last_report(), Some(&report));
        obs.on_game_start();
        assert_eq!(obs.last_report(), None);
    }
}
