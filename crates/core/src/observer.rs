//! Observer hooks
//!
//! Collaborators outside the core (score persistence, telemetry, UI sounds)
//! subscribe through [`GameObserver`]. Every method has a no-op default, so an
//! implementation only overrides what it cares about. Hooks fire after the
//! transition that caused them has completed.

use crate::types::{GameOverReport, LockEvent};

pub trait GameObserver {
    /// A new game was started.
    fn on_game_start(&mut self) {}

    /// A piece locked onto the board.
    fn on_lock(&mut self, _event: &LockEvent) {}

    fn on_level_up(&mut self, _new_level: u32) {}

    fn on_game_over(&mut self, _report: &GameOverReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_game_start(&mut self) {
        (**self).on_game_start()
    }

    fn on_lock(&mut self, event: &LockEvent) {
        (**self).on_lock(event)
    }

    fn on_level_up(&mut self, new_level: u32) {
        (**self).on_level_up(new_level)
    }

    fn on_game_over(&mut self, report: &GameOverReport) {
        (**self).on_game_over(report)
    }
}

impl<T: GameObserver + ?Sized> GameObserver for Box<T> {
    fn on_game_start(&mut self) {
        (**self).on_game_start()
    }

    fn on_lock(&mut self, event: &LockEvent) {
        (**self).on_lock(event)
    }

    fn on_level_up(&mut self, new_level: u32) {
        (**self).on_level_up(new_level)
    }

    fn on_game_over(&mut self, report: &GameOverReport) {
        (**self).on_game_over(report)
    }
}

/// One recorded hook call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    GameStart,
    Lock(LockEvent),
    LevelUp(u32),
    GameOver(GameOverReport),
}

/// Observer that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub notifications: Vec<Notification>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn level_ups(&self) -> impl Iterator<Item = u32> + '_ {
        self.notifications.iter().filter_map(|n| match n {
            Notification::LevelUp(level) => Some(*level),
            _ => None,
        })
    }
}

impl GameObserver for RecordingObserver {
    fn on_game_start(&mut self) {
        self.notifications.push(Notification::GameStart);
    }

    fn on_lock(&mut self, event: &LockEvent) {
        self.notifications.push(Notification::Lock(*event));
    }

    fn on_level_up(&mut self, new_level: u32) {
        self.notifications.push(Notification::LevelUp(new_level));
    }

    fn on_game_over(&mut self, report: &GameOverReport) {
        self.notifications.push(Notification::GameOver(*report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_keeps_order() {
        fn notify<O: GameObserver>(mut observer: O) {
            observer.on_game_start();
            observer.on_level_up(2);
        }

        let mut rec = RecordingObserver::new();
        notify(&mut rec);
        rec.on_game_over(&GameOverReport::default());

        assert_eq!(rec.level_ups().collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            rec.take(),
            vec![
                Notification::GameStart,
                Notification::LevelUp(2),
                Notification::GameOver(GameOverReport::default()),
            ]
        );
        assert!(rec.notifications.is_empty());
    }

    #[test]
    fn boxed_observers_forward() {
        let mut boxed: Box<dyn GameObserver> = Box::new(RecordingObserver::new());
        boxed.on_lock(&LockEvent::default());
        NoopObserver.on_level_up(3);
    }
}
