//! Game facade - the single value a host owns
//!
//! [`Game`] bundles the state machine with its piece source, the gravity
//! scheduler and an observer. The host feeds it intents and elapsed time;
//! observers hear about locks, level-ups and game over once each transition
//! has completed.

use crate::config::GameConfig;
use crate::game_state::{GameState, StepReport};
use crate::input_mapper;
use crate::observer::{GameObserver, NoopObserver};
use crate::rng::{PieceSource, UniformSource};
use crate::scheduler::TickScheduler;
use crate::snapshot::GameSnapshot;
use crate::types::Intent;

pub struct Game<S: PieceSource = UniformSource, O: GameObserver = NoopObserver> {
    state: GameState,
    source: S,
    scheduler: TickScheduler,
    observer: O,
}

impl Game {
    /// Default rules, uniform pieces from `seed`, no observer.
    pub fn new(seed: u32) -> Self {
        Self::with_parts(GameConfig::default(), UniformSource::new(seed), NoopObserver)
    }
}

impl<S: PieceSource, O: GameObserver> Game<S, O> {
    /// # Panics
    ///
    /// Panics if `config` violates its contract.
    pub fn with_parts(config: GameConfig, mut source: S, observer: O) -> Self {
        let state = GameState::new(config, &mut source);
        Self {
            state,
            source,
            scheduler: TickScheduler::new(),
            observer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for setting up positions.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Discard the current game; the new one waits for [`Game::start`].
    pub fn reset(&mut self) {
        self.state.reset(&mut self.source);
        self.scheduler.reset();
    }

    pub fn start(&mut self) {
        self.state.start(&mut self.source);
        self.scheduler.reset();
        self.observer.on_game_start();
    }

    pub fn pause(&mut self) -> bool {
        self.state.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.state.resume()
    }

    /// Route a player intent through the input mapper.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        let report = input_mapper::apply_intent(&mut self.state, intent, &mut self.source);
        self.dispatch(&report);
        report.changed
    }

    /// Advance the gravity clock by `elapsed_ms` and return how many descents fired.
    ///
    /// Time only accumulates while the game is running. The interval is read
    /// again after each descent so a level-up applies to the remaining time.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.state.is_running() {
            return 0;
        }
        self.scheduler.accumulate(elapsed_ms);

        let mut fired = 0;
        while self.scheduler.try_fire(self.state.drop_interval_ms()) {
            let report = self.state.descend(&mut self.source);
            fired += 1;
            self.dispatch(&report);
            if !self.state.is_running() {
                self.scheduler.reset();
                break;
            }
        }
        fired
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    fn dispatch(&mut self, report: &StepReport) {
        if let Some(event) = &report.lock {
            self.observer.on_lock(event);
        }
        if let Some(level) = report.level_up {
            self.observer.on_level_up(level);
        }
        if let Some(over) = &report.game_over {
            self.scheduler.reset();
            self.observer.on_game_over(over);
        }
    }
}
