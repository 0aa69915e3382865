//! Game state module - the explicit state machine
//!
//! This module ties together the board, the active piece and scoring. Every
//! transition is a method on [`GameState`] that mutates in place; [`GameState::next`]
//! offers the same transitions as a pure function returning a fresh state.
//!
//! Piece kinds are drawn from a caller-supplied [`PieceSource`], so the state
//! itself is plain data and cheap to clone.
//!
//! Phases: `NotStarted -> Running <-> Paused`, `Running -> GameOver`. Only
//! `reset`/`start` leave `GameOver`.

use crate::board::Board;
use crate::collision::{can_descend, is_valid_move};
use crate::config::GameConfig;
use crate::pieces::Piece;
use crate::rng::PieceSource;
use crate::scheduler::drop_interval_ms;
use crate::scoring::calculate_lock;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameOverReport, Intent, LockEvent, STARTING_LEVEL};

/// Coarse lifecycle phase derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Input to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// One gravity step fired by the scheduler.
    Gravity,
    /// A player intent, gated like the input mapper gates it.
    Intent(Intent),
    Reset,
    Start,
}

/// What a transition did, for observers and hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// The state differs from before the transition.
    pub changed: bool,
    pub lock: Option<LockEvent>,
    /// New level, if this transition raised it.
    pub level_up: Option<u32>,
    pub game_over: Option<GameOverReport>,
}

impl StepReport {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }

    pub(crate) fn from_bool(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Piece,
    score: u32,
    level: u32,
    lines: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Fresh, not-yet-started game with an empty board and one spawned piece.
    ///
    /// # Panics
    ///
    /// Panics if `config` violates its contract (see [`GameConfig::assert_valid`]).
    pub fn new<S: PieceSource + ?Sized>(config: GameConfig, source: &mut S) -> Self {
        config.assert_valid();
        let board = Board::with_size(config.board_width, config.board_height);
        let active = Piece::spawn(source.next_kind(), config.board_width);
        log::trace!("spawned {:?} at ({}, {})", active.kind, active.x, active.y);
        Self {
            config,
            board,
            active,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else if self.started {
            Phase::Running
        } else {
            Phase::NotStarted
        }
    }

    /// Started, not paused, not over: gravity and movement apply.
    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Current gravity interval for this level.
    pub fn drop_interval_ms(&self) -> f64 {
        drop_interval_ms(self.level, &self.config)
    }

    pub fn report(&self) -> GameOverReport {
        GameOverReport {
            score: self.score,
            level: self.level,
            lines: self.lines,
        }
    }

    /// Replace the state wholesale with a fresh unstarted game.
    pub fn reset<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        *self = Self::new(self.config, source);
    }

    /// Fresh game with `started` set.
    pub fn start<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        self.reset(source);
        self.started = true;
        log::info!("game started with {:?}", self.active.kind);
    }

    fn spawn<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        self.active = Piece::spawn(source.next_kind(), self.config.board_width);
        log::trace!(
            "spawned {:?} at ({}, {})",
            self.active.kind,
            self.active.x,
            self.active.y
        );
    }

    /// Move one row down, or lock if the piece is resting.
    pub fn descend<S: PieceSource + ?Sized>(&mut self, source: &mut S) -> StepReport {
        if !self.is_running() {
            return StepReport::unchanged();
        }
        if can_descend(&self.active, &self.board) {
            self.active.y += 1;
            return StepReport::changed();
        }
        self.lock(source)
    }

    /// Lock the active piece where it stands.
    ///
    /// A piece that locks with its anchor on or above the top row ends the
    /// game; the board and score are left as they were.
    fn lock<S: PieceSource + ?Sized>(&mut self, source: &mut S) -> StepReport {
        if self.active.y <= 0 {
            self.game_over = true;
            let report = self.report();
            log::info!("game over: {}", report);
            return StepReport {
                changed: true,
                game_over: Some(report),
                ..StepReport::default()
            };
        }

        self.board = self.board.place(&self.active);
        let lines_removed = self.board.clear_full_rows();
        let level_before = self.level;
        let tally = calculate_lock(
            self.score,
            self.level,
            self.lines,
            lines_removed,
            &self.config,
        );
        self.score = tally.score;
        self.level = tally.level;
        self.lines = tally.lines;

        log::debug!(
            "locked {:?} at ({}, {}): {} lines, +{} points",
            self.active.kind,
            self.active.x,
            self.active.y,
            lines_removed,
            tally.event.score_delta
        );

        let level_up = (self.level > level_before).then_some(self.level);
        if let Some(level) = level_up {
            log::info!("level up: {}", level);
        }

        self.spawn(source);

        StepReport {
            changed: true,
            lock: Some(tally.event),
            level_up,
            game_over: None,
        }
    }

    /// Shift one column left (`-1`) or right (`+1`). Returns `false` if blocked.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.is_running() || !is_valid_move(&self.active, &self.board, dx, 0, None) {
            return false;
        }
        self.active.x += dx;
        true
    }

    /// Rotate 90° clockwise in place. Returns `false` if the result collides.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rotated = self.active.shape.rotated_cw();
        if !is_valid_move(&self.active, &self.board, 0, 0, Some(&rotated)) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Fall to the lowest valid row and lock immediately.
    pub fn hard_drop<S: PieceSource + ?Sized>(&mut self, source: &mut S) -> StepReport {
        if !self.is_running() {
            return StepReport::unchanged();
        }
        while can_descend(&self.active, &self.board) {
            self.active.y += 1;
        }
        self.lock(source)
    }

    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.paused = true;
        log::info!("paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase() != Phase::Paused {
            return false;
        }
        self.paused = false;
        log::info!("resumed");
        true
    }

    /// Apply one event in place.
    pub fn apply<S: PieceSource + ?Sized>(&mut self, event: Event, source: &mut S) -> StepReport {
        match event {
            Event::Gravity => self.descend(source),
            Event::Intent(intent) => crate::input_mapper::apply_intent(self, intent, source),
            Event::Reset => {
                self.reset(source);
                StepReport::changed()
            }
            Event::Start => {
                self.start(source);
                StepReport::changed()
            }
        }
    }

    /// Pure form of [`GameState::apply`]: `self` is left untouched.
    pub fn next<S: PieceSource + ?Sized>(&self, event: Event, source: &mut S) -> (Self, StepReport) {
        let mut next = self.clone();
        let report = next.apply(event, source);
        (next, report)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
