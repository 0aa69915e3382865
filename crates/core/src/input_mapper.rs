//! Input mapper - gates player intents and routes them to transitions
//!
//! `Resume` is only accepted while paused. Every other intent is only
//! accepted while the game is running; anything else is silently dropped.

use crate::game_state::{GameState, Phase, StepReport};
use crate::rng::PieceSource;
use crate::types::Intent;

/// Whether `intent` would be acted on in the current state.
pub fn accepts(state: &GameState, intent: Intent) -> bool {
    match intent {
        Intent::Resume => state.phase() == Phase::Paused,
        _ => state.is_running(),
    }
}

/// Apply an intent if the state accepts it.
pub fn apply_intent<S: PieceSource + ?Sized>(
    state: &mut GameState,
    intent: Intent,
    source: &mut S,
) -> StepReport {
    if !accepts(state, intent) {
        log::trace!("ignored {} in {:?}", intent.as_str(), state.phase());
        return StepReport::default();
    }

    match intent {
        Intent::MoveLeft => StepReport::from_bool(state.move_horizontal(-1)),
        Intent::MoveRight => StepReport::from_bool(state.move_horizontal(1)),
        Intent::SoftDrop => state.descend(source),
        Intent::Rotate => StepReport::from_bool(state.rotate()),
        Intent::HardDrop => state.hard_drop(source),
        Intent::TogglePause => StepReport::from_bool(state.pause()),
        Intent::Resume => StepReport::from_bool(state.resume()),
    }
}
