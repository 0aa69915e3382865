//! Integration tests for the game loop: lifecycle, scenarios and hooks

use basetris::core::{
    drop_interval_ms, is_valid_move, Game, GameConfig, Notification, RecordingObserver,
    ScriptedSource,
};
use basetris::types::{GameOverReport, Intent, LockEvent, PieceKind};

type TestGame = Game<ScriptedSource, RecordingObserver>;

fn started(kinds: &[PieceKind]) -> TestGame {
    let mut game = Game::with_parts(
        GameConfig::default(),
        ScriptedSource::new(kinds.to_vec()),
        RecordingObserver::new(),
    );
    game.start();
    game
}

fn fill_row(game: &mut TestGame, y: i8, skip: &[i8]) {
    let board = game.state_mut().board_mut();
    for x in 0..board.width() as i8 {
        if !skip.contains(&x) {
            board.set(x, y, Some(PieceKind::Z));
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(12345);
    assert!(!game.state().started());

    game.start();
    assert!(game.state().started());
    assert!(!game.state().game_over());
    assert!(!game.state().paused());

    assert!(game.pause());
    assert!(game.state().paused());
    assert!(game.resume());

    game.reset();
    assert!(!game.state().started());
}

#[test]
fn i_piece_spawns_centered_and_hard_drops_to_floor() {
    let mut game = started(&[PieceKind::I, PieceKind::O]);
    let snap = game.snapshot();
    assert_eq!(snap.active.kind, PieceKind::I);
    assert_eq!((snap.active.x, snap.active.y), (3, 0));

    assert!(game.handle_intent(Intent::HardDrop));

    let snap = game.snapshot();
    assert_eq!(&snap.row(19)[3..7], &[1, 1, 1, 1]);
    assert_eq!(snap.board.iter().filter(|&&c| c != 0).count(), 4);
    assert_eq!(snap.active.kind, PieceKind::O);
    assert_eq!(
        game.observer().notifications.last(),
        Some(&Notification::Lock(LockEvent {
            lines_removed: 0,
            new_level: 1,
            score_delta: 0,
        }))
    );
}

#[test]
fn filling_the_gap_clears_one_line_and_shifts_rows() {
    let mut game = started(&[PieceKind::I]);
    fill_row(&mut game, 19, &[0]);
    game.state_mut().board_mut().set(5, 18, Some(PieceKind::T));

    // Stand the I upright and walk it into column 0.
    assert!(game.handle_intent(Intent::Rotate));
    for _ in 0..3 {
        assert!(game.handle_intent(Intent::MoveLeft));
    }
    assert!(!game.handle_intent(Intent::MoveLeft));
    assert!(game.handle_intent(Intent::HardDrop));

    let state = game.state();
    let board = state.board();
    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 100);
    assert!(board.row(0).iter().all(|c| c.is_none()));
    // The T marker moved down one row.
    assert_eq!(board.get(5, 19), Some(Some(PieceKind::T)));
    // Three I cells remain in column 0 after the shift.
    for y in 17..20 {
        assert_eq!(board.get(0, y), Some(Some(PieceKind::I)), "row {}", y);
    }
    assert_eq!(board.get(0, 16), Some(None));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn blocked_spawn_is_immediate_game_over() {
    let mut game = started(&[PieceKind::T]);
    fill_row(&mut game, 2, &[]);
    let board_before = game.state().board().clone();
    let piece = *game.state().active();
    assert!(!is_valid_move(&piece, game.state().board(), 0, 1, None));

    assert_eq!(game.tick(1000), 1);

    assert!(game.state().game_over());
    assert_eq!(game.state().board(), &board_before);
    assert_eq!(game.state().score(), 0);
    assert_eq!(
        game.observer().notifications.last(),
        Some(&Notification::GameOver(GameOverReport {
            score: 0,
            level: 1,
            lines: 0,
        }))
    );

    // Terminal until start.
    assert!(!game.handle_intent(Intent::MoveLeft));
    game.start();
    assert!(!game.state().game_over());
    assert_eq!(game.state().board().filled_count(), 0);
}

#[test]
fn drop_interval_at_level_one_and_eleven() {
    let config = GameConfig::default();
    assert_eq!(drop_interval_ms(1, &config), 1000.0);
    let l11 = drop_interval_ms(11, &config);
    assert!((l11 - 1000.0 * 0.92f64.powi(10)).abs() < 1e-9);
    assert!((l11 - 434.39).abs() < 0.01, "{}", l11);
}

#[test]
fn level_up_hook_fires_and_speeds_up_gravity() {
    let mut game = started(&[PieceKind::I]);
    let observer_len = |g: &TestGame| g.observer().level_ups().count();

    // Ten single-line clears: gap at columns 3..=6 filled by a flat I.
    for _ in 0..10 {
        fill_row(&mut game, 19, &[3, 4, 5, 6]);
        assert!(game.handle_intent(Intent::HardDrop));
    }

    assert_eq!(game.state().lines(), 10);
    assert_eq!(game.state().level(), 2);
    assert_eq!(game.state().score(), 1000);
    assert_eq!(observer_len(&game), 1);
    assert!((game.snapshot().drop_interval_ms - 920.0).abs() < 1e-9);

    // The next clear scores at level 2.
    fill_row(&mut game, 19, &[3, 4, 5, 6]);
    game.handle_intent(Intent::HardDrop);
    assert_eq!(game.state().score(), 1200);
}

#[test]
fn multi_line_clear_scores_at_level_before() {
    let mut game = started(&[PieceKind::I]);
    for y in 16..20 {
        fill_row(&mut game, y, &[0]);
    }
    game.handle_intent(Intent::Rotate);
    for _ in 0..3 {
        game.handle_intent(Intent::MoveLeft);
    }
    game.handle_intent(Intent::HardDrop);

    assert_eq!(game.state().lines(), 4);
    assert_eq!(game.state().score(), 400);
    assert_eq!(game.state().board().filled_count(), 0);
}

#[test]
fn soft_drop_locks_when_resting() {
    let mut game = started(&[PieceKind::O, PieceKind::S]);
    for _ in 0..18 {
        game.handle_intent(Intent::SoftDrop);
    }
    assert_eq!(game.state().active().y, 18);
    assert!(game.handle_intent(Intent::SoftDrop));
    assert_eq!(game.state().active().kind, PieceKind::S);
    assert_eq!(game.state().board().filled_count(), 4);
}

#[test]
fn pause_freezes_gravity_and_intents() {
    let mut game = started(&[PieceKind::T]);
    assert!(game.handle_intent(Intent::TogglePause));
    let y = game.state().active().y;

    assert_eq!(game.tick(5000), 0);
    assert!(!game.handle_intent(Intent::MoveLeft));
    assert!(!game.handle_intent(Intent::HardDrop));
    assert_eq!(game.state().active().y, y);

    assert!(game.handle_intent(Intent::Resume));
    assert_eq!(game.tick(1000), 1);
}

#[test]
fn custom_board_size_spawns_relative_to_width() {
    let mut game = Game::with_parts(
        GameConfig::default().with_board_size(6, 8),
        ScriptedSource::repeat(PieceKind::I),
        RecordingObserver::new(),
    );
    game.start();
    let snap = game.snapshot();
    assert_eq!((snap.width, snap.height), (6, 8));
    assert_eq!(snap.board.len(), 48);
    assert_eq!(snap.active.x, 1);

    game.handle_intent(Intent::HardDrop);
    assert_eq!(&game.snapshot().row(7)[1..5], &[1, 1, 1, 1]);
}

#[test]
fn start_hook_fires_on_every_start() {
    let mut game = started(&[PieceKind::T]);
    game.start();
    let starts = game
        .observer()
        .notifications
        .iter()
        .filter(|n| **n == Notification::GameStart)
        .count();
    assert_eq!(starts, 2);
}
