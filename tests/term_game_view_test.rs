use basetris::core::{piece_style, Game, GameConfig, GameSnapshot, NoopObserver, ScriptedSource};
use basetris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use basetris::types::{Intent, PieceKind};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    fb.row_text(y)
}

fn started(kind: PieceKind) -> Game<ScriptedSource, NoopObserver> {
    let mut game = Game::with_parts(GameConfig::default(), ScriptedSource::repeat(kind), NoopObserver);
    game.start();
    game
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_frame_follows_board_size() {
    let game = Game::with_parts(
        GameConfig::default().with_board_size(6, 8),
        ScriptedSource::repeat(PieceKind::O),
        NoopObserver,
    );
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&game.snapshot(), Viewport::new(14, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}

#[test]
fn term_view_renders_locked_cell_with_bevel() {
    let mut snap = GameSnapshot::default();
    snap.board[19 * 10] = 1;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let style = piece_style(PieceKind::I);
    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '▌');
    assert_eq!(left.style.fg, style.outline_light);
    assert_eq!(left.style.bg, style.color);
    assert_eq!(right.ch, '▐');
    assert_eq!(right.style.fg, style.outline_dark);
}

#[test]
fn term_view_single_column_cells_are_solid() {
    let mut snap = GameSnapshot::default();
    snap.board[19 * 10 + 9] = 4;
    let fb = GameView::new(1, 1).render(&snap, Viewport::new(12, 22));

    let cell = fb.get(10, 20).unwrap();
    assert_eq!(cell.style.bg, piece_style(PieceKind::S).color);
}

#[test]
fn term_view_draws_active_piece_only_while_playing() {
    let game = started(PieceKind::O);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(22, 22);

    // O spawns at x=4: screen columns 1 + 4*2 = 9.
    let fb = view.render(&game.snapshot(), vp);
    assert_eq!(fb.get(9, 1).unwrap().ch, '▌');

    let mut snap = game.snapshot();
    snap.started = false;
    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(9, 1).unwrap().ch, '·');
}

#[test]
fn term_view_overlays() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let idle = view.render(&GameSnapshot::default(), vp);
    assert!((0..22).any(|y| row_text(&idle, y).contains("PRESS ENTER")));

    let mut game = started(PieceKind::T);
    game.handle_intent(Intent::TogglePause);
    let paused = view.render(&game.snapshot(), vp);
    assert!((0..22).any(|y| row_text(&paused, y).contains("PAUSED")));

    let mut snap = game.snapshot();
    snap.paused = false;
    snap.game_over = true;
    snap.score = 1200;
    let over = view.render(&snap, vp);
    let text: Vec<String> = (0..22).map(|y| row_text(&over, y)).collect();
    assert!(text.iter().any(|r| r.contains("GAME OVER")));
    assert!(text.iter().any(|r| r.contains("Score 1200")));
}

#[test]
fn term_view_side_panel_shows_tallies() {
    let game = started(PieceKind::T);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), Viewport::new(60, 24));

    let text: Vec<String> = (0..24).map(|y| row_text(&fb, y)).collect();
    assert!(text.iter().any(|r| r.contains("SCORE")));
    assert!(text.iter().any(|r| r.contains("LEVEL")));
    assert!(text.iter().any(|r| r.contains("LINES")));
    assert!(text.iter().any(|r| r.contains("1000 ms")));
}

#[test]
fn render_into_reuses_and_resizes_buffer() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, Viewport::new(30, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 24));
}
