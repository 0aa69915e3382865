//! Terminal runner (default binary).
//!
//! Fixed 16ms frame loop: poll keys, feed intents to the game, advance
//! gravity by the real elapsed time, render. Uses crossterm for input and the
//! framebuffer renderer from `basetris-term`.

mod file_logger;
mod frame_clock;
mod host_config;
mod host_observer;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use basetris::core::{Game, GameSnapshot, UniformSource};
use basetris::input::{handle_key_event, is_press, is_reset_key, is_start_key, should_quit};
use basetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use basetris::types::TICK_MS;

use file_logger::FileLogger;
use frame_clock::FrameClock;
use host_config::HostConfig;
use host_observer::HostObserver;

type HostGame = Game<UniformSource, HostObserver>;

fn main() -> Result<()> {
    let config = HostConfig::from_env()?;
    if let Some(path) = &config.log_path {
        FileLogger::open(path, config.log_level)?.install()?;
    }
    log::info!(
        "starting: seed={} board={}x{}",
        config.seed,
        config.game.board_width,
        config.game.board_height
    );

    let mut game = Game::with_parts(
        config.game,
        UniformSource::new(config.seed),
        HostObserver::default(),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(report) = game.observer().last_report() {
        log::info!("last result: {}", report);
    }
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut HostGame) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut clock = FrameClock::new(Instant::now());

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(clock.elapsed(Instant::now()));
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(key) => {
                    if should_quit(key) {
                        log::info!("quit");
                        return Ok(());
                    }
                    let idle = !game.state().started() || game.state().game_over();
                    if is_start_key(key) && idle {
                        game.start();
                    } else if is_reset_key(key) {
                        game.reset();
                    } else if let Some(intent) = handle_key_event(key, game.state().paused()) {
                        game.handle_intent(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            if clock.elapsed(Instant::now()) >= tick_duration {
                break;
            }
        }

        // Tick.
        let now = Instant::now();
        if clock.elapsed(now) >= tick_duration {
            game.tick(clock.take_elapsed_ms(now));
        }
    }
}
