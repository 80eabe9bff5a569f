//! Terminal snake runner.
//!
//! Owns the tick schedule: input is polled with a timeout equal to the
//! time remaining until the next tick, and the tick interval is re-read
//! from the engine after every tick because eating food shortens it.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // Deterministic per seed; interactive runs vary by wall clock.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = GameState::new(seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Re-read the interval every pass; the last tick may have eaten
        // food and shrunk it.
        let interval = Duration::from_millis(game.tick_interval_ms() as u64);
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Drain buffered key presses before the tick fires. Multiple turn
        // requests within one tick coalesce inside the engine.
        let mut actions: ArrayVec<GameAction, 16> = ArrayVec::new();
        if event::poll(timeout)? {
            loop {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            let _ = actions.try_push(action);
                        }
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        for action in actions {
            game.apply_action(action);
        }

        // Tick when due. Idle, paused and finished sessions make this a
        // no-op inside the engine, so no stale tick can touch them.
        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            game.tick();

            // Terminal bell as the one-shot game-over toast; the view
            // shows the final score banner from the snapshot.
            if game.take_last_event().is_some() {
                term.bell()?;
            }
        }
    }
}
