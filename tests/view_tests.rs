//! Rendering pipeline tests: engine state flows through the snapshot into
//! the framebuffer.

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::Direction;

fn framebuffer_text(fb: &FrameBuffer) -> String {
    let mut text = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            text.push(fb.get(x, y).map(|g| g.ch).unwrap_or(' '));
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_running_session_renders_snake_food_and_score() {
    let mut state = GameState::new(11);
    state.start();
    state.tick();

    let view = GameView::default();
    let fb = view.render(&state.snapshot(), Viewport::new(100, 30));
    let text = framebuffer_text(&fb);

    assert!(text.contains('█'), "snake body missing");
    assert!(text.contains('●'), "food missing");
    assert!(text.contains("SCORE"), "side panel missing");
    assert!(!text.contains("PRESS ENTER TO START"));
}

#[test]
fn test_idle_and_game_over_overlays() {
    let mut state = GameState::new(12);
    let view = GameView::default();

    let idle = framebuffer_text(&view.render(&state.snapshot(), Viewport::new(100, 30)));
    assert!(idle.contains("PRESS ENTER TO START"));

    state.start();
    state.request_direction(Direction::Up);
    while !state.game_over() {
        state.tick();
    }

    let over = framebuffer_text(&view.render(&state.snapshot(), Viewport::new(100, 30)));
    assert!(over.contains("GAME OVER"));
    assert!(over.contains(&format!("SCORE {}", state.score())));
}

#[test]
fn test_snapshot_reuse_matches_fresh_snapshot() {
    let mut state = GameState::new(13);
    state.start();
    state.tick();

    let mut reused = GameSnapshot::default();
    state.snapshot_into(&mut reused);
    assert_eq!(reused, state.snapshot());
}
