//! Input module - Keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, GameAction};

/// Map keyboard input to game actions
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Steering
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Start),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
