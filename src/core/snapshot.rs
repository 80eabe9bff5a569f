//! Read-only view of the session state, consumed by renderers.

use crate::types::{Cell, Direction, INITIAL_TICK_MS};

/// Everything a renderer needs to draw one frame.
///
/// Callers may keep one snapshot and refill it every frame via
/// [`GameState::snapshot_into`](crate::core::GameState::snapshot_into)
/// to reuse the segment allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake segments, head first. Empty until filled from a session.
    pub segments: Vec<Cell>,
    pub food: Cell,
    /// Direction the snake is currently moving in.
    pub direction: Direction,
    /// Most recently accepted direction request (applied on the next tick).
    pub pending_direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.food = Cell::new(0, 0);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_MS;
        self.started = false;
        self.paused = false;
        self.game_over = false;
    }

    /// Whether ticks currently advance the simulation.
    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    pub fn head(&self) -> Option<Cell> {
        self.segments.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            segments: Vec::with_capacity(16),
            food: Cell::new(0, 0),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            started: false,
            paused: false,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty_and_idle() {
        let snap = GameSnapshot::default();
        assert!(!snap.playable());
        assert!(snap.head().is_none());
    }

    #[test]
    fn test_clear_matches_default() {
        let mut snap = GameSnapshot {
            segments: vec![Cell::new(1, 2)],
            score: 50,
            started: true,
            game_over: true,
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }

    #[test]
    fn test_playable_requires_running() {
        let mut snap = GameSnapshot::default();
        snap.started = true;
        assert!(snap.playable());
        snap.paused = true;
        assert!(!snap.playable());
        snap.paused = false;
        snap.game_over = true;
        assert!(!snap.playable());
    }
}
