//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Playfield is a square grid of this many cells per side.
pub const GRID_SIZE: i8 = 20;

/// Game timing constants (in milliseconds)
pub const INITIAL_TICK_MS: u32 = 150;
pub const SPEED_STEP_MS: u32 = 5;
pub const MIN_TICK_MS: u32 = 50;

/// Score awarded per food eaten
pub const FOOD_SCORE: u32 = 10;

/// Snake spawn cell and initial heading
pub const SPAWN_X: i8 = GRID_SIZE / 2;
pub const SPAWN_Y: i8 = GRID_SIZE / 2;

/// One grid coordinate. `i8` on purpose: a candidate head may sit at -1 or
/// at `GRID_SIZE` for exactly one bounds check before it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in the given direction.
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this cell lies inside the playfield.
    pub fn in_grid(&self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }
}

/// Movement directions (y grows downward, matching screen rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for one tick of movement
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180-degree reverse of this direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

}

/// Game actions forwarded by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Turn(Direction),
    Pause,
    Start,
}

/// One-shot notification emitted when a session ends.
///
/// Fired exactly once per terminal transition and consumed by the driver
/// (e.g. to show a final-score banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_step() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_cell_in_grid() {
        assert!(Cell::new(0, 0).in_grid());
        assert!(Cell::new(GRID_SIZE - 1, GRID_SIZE - 1).in_grid());
        assert!(!Cell::new(-1, 0).in_grid());
        assert!(!Cell::new(0, -1).in_grid());
        assert!(!Cell::new(GRID_SIZE, 0).in_grid());
        assert!(!Cell::new(0, GRID_SIZE).in_grid());
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
