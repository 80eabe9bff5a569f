//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O, so the same engine can run under
//! a terminal frontend, a test harness, or a benchmark.

pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
