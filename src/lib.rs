//! Terminal snake with a fixed-tick deterministic core.
//!
//! The crate splits along the same seams as the binary's runtime loop:
//!
//! - [`core`]: the game engine. Owns all session state and is pure,
//!   deterministic per seed, and free of I/O.
//! - [`input`]: crossterm key events mapped to [`types::GameAction`].
//! - [`term`]: framebuffer, game view and terminal backend for rendering.
//! - [`types`]: shared constants and value types.
//!
//! The driver (`main.rs`) ticks the engine at the session's current speed
//! interval and re-reads that interval after every tick, since eating food
//! shrinks it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
