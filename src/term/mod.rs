//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed to a terminal
//! backend, keeping `core` deterministic and testable:
//!
//! - [`fb`]: styled-character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: crossterm backend (raw mode, alternate screen)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
