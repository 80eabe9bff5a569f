//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render a snapshot into an existing framebuffer (reused per frame).
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear();

        let board_w = (GRID_SIZE as u16) * self.cell_w;
        let board_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let field = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(20, 24, 28),
            bold: false,
            dim: true,
        };
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Playfield background with grid dots.
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, '·', field);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Food.
        let food_style = GlyphStyle {
            fg: Rgb::new(230, 80, 80),
            bg: Rgb::new(20, 24, 28),
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, start_x, start_y, snap.food.x, snap.food.y, '●', food_style);

        // Snake body, head brighter than the tail.
        let head_style = GlyphStyle {
            fg: Rgb::new(120, 240, 120),
            bg: Rgb::new(20, 24, 28),
            bold: true,
            dim: false,
        };
        let body_style = GlyphStyle {
            fg: Rgb::new(80, 180, 80),
            bg: Rgb::new(20, 24, 28),
            bold: false,
            dim: false,
        };
        for (i, seg) in snap.segments.iter().enumerate() {
            let style = if i == 0 { head_style } else { body_style };
            self.fill_cell(fb, start_x, start_y, seg.x, seg.y, '█', style);
        }

        self.draw_side_panel(fb, snap, start_x, start_y, frame_w);

        // Overlays.
        if !snap.started {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER TO START");
        } else if snap.game_over {
            let text = format!("GAME OVER  SCORE {}", snap.score);
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &text);
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i8,
        cell_y: i8,
        ch: char,
        style: GlyphStyle,
    ) {
        if cell_x < 0 || cell_y < 0 || cell_x >= GRID_SIZE || cell_y >= GRID_SIZE {
            return;
        }
        let px = start_x + 1 + (cell_x as u16) * self.cell_w;
        let py = start_y + 1 + (cell_y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= fb.width() || fb.width() - panel_x < 10 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{} ms", snap.tick_interval_ms), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.segments.len()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "arrows move", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "p pause  r restart  q quit", value);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
