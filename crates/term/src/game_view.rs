//! GameView: maps render and score snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RenderSnapshot, ScoreUpdate};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, SECONDS_PER_MINUTE};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal color of a piece color tag.
pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Cyan => Rgb::new(80, 220, 220),
    }
}

/// Lays out the board frame and the side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &RenderSnapshot) -> (u16, u16) {
        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &RenderSnapshot,
        score: &ScoreUpdate,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for y in 0..snap.rows {
            for x in 0..snap.cols {
                match snap.cell(x, y) {
                    Some(color) => self.draw_block(fb, start_x, start_y, x, y, color),
                    None => self.fill_cell_rect(fb, start_x, start_y, x, y, '·', empty),
                }
            }
        }

        let active = &snap.active;
        for (col, row) in active.grid.occupied() {
            let x = active.x + col as i32;
            let y = active.y + row as i32;
            if x >= 0 && (x as usize) < snap.cols && y >= 0 && (y as usize) < snap.rows {
                self.draw_block(fb, start_x, start_y, x as usize, y as usize, active.color);
            }
        }

        self.draw_side_panel(fb, score, viewport, start_x.saturating_add(frame_w), start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, score: &ScoreUpdate, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, score, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: usize, y: usize, color: PieceColor) {
        let style = CellStyle::new(color_rgb(color), PLAY_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: usize,
        cell_y: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add((cell_x as u16).saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add((cell_y as u16).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        score: &ScoreUpdate,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let minutes = score.elapsed_seconds / SECONDS_PER_MINUTE;
        let seconds = score.elapsed_seconds % SECONDS_PER_MINUTE;
        let x = fb.put_u64_padded(panel_x, y, minutes, 2, value);
        fb.put_char(x, y, ':', value);
        fb.put_u64_padded(x.saturating_add(1), y, seconds, 2, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MIN", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, score.elapsed_minutes, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, score.score, value);
        y = y.saturating_add(2);

        for line in ["←→ move", "↓  drop", "↑  rotate", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}
