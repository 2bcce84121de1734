//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::board::Board;
use crate::core::pieces::shape_color;
use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, Tile};

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

/// Draws the well, settled tiles, ghost, active piece, and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a frame snapshot into a framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board = snapshot.board;
        let board_px_w = (board.width as u16) * self.cell_w;
        let board_px_h = (board.height as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let grid_dot = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };

        // Empty well with grid dots.
        for row in 0..board.height as u16 {
            for col in 0..board.width as u16 {
                self.fill_cell_rect(&mut fb, start_x, start_y, col, row, '·', grid_dot);
            }
        }

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for tile in &snapshot.settled {
            self.draw_tile(&mut fb, board, start_x, start_y, tile, '█', false);
        }

        // Ghost before the active piece so the piece wins where they overlap.
        if let Some(ghost) = snapshot.ghost_tiles() {
            for tile in ghost {
                self.draw_tile(&mut fb, board, start_x, start_y, &tile, '░', true);
            }
        }

        if let Some(active) = &snapshot.active {
            for tile in active.tiles() {
                self.draw_tile(&mut fb, board, start_x, start_y, &tile, '█', false);
            }
        }

        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        fb
    }

    /// Screen cell for a world tile. World y points up and row 1 is the
    /// bottom of the well, so the screen row is `height - y`; tiles above
    /// the open top are clipped.
    fn cell_pos(&self, board: Board, tile: &Tile) -> Option<(u16, u16)> {
        let col = tile.x as i32;
        let row = board.height as i32 - tile.row();
        if col < 0 || col >= board.width as i32 || row < 0 || row >= board.height as i32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        board: Board,
        start_x: u16,
        start_y: u16,
        tile: &Tile,
        ch: char,
        ghost: bool,
    ) {
        let Some((col, row)) = self.cell_pos(board, tile) else {
            return;
        };
        let style = CellStyle {
            fg: tile.color,
            bg: WELL_BG,
            bold: !ghost,
            dim: ghost,
        };
        self.fill_cell_rect(fb, start_x, start_y, col, row, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╔', style);
        fb.put_char(x + w - 1, y, '╗', style);
        fb.put_char(x, y + h - 1, '╚', style);
        fb.put_char(x + w - 1, y + h - 1, '╝', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', style);
            fb.put_char(x + dx, y + h - 1, '═', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', style);
            fb.put_char(x + w - 1, y + dy, '║', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.level), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.lines), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        match snapshot.saved {
            Some(kind) => {
                // Dimmed once the swap has been spent for this piece.
                let style = CellStyle {
                    fg: shape_color(kind),
                    dim: !snapshot.can_hold,
                    ..value
                };
                fb.put_char(panel_x, y, kind.letter(), style);
            }
            None => fb.put_char(panel_x, y, '-', value),
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        for kind in snapshot.queue.iter() {
            if y >= viewport.height {
                break;
            }
            let style = CellStyle {
                fg: shape_color(*kind),
                ..value
            };
            fb.put_char(panel_x, y, kind.letter(), style);
            y = y.saturating_add(1);
        }
    }
}
