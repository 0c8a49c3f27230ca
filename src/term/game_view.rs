//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSession;
use crate::term::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, Coord, TileColor, BOARD_SIZE};

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

/// Everything the view needs beyond the engine state: where the cursor is
/// and what message (if any) the last action produced.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub cursor: Coord,
    pub message: Option<String>,
}

/// A lightweight terminal renderer for the puzzle board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the session and UI state into a framebuffer.
    pub fn render(&self, session: &GameSession, ui: &UiState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_SIZE as u16) * self.cell_w;
        let board_px_h = BOARD_SIZE as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                let cell = session.board().get(coord).unwrap_or(Cell::Empty);
                let selected = session.selection().contains(&coord);
                let at_cursor = ui.cursor == coord;
                self.draw_cell(&mut fb, start_x, start_y, coord, cell, selected, at_cursor);
            }
        }

        self.draw_side_panel(&mut fb, session, viewport, start_x, start_y, frame_w);
        self.draw_status_line(&mut fb, session, ui, start_x, start_y + frame_h);

        fb
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

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        coord: Coord,
        cell: Cell,
        selected: bool,
        at_cursor: bool,
    ) {
        let (ch, fg) = match cell {
            Cell::Empty => ('·', Rgb::new(90, 90, 100)),
            Cell::Goal => ('◆', Rgb::new(170, 170, 170)),
            Cell::Color(color) => ('█', color_rgb(color)),
        };

        let bg = if selected {
            Rgb::new(70, 70, 110)
        } else if at_cursor {
            Rgb::new(55, 55, 65)
        } else {
            Rgb::new(30, 30, 40)
        };

        let style = GlyphStyle {
            fg,
            bg,
            bold: selected || at_cursor,
        };

        let px = start_x + 1 + (coord.col as u16) * self.cell_w;
        let py = start_y + 1 + coord.row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
        if at_cursor {
            fb.put_char(px, py, '[', GlyphStyle { fg: Rgb::new(255, 255, 255), ..style });
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SELECTED", label);
        y = y.saturating_add(1);
        if session.selection().is_empty() {
            fb.put_str(panel_x, y, "-", value);
            y = y.saturating_add(1);
        } else {
            for coord in session.selection() {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, &format!("({},{})", coord.row, coord.col), value);
                y = y.saturating_add(1);
            }
        }
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "KEYS", label);
        for (i, line) in ["arrows move", "space select", "s swap", "c score", "r new", "q quit"]
            .iter()
            .enumerate()
        {
            let ly = y.saturating_add(1 + i as u16);
            if ly >= viewport.height {
                break;
            }
            fb.put_str(panel_x, ly, line, value);
        }
    }

    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        ui: &UiState,
        start_x: u16,
        y: u16,
    ) {
        let style = GlyphStyle {
            fg: Rgb::new(255, 210, 120),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        if session.is_game_over() {
            let text = format!("GAME OVER - final score {}", session.score());
            fb.put_str(start_x, y, &text, style);
            if let Some(msg) = &ui.message {
                fb.put_str(start_x, y + 1, msg, style);
            }
        } else if let Some(msg) = &ui.message {
            fb.put_str(start_x, y, msg, style);
        } else if !session.started() {
            fb.put_str(start_x, y, "press r to start", style);
        }
    }
}

fn color_rgb(color: TileColor) -> Rgb {
    match color {
        TileColor::Purple => Rgb::new(200, 120, 220),
        TileColor::Blue => Rgb::new(80, 120, 220),
        TileColor::Yellow => Rgb::new(240, 220, 80),
        TileColor::Red => Rgb::new(220, 80, 80),
        TileColor::Green => Rgb::new(100, 220, 120),
    }
}
