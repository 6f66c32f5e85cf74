//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Classic piece colors.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

/// Renders the board, active piece, next-piece preview and HUD.
pub struct GameView {
    /// Board cell width in terminal columns (2x1 compensates for glyph
    /// aspect ratio).
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const PLAY_BG: Rgb = Rgb::new(26, 26, 26);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame from a snapshot.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let empty = Style::new(Rgb::new(70, 70, 78), PLAY_BG).dim();

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells and grid dots.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_cell(
                        &mut fb,
                        start_x,
                        start_y,
                        x as i8,
                        y as i8,
                        '█',
                        Style::new(kind_color(*kind), PLAY_BG).bold(),
                    ),
                    None => self.draw_cell(
                        &mut fb,
                        start_x,
                        start_y,
                        x as i8,
                        y as i8,
                        '·',
                        empty,
                    ),
                }
            }
        }

        // Active piece. Rows above the board top are not drawn.
        if let Some(active) = &snap.active {
            let style = Style::new(kind_color(active.kind), PLAY_BG).bold();
            for (dx, dy) in active.shape.iter_filled() {
                let x = active.x + dx;
                let y = active.y + dy;
                if y >= 0 {
                    self.draw_cell(&mut fb, start_x, start_y, x, y, '█', style);
                }
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        if !snap.started {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER TO START");
        } else if snap.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER - R TO RESTART");
        } else if snap.paused {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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
        cell_x: i8,
        cell_y: i8,
        ch: char,
        style: Style,
    ) {
        if cell_x < 0 || cell_x >= BOARD_WIDTH as i8 || cell_y < 0 || cell_y >= BOARD_HEIGHT as i8 {
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
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, val) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &val.to_string(), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = snap.next {
            let shape = crate::core::spawn_shape(kind);
            let style = Style::new(kind_color(kind), Rgb::new(0, 0, 0)).bold();
            for (dx, dy) in shape.iter_filled() {
                let px = panel_x + (dx as u16) * self.cell_w;
                let py = y + dy as u16;
                fb.fill_rect(px, py, self.cell_w, 1, '█', style);
            }
        } else {
            fb.put_str(panel_x, y, "-", value);
        }
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
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
