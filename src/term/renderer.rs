//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Draws the first frame in full, then diffs against the previous frame and
//! only rewrites changed row runs.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style_state: Option<Style> = None;
        for y in 0..fb.height() {
            let mut x = 0;
            while x < fb.width() {
                let run = self.next_dirty_run(fb, x, y, full);
                let Some((start, len)) = run else {
                    break;
                };

                self.stdout.queue(cursor::MoveTo(start, y))?;
                for dx in 0..len {
                    let cell = fb.get(start + dx, y).unwrap_or_default();
                    if style_state != Some(cell.style) {
                        self.apply_style(cell.style)?;
                        style_state = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                }
                x = start + len;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last = Some(fb.clone());
        Ok(())
    }

    /// Find the next run of cells in row `y` starting at or after `x` that
    /// differ from the previous frame. With `full` set, the whole remaining
    /// row is one run.
    fn next_dirty_run(&self, fb: &FrameBuffer, x: u16, y: u16, full: bool) -> Option<(u16, u16)> {
        let w = fb.width();
        if x >= w {
            return None;
        }
        if full {
            return Some((x, w - x));
        }

        let prev = self.last.as_ref()?;
        let mut start = x;
        while start < w && prev.get(start, y) == fb.get(start, y) {
            start += 1;
        }
        if start >= w {
            return None;
        }

        let mut end = start + 1;
        while end < w && prev.get(end, y) != fb.get(end, y) {
            end += 1;
        }
        Some((start, end - start))
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        // Attribute::Reset clears colors too, so it has to go first.
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
