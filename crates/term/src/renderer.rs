//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame, any frame after [`TerminalRenderer::invalidate`], and any
//! frame whose size changed are written in full. Every other frame only writes
//! the horizontal runs of cells that differ from the previous one.
//!
//! Half-block frames change colors on almost every cell, so the encoder tracks
//! foreground, background and weight separately and emits only what changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Window title set on entry.
pub const WINDOW_TITLE: &str = "Flappy Bird";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame written, kept for diffing.
    shown: Option<FrameBuffer>,
    force_full: bool,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            force_full: true,
            out: Vec::with_capacity(256 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::SetTitle(WINDOW_TITLE))?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call even if `enter` failed halfway.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Make the next draw a full redraw (after a resize, for example).
    pub fn invalidate(&mut self) {
        self.force_full = true;
    }

    /// Draw `fb`, then swap it with the previously shown frame.
    ///
    /// Pass the same `FrameBuffer` every frame; after the call it holds stale
    /// contents that the next render overwrites.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut shown = self
            .shown
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));

        self.out.clear();
        if self.force_full || shown.width() != fb.width() || shown.height() != fb.height() {
            encode_full_into(fb, &mut self.out)?;
            shown.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&shown, fb, &mut self.out)?;
        }
        self.force_full = false;
        self.flush()?;

        std::mem::swap(&mut shown, fb);
        self.shown = Some(shown);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            pen.print(out, fb.get(x, y).unwrap_or_default())?;
        }
    }
    pen.reset(out)
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes are treated as entirely changed.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for run in ChangedRuns::new(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            pen.print(out, next.get(x, run.y).unwrap_or_default())?;
        }
    }
    pen.reset(out)
}

/// Terminal style state as last emitted.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        self.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if style.bold != self.bold {
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            } else {
                out.queue(SetAttribute(Attribute::NormalIntensity))?;
            }
            self.bold = style.bold;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        *self = Self::default();
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Row-major iterator over maximal runs of differing cells.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    whole: bool,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        Self {
            prev,
            next,
            whole: prev.width() != next.width() || prev.height() != next.height(),
            x: 0,
            y: 0,
        }
    }

    fn differs(&self, x: u16, y: u16) -> bool {
        self.prev.get(x, y) != self.next.get(x, y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let (w, h) = (self.next.width(), self.next.height());
        if w == 0 {
            return None;
        }

        while self.y < h {
            if self.whole {
                let run = Run { x: 0, y: self.y, len: w };
                self.y += 1;
                return Some(run);
            }

            while self.x < w && !self.differs(self.x, self.y) {
                self.x += 1;
            }
            if self.x < w {
                let start = self.x;
                while self.x < w && self.differs(self.x, self.y) {
                    self.x += 1;
                }
                return Some(Run {
                    x: start,
                    y: self.y,
                    len: self.x - start,
                });
            }

            self.x = 0;
            self.y += 1;
        }
        None
    }
}
