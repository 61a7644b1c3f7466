//! Framebuffer and style types for terminal rendering.

use flappy_assets::Rgba;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgba> for Rgb {
    fn from(px: Rgba) -> Self {
        Self::new(px.r, px.g, px.b)
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Row-major grid of styled cells, one per terminal character.
///
/// Out-of-range reads return `None` and out-of-range writes are dropped, so
/// callers can draw at clipped positions without bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, reusing the allocation. Contents are unspecified
    /// afterwards; callers fill every frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        (y < self.height).then(|| &self.cells[start..start + w])
    }

    pub fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        if y < self.height {
            Some(&mut self.cells[start..start + w])
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(usize::from(x)).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|r| r.get_mut(usize::from(x))) {
            *slot = cell;
        }
    }

    /// Write `s` left to right from `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        let tail = row.get_mut(usize::from(x)..).unwrap_or_default();
        for (slot, ch) in tail.iter_mut().zip(s.chars()) {
            *slot = style.into_cell(ch);
        }
    }

    /// Row contents as a string (handy for assertions).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|r| r.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
