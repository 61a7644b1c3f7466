//! Pixel canvas and its placement in the terminal.
//!
//! A terminal cell is roughly twice as tall as it is wide, so each cell holds
//! two vertically stacked pixels drawn with an upper half block: the top pixel
//! is the foreground color and the bottom pixel the background color.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Upper half block.
pub const HALF_BLOCK: char = '▀';

/// Where a world of `world_w x world_h` pixels lands in a terminal viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Canvas pixels per world pixel.
    pub scale: f32,
    pub canvas_w: u16,
    /// Always even (two pixels per cell row).
    pub canvas_h: u16,
    pub origin_col: u16,
    pub origin_row: u16,
}

impl Layout {
    /// Largest aspect-preserving fit, centered in the viewport.
    pub fn fit(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        let px_w = cols as f32;
        let px_h = rows as f32 * 2.0;
        let scale = if world_w > 0.0 && world_h > 0.0 {
            (px_w / world_w).min(px_h / world_h)
        } else {
            0.0
        };

        let canvas_w = ((world_w * scale).floor() as u16).min(cols);
        let canvas_h = ((world_h * scale).floor() as u16).min(rows.saturating_mul(2)) & !1;

        Self {
            scale,
            canvas_w,
            canvas_h,
            origin_col: cols.saturating_sub(canvas_w) / 2,
            origin_row: rows.saturating_sub(canvas_h / 2) / 2,
        }
    }

    /// Number of terminal rows the canvas covers.
    pub fn rows(&self) -> u16 {
        self.canvas_h / 2
    }

    pub fn is_empty(&self) -> bool {
        self.canvas_w == 0 || self.canvas_h == 0
    }

    /// Terminal cell containing a world-space point, if it is on the canvas.
    pub fn world_to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let px = x * self.scale;
        let py = y * self.scale;
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let (px, py) = (px as u16, py as u16);
        if px >= self.canvas_w || py >= self.canvas_h {
            return None;
        }
        Some((self.origin_col + px, self.origin_row + py / 2))
    }

    /// World-space coordinates of a canvas pixel's center.
    pub fn pixel_to_world(&self, px: u16, py: u16) -> (f32, f32) {
        (
            (px as f32 + 0.5) / self.scale,
            (py as f32 + 0.5) / self.scale,
        )
    }
}

/// RGB pixel buffer at canvas resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    px: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.px
            .resize(width as usize * height as usize, Rgb::default());
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set(&mut self, x: u16, y: u16, color: Rgb) {
        if x < self.width && y < self.height {
            self.px[y as usize * self.width as usize + x as usize] = color;
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.px[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Fold pixel pairs into half-block cells starting at `(col, row)`.
    pub fn blit_half_blocks(&self, fb: &mut FrameBuffer, col: u16, row: u16) {
        let w = usize::from(self.width);
        for (cy, pair) in self.px.chunks_exact(w.max(1) * 2).enumerate() {
            let Some(y) = row.checked_add(cy as u16) else {
                break;
            };
            let Some(cells) = fb.row_mut(y) else {
                break;
            };
            let (top, bottom) = pair.split_at(w);
            let dst = cells.get_mut(usize::from(col)..).unwrap_or_default();
            for ((cell, &fg), &bg) in dst.iter_mut().zip(top).zip(bottom) {
                *cell = CellStyle { fg, bg, bold: false }.into_cell(HALF_BLOCK);
            }
        }
    }
}
