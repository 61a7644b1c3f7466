//! GameView: maps a `FrameSnapshot` plus decoded sprites into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Draw order follows the classic blit order: background, both rects of every
//! obstacle, the actor's current frame, then text.

use std::fmt::Write as _;

use arrayvec::{ArrayString, ArrayVec};

use crate::assets::{Assets, Sprite};
use crate::canvas::{Layout, PixelCanvas};
use crate::core::FrameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Rect, GAME_OVER_TEXT_POS, GAME_OVER_TEXT_SIZE, RESTART_TEXT_POS, RESTART_TEXT_SIZE,
    SCORE_TEXT_POS, SCORE_TEXT_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
};

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

/// A string drawn at a fixed world position.
///
/// `size` is the nominal font size; the terminal cannot scale glyphs, so sizes
/// at or above the caption size are drawn bold instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverlay {
    pub text: ArrayString<32>,
    pub size: u32,
    pub x: i32,
    pub y: i32,
}

impl TextOverlay {
    fn new(text: &str, size: u32, pos: (f32, f32)) -> Self {
        let mut s = ArrayString::new();
        for ch in text.chars() {
            if s.try_push(ch).is_err() {
                break;
            }
        }
        Self {
            text: s,
            size,
            x: pos.0 as i32,
            y: pos.1 as i32,
        }
    }
}

/// Text for one frame: the live score, plus the caption and restart prompt
/// while the round is over.
pub fn text_overlays(snap: &FrameSnapshot) -> ArrayVec<TextOverlay, 3> {
    let mut out = ArrayVec::new();

    let mut score = ArrayString::<32>::new();
    let _ = write!(score, "{}", snap.score);
    out.push(TextOverlay::new(&score, SCORE_TEXT_SIZE, SCORE_TEXT_POS));

    if snap.game_over() {
        out.push(TextOverlay::new(
            "Game Over",
            GAME_OVER_TEXT_SIZE,
            GAME_OVER_TEXT_POS,
        ));
        out.push(TextOverlay::new(
            "Press R to restart",
            RESTART_TEXT_SIZE,
            RESTART_TEXT_POS,
        ));
    }
    out
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    world_w: f32,
    world_h: f32,
    /// Color outside the canvas.
    letterbox: Rgb,
    text_fg: Rgb,
    text_bg: Rgb,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            world_w: SCREEN_WIDTH as f32,
            world_h: SCREEN_HEIGHT as f32,
            letterbox: Rgb::new(0, 0, 0),
            text_fg: Rgb::new(255, 255, 255),
            text_bg: Rgb::new(30, 30, 30),
        }
    }
}

impl GameView {
    pub fn layout(&self, viewport: Viewport) -> Layout {
        Layout::fit(viewport.width, viewport.height, self.world_w, self.world_h)
    }

    /// Render the current frame into an existing framebuffer and canvas.
    ///
    /// Callers can reuse both buffers across frames; they are only resized
    /// when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &FrameSnapshot,
        assets: &Assets,
        viewport: Viewport,
        canvas: &mut PixelCanvas,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        let blank = CellStyle {
            fg: self.letterbox,
            bg: self.letterbox,
            bold: false,
        };
        fb.fill(blank.into_cell(' '));

        let layout = self.layout(viewport);
        if layout.is_empty() {
            return;
        }

        canvas.resize(layout.canvas_w, layout.canvas_h);
        self.compose(snap, assets, &layout, canvas);
        canvas.blit_half_blocks(fb, layout.origin_col, layout.origin_row);

        for overlay in text_overlays(snap) {
            self.draw_text(fb, &layout, &overlay);
        }
    }

    /// Convenience helper that allocates new buffers.
    pub fn render(&self, snap: &FrameSnapshot, assets: &Assets, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let mut canvas = PixelCanvas::default();
        self.render_into(snap, assets, viewport, &mut canvas, &mut fb);
        fb
    }

    fn compose(
        &self,
        snap: &FrameSnapshot,
        assets: &Assets,
        layout: &Layout,
        canvas: &mut PixelCanvas,
    ) {
        let actor_sprite = assets.actor_frame(snap.actor.frame);
        let screen = Rect::new(0.0, 0.0, self.world_w, self.world_h);

        for py in 0..canvas.height() {
            for px in 0..canvas.width() {
                let (wx, wy) = layout.pixel_to_world(px, py);

                let mut color: Rgb = sample_in(assets.background(), &screen, wx, wy)
                    .unwrap_or(self.letterbox);

                for obstacle in &snap.obstacles {
                    for rect in [&obstacle.upper, &obstacle.lower] {
                        if let Some(c) = sample_opaque(assets.obstacle(), rect, wx, wy) {
                            color = c;
                        }
                    }
                }

                if let Some(c) = sample_opaque(actor_sprite, &snap.actor.rect, wx, wy) {
                    color = c;
                }

                canvas.set(px, py, color);
            }
        }
    }

    fn draw_text(&self, fb: &mut FrameBuffer, layout: &Layout, overlay: &TextOverlay) {
        let Some((col, row)) = layout.world_to_cell(overlay.x as f32, overlay.y as f32) else {
            return;
        };
        let style = CellStyle {
            fg: self.text_fg,
            bg: self.text_bg,
            bold: overlay.size >= GAME_OVER_TEXT_SIZE,
        };
        fb.put_str(col, row, &overlay.text, style);
    }
}

/// Sprite color at a world point if the point falls inside `rect`.
fn sample_in(sprite: &Sprite, rect: &Rect, wx: f32, wy: f32) -> Option<Rgb> {
    if !rect.contains_point(wx, wy) {
        return None;
    }
    let u = (wx - rect.x) / rect.w;
    let v = (wy - rect.y) / rect.h;
    Some(sprite.sample(u, v).into())
}

/// Like [`sample_in`], but transparent texels let the layer below through.
fn sample_opaque(sprite: &Sprite, rect: &Rect, wx: f32, wy: f32) -> Option<Rgb> {
    if !rect.contains_point(wx, wy) {
        return None;
    }
    let texel = sprite.sample((wx - rect.x) / rect.w, (wy - rect.y) / rect.h);
    texel.is_opaque().then(|| texel.into())
}
