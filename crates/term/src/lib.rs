//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Sprites are composited in logical screen pixels, downscaled into a
//! [`PixelCanvas`], and folded into half-block cells (two pixels per cell) in a
//! [`FrameBuffer`] that is flushed to the terminal with diff-based redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the pixel pipeline pure so views can be unit-tested without a tty
//! - Preserve the 400x600 aspect ratio at any terminal size

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use flappy_assets as assets;
pub use flappy_core as core;
pub use flappy_types as types;

pub use canvas::{Layout, PixelCanvas};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{text_overlays, GameView, TextOverlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
