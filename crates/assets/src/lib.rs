//! Asset provider: decodes the game's sprites once at startup.
//!
//! The simulation never sees pixels. It only needs sprite sizes, which
//! [`Assets::metrics`] folds into a [`WorldMetrics`](flappy_core::WorldMetrics).
//! The renderer samples the decoded [`Sprite`]s directly.
//!
//! Required files (all in one directory):
//!
//! | File | Use |
//! |------|-----|
//! | `bird1.png`, `bird2.png`, `bird3.png` | actor animation frames (same size) |
//! | `pipe.png` | obstacle, drawn at both rects |
//! | `background.png` | stretched to the screen |
//!
//! A missing or undecodable file is fatal; there is no partial fallback.

pub mod error;
pub mod sprite;

pub use flappy_core as core;

pub use error::AssetError;
pub use sprite::{Rgba, Sprite};

use std::path::{Path, PathBuf};

use crate::core::WorldMetrics;

/// Actor animation frames, in playback order.
pub const ACTOR_FRAME_FILES: [&str; 3] = ["bird1.png", "bird2.png", "bird3.png"];
pub const BACKGROUND_FILE: &str = "background.png";
pub const OBSTACLE_FILE: &str = "pipe.png";

/// Every file [`Assets::load`] expects, for operator-facing messages.
pub fn required_files() -> impl Iterator<Item = &'static str> {
    ACTOR_FRAME_FILES
        .iter()
        .copied()
        .chain([BACKGROUND_FILE, OBSTACLE_FILE])
}

/// Decoded sprites shared by the renderer for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Assets {
    actor_frames: Vec<Sprite>,
    obstacle: Sprite,
    background: Sprite,
}

impl Assets {
    /// Load every required sprite from `dir`.
    ///
    /// All missing files are reported together before anything is decoded.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();

        let missing: Vec<PathBuf> = required_files()
            .map(|name| dir.join(name))
            .filter(|path| !path.is_file())
            .collect();
        if !missing.is_empty() {
            return Err(AssetError::Missing { paths: missing });
        }

        let actor_frames = ACTOR_FRAME_FILES
            .iter()
            .map(|name| Sprite::open(dir.join(name)))
            .collect::<Result<Vec<_>, _>>()?;
        let obstacle = Sprite::open(dir.join(OBSTACLE_FILE))?;
        let background = Sprite::open(dir.join(BACKGROUND_FILE))?;

        let assets = Self::from_sprites(actor_frames, obstacle, background)?;
        log::info!(
            "loaded assets from {}: actor {}x{} ({} frames), obstacle {}x{}",
            dir.display(),
            assets.actor_frames[0].width(),
            assets.actor_frames[0].height(),
            assets.actor_frames.len(),
            assets.obstacle.width(),
            assets.obstacle.height(),
        );
        Ok(assets)
    }

    /// Assemble assets from already-decoded sprites.
    ///
    /// Fails if there are no actor frames or the frames differ in size.
    pub fn from_sprites(
        actor_frames: Vec<Sprite>,
        obstacle: Sprite,
        background: Sprite,
    ) -> Result<Self, AssetError> {
        let Some(first) = actor_frames.first() else {
            return Err(AssetError::NoFrames);
        };
        let expected = (first.width(), first.height());
        for (index, frame) in actor_frames.iter().enumerate().skip(1) {
            let found = (frame.width(), frame.height());
            if found != expected {
                return Err(AssetError::FrameSizeMismatch {
                    index,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            actor_frames,
            obstacle,
            background,
        })
    }

    pub fn actor_frames(&self) -> &[Sprite] {
        &self.actor_frames
    }

    /// Frame for an animation index, wrapping out-of-range indices.
    pub fn actor_frame(&self, index: usize) -> &Sprite {
        &self.actor_frames[index % self.actor_frames.len()]
    }

    pub fn obstacle(&self) -> &Sprite {
        &self.obstacle
    }

    pub fn background(&self) -> &Sprite {
        &self.background
    }

    /// Sprite sizes the simulation needs, on the reference screen.
    pub fn metrics(&self) -> WorldMetrics {
        let frame = &self.actor_frames[0];
        WorldMetrics::new(
            frame.width() as f32,
            frame.height() as f32,
            self.actor_frames.len(),
            self.obstacle.width() as f32,
            self.obstacle.height() as f32,
        )
    }
}
