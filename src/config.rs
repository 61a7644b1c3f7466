//! Runtime configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `FLAPPY_ASSETS_DIR` | `assets` | directory holding the sprite files |
//! | `FLAPPY_SEED` | clock-derived | seed for gap placement |
//! | `FLAPPY_FPS` | `60` | frame rate, clamped to `1..=240` |
//! | `FLAPPY_LOG_PATH` | unset | log file; logging is off when unset |

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TARGET_FPS;

pub const ASSETS_DIR_VAR: &str = "FLAPPY_ASSETS_DIR";
pub const SEED_VAR: &str = "FLAPPY_SEED";
pub const FPS_VAR: &str = "FLAPPY_FPS";
pub const LOG_PATH_VAR: &str = "FLAPPY_LOG_PATH";

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub assets_dir: PathBuf,
    pub seed: u32,
    pub fps: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            seed: clock_seed(),
            fps: TARGET_FPS,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let assets_dir = get(ASSETS_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("assets"));

        let seed = get(SEED_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let fps = get(FPS_VAR)
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(TARGET_FPS)
            .clamp(MIN_FPS, MAX_FPS);

        let log_path = get(LOG_PATH_VAR).map(PathBuf::from);

        Self {
            assets_dir,
            seed,
            fps,
            log_path,
        }
    }

    /// Wall-clock budget for one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(MIN_FPS)))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
