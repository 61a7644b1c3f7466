//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they
//! can be shared by the simulation, the input mapping and the terminal renderer.
//!
//! # Screen
//!
//! The simulation runs in a fixed logical pixel space:
//!
//! - **Width**: 400 px
//! - **Height**: 600 px
//! - **Origin**: top-left, y grows downward
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.25 | Velocity added to the actor every frame |
//! | `FLAP_STRENGTH` | -6.0 | Velocity set on flap (negative = upward) |
//! | `PIPE_SPEED` | 3.0 | Horizontal obstacle speed in px/frame |
//! | `PIPE_GAP` | 150 | Vertical gap height in px |
//! | `PIPE_FREQUENCY_MS` | 1500 | Minimum wall-clock time between spawns |
//! | `GAP_MARGIN` | 100 | Closest the gap may come to the top/bottom edge |
//! | `ANIMATION_SPEED` | 0.15 | Animation frames advanced per tick |
//! | `TARGET_FPS` | 60 | Frame pacing target |
//!
//! # Examples
//!
//! ```
//! use flappy_types::{Phase, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! assert!(Phase::default().is_active());
//!
//! let mut rect = Rect::new(0.0, 0.0, 34.0, 24.0);
//! rect.set_center(100.0, SCREEN_HEIGHT as f32 / 2.0);
//! assert_eq!(rect.center_y(), 300.0);
//! assert_eq!(SCREEN_WIDTH, 400);
//! ```

pub mod geometry;

pub use geometry::{Point, Rect};

/// Logical screen width in pixels
pub const SCREEN_WIDTH: u32 = 400;

/// Logical screen height in pixels
pub const SCREEN_HEIGHT: u32 = 600;

/// Downward acceleration applied to the actor every frame
pub const GRAVITY: f32 = 0.25;

/// Vertical velocity assigned on flap
pub const FLAP_STRENGTH: f32 = -6.0;

/// Obstacle scroll speed in pixels per frame
pub const PIPE_SPEED: f32 = 3.0;

/// Height of the open gap between an obstacle's upper and lower rect
pub const PIPE_GAP: u32 = 150;

/// Wall-clock spawn interval in milliseconds
pub const PIPE_FREQUENCY_MS: u64 = 1500;

/// Minimum distance between the gap and the top/bottom screen edges
pub const GAP_MARGIN: u32 = 100;

/// Fractional animation frames advanced per update
pub const ANIMATION_SPEED: f32 = 0.15;

/// Horizontal spawn position of the actor's center
pub const ACTOR_START_X: f32 = 100.0;

/// Frame pacing target (enforced by the runner, not the simulation)
pub const TARGET_FPS: u32 = 60;

/// Score text size and top-left position
pub const SCORE_TEXT_SIZE: u32 = 50;
pub const SCORE_TEXT_POS: (f32, f32) = ((SCREEN_WIDTH / 2 - 15) as f32, 50.0);

/// Game over caption size and position
pub const GAME_OVER_TEXT_SIZE: u32 = 70;
pub const GAME_OVER_TEXT_POS: (f32, f32) = (80.0, 200.0);

/// Restart prompt size and position
pub const RESTART_TEXT_SIZE: u32 = 50;
pub const RESTART_TEXT_POS: (f32, f32) = (100.0, 300.0);

/// Initial actor center: fixed column, vertically centered
pub fn actor_start() -> Point {
    Point::new(ACTOR_START_X, (SCREEN_HEIGHT / 2) as f32)
}


/// Discrete logical input events delivered once per frame
///
/// The input collaborator maps device input into these; the simulation never
/// sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Upward impulse (ignored while game over)
    FlapPressed,
    /// Start a new round (ignored while active)
    RestartPressed,
    /// Stop the loop immediately
    Quit,
}

/// The two simulation states
///
/// `Active` is initial. `Active -> GameOver` on any collision,
/// `GameOver -> Active` only on an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Active,
    GameOver,
}

impl Phase {
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }
}
