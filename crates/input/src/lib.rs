//! Terminal input module (simulation-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm`. It maps key events into logical [`crate::types::InputEvent`]s
//! and drains everything the terminal delivered during one frame.

pub mod map;
pub mod poll;

pub use flappy_types as types;

pub use map::{map_event, map_key_event};
pub use poll::{FrameInput, InputPoller, MAX_EVENTS_PER_FRAME};
