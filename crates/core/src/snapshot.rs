use crate::types::{Phase, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActorSnapshot {
    /// Index into the actor's animation frames.
    pub frame: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub upper: Rect,
    pub lower: Rect,
    pub passed: bool,
}

/// Everything the render pass needs for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameSnapshot {
    pub actor: ActorSnapshot,
    /// Left-to-right screen order.
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub phase: Phase,
}

impl FrameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
