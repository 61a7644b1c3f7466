//! Pixel dimensions the simulation needs from its collaborators.
//!
//! The asset provider knows sprite sizes and the display knows the screen;
//! both are folded into one value at startup and handed to the simulation.

use crate::types::{PIPE_GAP, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldMetrics {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Shared size of every actor animation frame.
    pub actor_width: f32,
    pub actor_height: f32,
    /// Length of the cyclic animation sequence (at least 1).
    pub actor_frames: usize,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Vertical gap between an obstacle's rects, in whole pixels.
    pub gap: u32,
}

impl WorldMetrics {
    /// Metrics for the reference 400x600 screen and 150px gap.
    pub fn new(
        actor_width: f32,
        actor_height: f32,
        actor_frames: usize,
        obstacle_width: f32,
        obstacle_height: f32,
    ) -> Self {
        Self {
            screen_width: SCREEN_WIDTH as f32,
            screen_height: SCREEN_HEIGHT as f32,
            actor_width,
            actor_height,
            actor_frames: actor_frames.max(1),
            obstacle_width,
            obstacle_height,
            gap: PIPE_GAP,
        }
    }

    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reference_screen() {
        let m = WorldMetrics::new(34.0, 24.0, 3, 52.0, 400.0);
        assert_eq!(m.screen_width, 400.0);
        assert_eq!(m.screen_height, 600.0);
        assert_eq!(m.gap, 150);
    }

    #[test]
    fn frame_count_is_at_least_one() {
        let m = WorldMetrics::new(34.0, 24.0, 0, 52.0, 400.0);
        assert_eq!(m.actor_frames, 1);
    }
}
