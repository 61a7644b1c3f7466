//! Actor module - the player-controlled falling sprite
//!
//! The actor's bounding rect is always derived from its center `position` and
//! the fixed frame size, so the rect center and the position can never drift
//! apart.

use crate::types::{actor_start, Point, Rect, ANIMATION_SPEED, FLAP_STRENGTH, GRAVITY};
use crate::WorldMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    position: Point,
    velocity: f32,
    /// Fractional index into the animation sequence.
    cursor: f32,
    frame: usize,
    frame_count: usize,
    width: f32,
    height: f32,
}

impl Actor {
    /// Create an actor at the spawn point with zero velocity.
    pub fn new(metrics: &WorldMetrics) -> Self {
        Self {
            position: actor_start(),
            velocity: 0.0,
            cursor: 0.0,
            frame: 0,
            frame_count: metrics.actor_frames.max(1),
            width: metrics.actor_width,
            height: metrics.actor_height,
        }
    }

    /// Upward impulse. Overrides whatever velocity the actor had.
    pub fn flap(&mut self) {
        self.velocity = FLAP_STRENGTH;
    }

    /// Advance one frame: gravity, vertical motion, animation.
    pub fn update(&mut self) {
        // No terminal velocity.
        self.velocity += GRAVITY;
        self.position.y += self.velocity;

        self.cursor += ANIMATION_SPEED;
        if self.cursor >= self.frame_count as f32 {
            self.cursor = 0.0;
        }
        self.frame = self.cursor as usize;
    }

    /// Move back to the spawn point and drop any vertical motion.
    ///
    /// The animation cursor keeps running across restarts.
    pub fn respawn(&mut self) {
        self.position = actor_start();
        self.velocity = 0.0;
    }

    /// Move the actor's center.
    pub fn place(&mut self, center: Point) {
        self.position = center;
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Index of the animation frame to draw.
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, self.width, self.height)
    }
}
