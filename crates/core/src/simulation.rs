//! Simulation module - owns the actor and obstacles and runs one frame at a time
//!
//! Per-frame order while active:
//!
//! 1. spawn check (wall-clock gated)
//! 2. actor update
//! 3. obstacle update, then drop the ones that left the screen
//! 4. collision check
//! 5. score check
//!
//! While game over nothing moves; only a restart event changes state.

use crate::rng::{GapSource, SimpleRng};
use crate::snapshot::{ActorSnapshot, FrameSnapshot, ObstacleSnapshot};
use crate::types::{InputEvent, Phase, PIPE_FREQUENCY_MS};
use crate::{Actor, Obstacle, WorldMetrics};

/// Result of one [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TickOutcome {
    /// Frame processed; render the current snapshot.
    Continue,
    /// A quit event arrived. Nothing after it in the frame was processed.
    Quit,
}

#[derive(Debug, Clone)]
pub struct Simulation<R: GapSource = SimpleRng> {
    metrics: WorldMetrics,
    actor: Actor,
    /// Spawn order, which is also left-to-right order on screen.
    obstacles: Vec<Obstacle>,
    score: u32,
    phase: Phase,
    last_spawn_ms: u64,
    rng: R,
}

impl<R: GapSource> Simulation<R> {
    /// Create a running simulation.
    ///
    /// `now_ms` seeds the spawn timer, so the first obstacle appears one spawn
    /// interval after construction.
    pub fn new(metrics: WorldMetrics, rng: R, now_ms: u64) -> Self {
        Self {
            actor: Actor::new(&metrics),
            metrics,
            obstacles: Vec::new(),
            score: 0,
            phase: Phase::Active,
            last_spawn_ms: now_ms,
            rng,
        }
    }

    pub fn metrics(&self) -> &WorldMetrics {
        &self.metrics
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Append an obstacle at the right end of the collection.
    ///
    /// Callers are responsible for keeping left-to-right order.
    pub fn push_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    /// Process one frame.
    ///
    /// Events are handled in order: a flap only while active, a restart only
    /// while game over, and a quit returns immediately without touching the
    /// rest of the frame. Events that do not apply to the current phase are
    /// ignored.
    pub fn tick(&mut self, events: &[InputEvent], now_ms: u64) -> TickOutcome {
        for event in events {
            match event {
                InputEvent::Quit => return TickOutcome::Quit,
                InputEvent::FlapPressed if self.is_active() => self.actor.flap(),
                InputEvent::RestartPressed if !self.is_active() => self.reset(),
                _ => {}
            }
        }

        if self.is_active() {
            self.step(now_ms);
        }
        TickOutcome::Continue
    }

    fn step(&mut self, now_ms: u64) {
        self.spawn_check(now_ms);
        self.actor.update();
        self.advance_obstacles();
        self.check_collision();
        self.update_score();
    }

    /// Spawn a new obstacle when more than the spawn interval has elapsed
    /// since the previous one. Returns true if one was spawned.
    pub fn spawn_check(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_spawn_ms) <= PIPE_FREQUENCY_MS {
            return false;
        }
        let obstacle = Obstacle::new(&self.metrics, &mut self.rng);
        log::debug!(
            "spawned obstacle: gap_center_y={} at {}ms",
            obstacle.gap_center_y(),
            now_ms
        );
        self.obstacles.push(obstacle);
        self.last_spawn_ms = now_ms;
        true
    }

    /// Scroll every obstacle, keeping only those still on screen.
    ///
    /// Survivors are collected into a fresh sequence that replaces the old one
    /// (order preserved; the allocation is reused).
    fn advance_obstacles(&mut self) {
        let previous = std::mem::take(&mut self.obstacles);
        let before = previous.len();
        self.obstacles = previous
            .into_iter()
            .filter_map(|mut obstacle| {
                obstacle.update();
                (!obstacle.offscreen()).then_some(obstacle)
            })
            .collect();

        let pruned = before - self.obstacles.len();
        if pruned > 0 {
            log::debug!("pruned {} offscreen obstacle(s)", pruned);
        }
    }

    /// End the round if the actor touches an obstacle or leaves the screen
    /// vertically. Game over is sticky until [`Simulation::reset`].
    pub fn check_collision(&mut self) {
        let rect = self.actor.rect();
        let hit_obstacle = self.obstacles.iter().any(|o| o.intersects(&rect));
        let out_of_bounds = rect.top() <= 0.0 || rect.bottom() >= self.metrics.screen_height;

        if (hit_obstacle || out_of_bounds) && self.is_active() {
            self.phase = Phase::GameOver;
            log::info!(
                "game over: score={} ({})",
                self.score,
                if hit_obstacle { "obstacle" } else { "bounds" }
            );
        }
    }

    /// Award one point for each obstacle the actor has fully cleared.
    ///
    /// Each obstacle scores at most once. Returns the points gained.
    pub fn update_score(&mut self) -> u32 {
        let actor_left = self.actor.rect().left();
        let mut gained = 0;
        for obstacle in self.obstacles.iter_mut() {
            if !obstacle.passed() && actor_left > obstacle.upper().right() {
                obstacle.mark_passed();
                gained += 1;
            }
        }
        self.score += gained;
        gained
    }

    /// Start a new round: active, actor at the spawn point, no obstacles, zero
    /// score. The spawn timer keeps its value.
    pub fn reset(&mut self) {
        self.phase = Phase::Active;
        self.actor.respawn();
        self.obstacles.clear();
        self.score = 0;
        log::info!("round restarted");
    }

    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        out.actor = ActorSnapshot {
            frame: self.actor.frame(),
            rect: self.actor.rect(),
        };
        out.obstacles.clear();
        out.obstacles
            .extend(self.obstacles.iter().map(|o| ObstacleSnapshot {
                upper: o.upper(),
                lower: o.lower(),
                passed: o.passed(),
            }));
        out.score = self.score;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut s = FrameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
