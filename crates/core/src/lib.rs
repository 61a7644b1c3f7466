//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole per-frame simulation: physics integration,
//! obstacle spawning and recycling, collision detection and scoring.
//! It has **zero dependencies** on the terminal, input devices or asset
//! decoding, making it:
//!
//! - **Deterministic**: Same seed and clock values produce identical runs
//! - **Testable**: Every rule can be exercised without a display
//! - **Portable**: Any front end that can draw sprites can drive it
//!
//! # Module Structure
//!
//! - [`actor`]: The falling sprite (gravity, flap impulse, animation cursor)
//! - [`obstacle`]: Upper/lower barrier pair around a randomized gap
//! - [`simulation`]: Update order, spawn gating, collision, scoring, reset
//! - [`rng`]: Seeded LCG and the [`GapSource`] seam used for gap placement
//! - [`snapshot`]: Reusable render state handed to the front end
//!
//! # Example
//!
//! ```
//! use flappy_core::{Simulation, SimpleRng, TickOutcome, WorldMetrics};
//! use flappy_types::InputEvent;
//!
//! let metrics = WorldMetrics::new(34.0, 24.0, 3, 52.0, 400.0);
//! let mut sim = Simulation::new(metrics, SimpleRng::new(7), 0);
//!
//! // One frame with a flap.
//! let outcome = sim.tick(&[InputEvent::FlapPressed], 16);
//! assert_eq!(outcome, TickOutcome::Continue);
//! assert!(sim.actor().velocity() < 0.0);
//!
//! // Quit short-circuits the frame.
//! assert_eq!(sim.tick(&[InputEvent::Quit], 32), TickOutcome::Quit);
//! ```
//!
//! # Timing
//!
//! Physics advances one fixed step per [`Simulation::tick`] call; the caller
//! paces frames (60 FPS target). Obstacle spawning is gated by the
//! millisecond clock value passed to `tick`, so the spawn rate does not
//! depend on the frame rate.

pub mod actor;
pub mod metrics;
pub mod obstacle;
pub mod rng;
pub mod simulation;
pub mod snapshot;

pub use flappy_types as types;

pub use actor::Actor;
pub use metrics::WorldMetrics;
pub use obstacle::Obstacle;
pub use rng::{FixedGap, GapSource, SimpleRng};
pub use simulation::{Simulation, TickOutcome};
pub use snapshot::{ActorSnapshot, FrameSnapshot, ObstacleSnapshot};
