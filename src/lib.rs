//! TUI Flappy (workspace facade crate).
//!
//! Re-exports the member crates as `tui_flappy::{core,types,assets,input,term}` and
//! holds the binary's runtime configuration and logging setup.

pub mod config;
pub mod logging;

pub use flappy_assets as assets;
pub use flappy_core as core;
pub use flappy_input as input;
pub use flappy_term as term;
pub use flappy_types as types;
