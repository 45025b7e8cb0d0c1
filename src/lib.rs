//! Snake with power-ups and particle effects.
//!
//! - `compute`: the game state machine, as pure functions over `GameState`
//! - `effects`: particles and floating text on their own clock
//! - `scheduler`: the animation and game clocks
//! - `session`: owns one game and its effects, accepts player commands
//! - `view`: read-only snapshot handed to the renderer

pub mod compute;
pub mod config;
pub mod effects;
pub mod entities;
pub mod placement;
pub mod scheduler;
pub mod session;
pub mod view;

pub use config::GameConfig;
pub use session::{Command, GameSession};
pub use scheduler::TickScheduler;
