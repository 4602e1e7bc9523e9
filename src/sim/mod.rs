//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence only (constants are per-tick increments)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies; side effects the
//!   embedding layer should perform are queued as [`GameEvent`]s

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{bird_pipe_collision, inset_overlap};
pub use spawn::spawn_obstacle;
pub use state::{Bird, GameEvent, GamePhase, GameState, Pipe, PipeKind};
pub use tick::{TickInput, tick};
