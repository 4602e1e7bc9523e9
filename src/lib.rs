//! Flappy Paimon - a themed Flappy Bird arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, scoring state machine)
//! - `config`: Start-up constants the simulation depends on
//! - `settings`: Player preferences (theme selection, volumes)
//! - `theme`: Skin catalogs and the opaque handles the renderer resolves
//! - `highscores`: In-memory session leaderboard
//!
//! Rendering, audio playback and window plumbing are not part of this crate.
//! The embedding layer drives the sim with [`sim::tick`] and
//! [`sim::spawn_obstacle`], reads entity state back each tick, and drains
//! [`sim::GameEvent`]s for overlay/sound cues.

pub mod config;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod theme;

pub use config::Config;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration defaults
pub mod consts {
    /// Simulation tick rate the tick-count constants below assume (Hz)
    pub const TICK_HZ: u32 = 60;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Bird defaults (Paimon skin dimensions)
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 35.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;

    /// Gravity increment per tick (constant, no delta-time scaling)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity a flap resets the bird to
    pub const JUMP_VELOCITY: f32 = -8.0;
    /// Horizontal pipe speed per tick (pipes scroll left)
    pub const SCROLL_VELOCITY: f32 = -2.0;

    /// Spawn cadence (1.8 s)
    pub const SPAWN_INTERVAL_TICKS: u32 = 108;
    /// Vertical gap between a pipe pair, as a fraction of field height
    pub const OPENING_FRACTION: f32 = 1.0 / 3.0;
    /// Forgiveness margin applied to every box side before the overlap test
    pub const COLLISION_INSET: f32 = 5.0;
    /// Delay before the game-over overlay gives way to the menu (2 s)
    pub const GAME_OVER_DELAY_TICKS: u32 = 120;
}
