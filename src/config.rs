//! Start-up configuration for the simulation
//!
//! Every constant the core depends on is collected here and fixed once a
//! round begins. The embedding layer may build a custom `Config` (or ship
//! one as JSON) but must not change it mid-round.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::*;

/// Simulation constants, settable at start-up only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play field width in world units
    pub field_width: f32,
    /// Play field height in world units
    pub field_height: f32,
    /// Bird bounding-box width
    pub bird_width: f32,
    /// Bird bounding-box height
    pub bird_height: f32,
    /// Pipe bounding-box width
    pub pipe_width: f32,
    /// Pipe bounding-box height
    pub pipe_height: f32,
    /// Downward velocity increment applied every tick
    pub gravity: f32,
    /// Vertical velocity a flap resets the bird to (negative = up)
    pub jump_velocity: f32,
    /// Horizontal pipe velocity per tick (negative = leftward scroll)
    pub scroll_velocity: f32,
    /// Ticks between spawner invocations (owned by the external cadence)
    pub spawn_interval_ticks: u32,
    /// Pipe-pair gap as a fraction of field height
    pub opening_fraction: f32,
    /// Forgiveness margin shrinking every box side before the overlap test
    pub collision_inset: f32,
    /// Ticks the game-over overlay stays up before auto-returning to menu
    pub game_over_delay_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_velocity: SCROLL_VELOCITY,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            opening_fraction: OPENING_FRACTION,
            collision_inset: COLLISION_INSET,
            game_over_delay_ticks: GAME_OVER_DELAY_TICKS,
        }
    }
}

impl Config {
    /// The vertical gap left open between a pipe pair.
    pub fn opening_space(&self) -> f32 {
        self.field_height * self.opening_fraction
    }

    /// Fail fast on a configuration that would produce undefined simulation
    /// behavior. Call once at start-up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
        ];
        for (name, value) in dims {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if !(self.opening_fraction > 0.0 && self.opening_fraction < 1.0) {
            return Err(ConfigError::BadOpeningFraction {
                value: self.opening_fraction,
            });
        }
        if self.collision_inset < 0.0 {
            return Err(ConfigError::NegativeInset {
                value: self.collision_inset,
            });
        }
        if !(self.gravity > 0.0) {
            return Err(ConfigError::WrongSign {
                name: "gravity",
                value: self.gravity,
                expected: "positive",
            });
        }
        if !(self.jump_velocity < 0.0) {
            return Err(ConfigError::WrongSign {
                name: "jump_velocity",
                value: self.jump_velocity,
                expected: "negative",
            });
        }
        if !(self.scroll_velocity < 0.0) {
            return Err(ConfigError::WrongSign {
                name: "scroll_velocity",
                value: self.scroll_velocity,
                expected: "negative",
            });
        }
        Ok(())
    }

    /// Parse a config shipped by the embedding layer as JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for the embedding layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A malformed start-up configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension that must be strictly positive was zero, negative or NaN.
    NonPositiveDimension { name: &'static str, value: f32 },
    /// The spawn cadence must fire at least every tick.
    ZeroSpawnInterval,
    /// The opening fraction must lie in (0, 1).
    BadOpeningFraction { value: f32 },
    /// The collision inset cannot be negative.
    NegativeInset { value: f32 },
    /// A signed constant pointed the wrong way.
    WrongSign {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            ConfigError::ZeroSpawnInterval => {
                write!(f, "spawn_interval_ticks must be at least 1")
            }
            ConfigError::BadOpeningFraction { value } => {
                write!(f, "opening_fraction must be in (0, 1), got {value}")
            }
            ConfigError::NegativeInset { value } => {
                write!(f, "collision_inset cannot be negative, got {value}")
            }
            ConfigError::WrongSign {
                name,
                value,
                expected,
            } => {
                write!(f, "{name} must be {expected}, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
