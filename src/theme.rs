//! Skin catalogs and opaque asset handles
//!
//! The core never touches image or audio data. Entities carry a
//! [`SkinHandle`] identifying the selected asset, and the renderer maps the
//! handle to whatever it loaded. Re-skinning pipes that are already on
//! screen is the renderer's job: it re-resolves handles against the current
//! [`crate::Settings`] each frame instead of the core mutating pipe
//! identity.

use serde::{Deserialize, Serialize};

/// Which catalog a handle points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Background,
    Bird,
    PipeTop,
    PipeBottom,
    MusicTrack,
    FlapSound,
}

/// Opaque identifier the renderer/audio layer maps to a loaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkinHandle {
    pub kind: AssetKind,
    pub index: u16,
}

impl SkinHandle {
    pub fn new(kind: AssetKind, index: u16) -> Self {
        Self { kind, index }
    }
}

/// Background themes, by display name.
pub const BACKGROUNDS: [&str; 7] = ["Day", "Night", "Star", "Space", "Village", "Sky", "Moon"];

/// A selectable bird skin with its display dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSkin {
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
}

/// Bird skins. The Paimon sprite is slightly taller than the classic bird.
pub const BIRDS: [BirdSkin; 2] = [
    BirdSkin {
        name: "Paimon",
        width: 34.0,
        height: 35.0,
    },
    BirdSkin {
        name: "Bird",
        width: 34.0,
        height: 24.0,
    },
];

/// Pipe color sets, by display name. Each set has a top and a bottom sprite.
pub const PIPE_SETS: [&str; 2] = ["Green", "Blue"];

/// Background music tracks, by display name.
pub const MUSIC_TRACKS: [&str; 3] = ["Music 1", "Music 2", "Music 3"];

/// Flap sound effects, by display name.
pub const FLAP_SOUNDS: [&str; 2] = ["Sound 1", "Sound 2"];
