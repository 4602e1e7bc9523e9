//! Player preferences
//!
//! The original build of this game kept the current skin indices and volume
//! levels in ambient globals mutated by the settings panel. Here they are
//! one explicit struct the embedding layer owns and updates through setters;
//! the core and the renderer only ever read from it.

use serde::{Deserialize, Serialize};

use crate::theme::{
    AssetKind, BirdSkin, SkinHandle, BACKGROUNDS, BIRDS, FLAP_SOUNDS, MUSIC_TRACKS, PIPE_SETS,
};

/// Theme selections and audio preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Index into [`BACKGROUNDS`]
    pub background: usize,
    /// Index into [`BIRDS`]
    pub bird: usize,
    /// Index into [`PIPE_SETS`]
    pub pipe_set: usize,
    /// Index into [`MUSIC_TRACKS`]
    pub music_track: usize,
    /// Index into [`FLAP_SOUNDS`]
    pub flap_sound: usize,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Flap sound volume (0.0 - 1.0)
    pub flap_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: 0,
            bird: 0,
            pipe_set: 0,
            music_track: 0,
            flap_sound: 0,
            music_volume: 1.0,
            flap_volume: 0.5,
        }
    }
}

impl Settings {
    /// Select a background theme. Out-of-range indices are ignored.
    pub fn select_background(&mut self, index: usize) {
        if index < BACKGROUNDS.len() {
            self.background = index;
        } else {
            log::warn!("ignoring unknown background index {index}");
        }
    }

    /// Select a bird skin. Out-of-range indices are ignored.
    pub fn select_bird(&mut self, index: usize) {
        if index < BIRDS.len() {
            self.bird = index;
        } else {
            log::warn!("ignoring unknown bird index {index}");
        }
    }

    /// Select a pipe color set. Out-of-range indices are ignored.
    pub fn select_pipe_set(&mut self, index: usize) {
        if index < PIPE_SETS.len() {
            self.pipe_set = index;
        } else {
            log::warn!("ignoring unknown pipe set index {index}");
        }
    }

    /// Select a background music track. Out-of-range indices are ignored.
    pub fn select_music_track(&mut self, index: usize) {
        if index < MUSIC_TRACKS.len() {
            self.music_track = index;
        } else {
            log::warn!("ignoring unknown music track index {index}");
        }
    }

    /// Select a flap sound. Out-of-range indices are ignored.
    pub fn select_flap_sound(&mut self, index: usize) {
        if index < FLAP_SOUNDS.len() {
            self.flap_sound = index;
        } else {
            log::warn!("ignoring unknown flap sound index {index}");
        }
    }

    /// Set the music volume, clamped to 0.0 - 1.0.
    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }

    /// Set the flap sound volume, clamped to 0.0 - 1.0.
    pub fn set_flap_volume(&mut self, volume: f32) {
        self.flap_volume = volume.clamp(0.0, 1.0);
    }

    /// Handle for the selected background.
    pub fn background_skin(&self) -> SkinHandle {
        SkinHandle::new(AssetKind::Background, self.background as u16)
    }

    /// Handle for the selected bird skin.
    pub fn bird_skin(&self) -> SkinHandle {
        SkinHandle::new(AssetKind::Bird, self.bird as u16)
    }

    /// The selected bird skin's display dimensions.
    pub fn bird_dimensions(&self) -> BirdSkin {
        BIRDS[self.bird]
    }

    /// Handles for the selected pipe set, as (top, bottom).
    pub fn pipe_skins(&self) -> (SkinHandle, SkinHandle) {
        (
            SkinHandle::new(AssetKind::PipeTop, self.pipe_set as u16),
            SkinHandle::new(AssetKind::PipeBottom, self.pipe_set as u16),
        )
    }

    /// Handle for the selected music track.
    pub fn music_track(&self) -> SkinHandle {
        SkinHandle::new(AssetKind::MusicTrack, self.music_track as u16)
    }

    /// Handle for the selected flap sound.
    pub fn flap_sound(&self) -> SkinHandle {
        SkinHandle::new(AssetKind::FlapSound, self.flap_sound as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_is_clamped() {
        let mut settings = Settings::default();
        settings.set_music_volume(1.5);
        assert_eq!(settings.music_volume, 1.0);
        settings.set_flap_volume(-0.25);
        assert_eq!(settings.flap_volume, 0.0);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut settings = Settings::default();
        settings.select_background(BACKGROUNDS.len());
        assert_eq!(settings.background, 0);
        settings.select_background(3);
        assert_eq!(settings.background, 3);
    }

    #[test]
    fn test_pipe_skins_share_the_selected_set() {
        let mut settings = Settings::default();
        settings.select_pipe_set(1);
        let (top, bottom) = settings.pipe_skins();
        assert_eq!(top.index, 1);
        assert_eq!(bottom.index, 1);
        assert_ne!(top.kind, bottom.kind);
    }

    #[test]
    fn test_bird_dimensions_follow_selection() {
        let mut settings = Settings::default();
        assert_eq!(settings.bird_dimensions().height, 35.0);
        settings.select_bird(1);
        assert_eq!(settings.bird_dimensions().height, 24.0);
    }
}
