//! Game state and core simulation types
//!
//! Everything the renderer reads back each tick lives here: the bird, the
//! live pipe collection, score and phase. The core owns these; skin handles
//! are carried opaquely for the renderer's benefit.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::theme::{AssetKind, SkinHandle};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting at the menu
    Menu,
    /// Active gameplay
    Playing,
    /// Round ended, overlay up, auto-returns to menu
    GameOver,
}

/// Fire-and-forget cues for the embedding layer, drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The bird flapped (play the flap sound)
    Flapped,
    /// A pipe was passed; carries the new score
    Scored { score: f32 },
    /// The round ended (show the overlay, play the game-over cue)
    EnteredGameOver { score: f32, high_score: f32 },
    /// The game-over delay elapsed (show the menu again)
    ReturnedToMenu,
}

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Position of the top-left corner. `x` is constant during play.
    pub pos: Vec2,
    /// Bounding-box size
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub velocity_y: f32,
    /// Opaque skin reference for the renderer
    pub skin: SkinHandle,
}

impl Bird {
    /// Place the bird at its round-start position: an eighth of the field in
    /// from the left, vertically centered.
    pub fn spawn(config: &Config, skin: SkinHandle) -> Self {
        Self {
            pos: Vec2::new(config.field_width / 8.0, config.field_height / 2.0),
            size: Vec2::new(config.bird_width, config.bird_height),
            velocity_y: 0.0,
            skin,
        }
    }

    /// Bottom edge, used for the floor-out check.
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Which half of a pair a pipe is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// One obstacle half. Pipes are spawned in top/bottom pairs sharing a
/// vertical opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Position of the top-left corner
    pub pos: Vec2,
    /// Bounding-box size
    pub size: Vec2,
    pub kind: PipeKind,
    /// Flips false -> true exactly once, when the bird clears this pipe
    pub passed: bool,
    /// Opaque skin reference for the renderer
    pub skin: SkinHandle,
}

impl Pipe {
    /// Trailing (right) edge.
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully scrolled off the left edge of the field.
    pub fn is_offscreen(&self) -> bool {
        self.right_edge() < 0.0
    }
}

/// Complete game state. The core owns the bird and the live pipes; the
/// renderer reads them back through the public fields once per tick.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    pub bird: Bird,
    /// Live pipes, ordered oldest first
    pub pipes: Vec<Pipe>,
    /// Half a unit per passed pipe, one unit per pair
    pub score: f32,
    /// Monotone non-decreasing for the process lifetime
    pub high_score: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Countdown while `GameOver`, in ticks; reaching zero returns to menu
    pub menu_return_ticks: u32,
    /// Spawner RNG (seeded, for deterministic replays)
    pub(crate) rng: Pcg32,
    /// Pending cues, drained by the embedding layer
    pub(crate) events: Vec<GameEvent>,
    bird_skin: SkinHandle,
    pipe_skins: (SkinHandle, SkinHandle),
}

impl GameState {
    /// Create a state at the menu with the given seed.
    pub fn new(seed: u64, config: &Config) -> Self {
        let bird_skin = SkinHandle::new(AssetKind::Bird, 0);
        Self {
            seed,
            phase: GamePhase::Menu,
            bird: Bird::spawn(config, bird_skin),
            pipes: Vec::new(),
            score: 0.0,
            high_score: 0.0,
            time_ticks: 0,
            menu_return_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            bird_skin,
            pipe_skins: (
                SkinHandle::new(AssetKind::PipeTop, 0),
                SkinHandle::new(AssetKind::PipeBottom, 0),
            ),
        }
    }

    /// Begin a round. No-op unless at the menu.
    pub fn start(&mut self, config: &Config) {
        if self.phase != GamePhase::Menu {
            return;
        }
        self.reset_round(config);
        self.phase = GamePhase::Playing;
        log::info!("round started (seed {})", self.seed);
    }

    /// Flap: instantaneous upward velocity kick. Not debounced; repeated
    /// flaps each reset velocity to the same constant. No-op unless playing.
    pub fn jump(&mut self, config: &Config) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.bird.velocity_y = config.jump_velocity;
        self.events.push(GameEvent::Flapped);
    }

    /// Stamp the skin the spawner puts on new pipes. Live pipes keep the
    /// handle they were spawned with; the renderer re-resolves per frame.
    pub fn set_pipe_skins(&mut self, top: SkinHandle, bottom: SkinHandle) {
        self.pipe_skins = (top, bottom);
    }

    /// Set the skin the bird respawns with.
    pub fn set_bird_skin(&mut self, skin: SkinHandle) {
        self.bird_skin = skin;
        self.bird.skin = skin;
    }

    pub(crate) fn pipe_skins(&self) -> (SkinHandle, SkinHandle) {
        self.pipe_skins
    }

    /// Take all cues emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Restore the menu-entry conditions: bird at its spawn point with zero
    /// velocity, no pipes, score cleared. The high score survives.
    pub(crate) fn reset_round(&mut self, config: &Config) {
        self.bird = Bird::spawn(config, self.bird_skin);
        self.pipes.clear();
        self.score = 0.0;
        self.menu_return_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_at_menu() {
        let config = Config::default();
        let state = GameState::new(7, &config);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0.0);
        assert_eq!(state.bird.pos, Vec2::new(45.0, 320.0));
    }

    #[test]
    fn test_start_only_from_menu() {
        let config = Config::default();
        let mut state = GameState::new(7, &config);
        state.start(&config);
        assert_eq!(state.phase, GamePhase::Playing);

        state.bird.velocity_y = 3.0;
        state.start(&config);
        // Already playing: nothing reset.
        assert_eq!(state.bird.velocity_y, 3.0);
    }

    #[test]
    fn test_jump_is_a_fixed_reset() {
        let config = Config::default();
        let mut state = GameState::new(7, &config);
        state.start(&config);
        state.bird.velocity_y = 3.0;
        state.jump(&config);
        assert_eq!(state.bird.velocity_y, -8.0);
        // Not additive: jumping again lands on the same constant.
        state.jump(&config);
        assert_eq!(state.bird.velocity_y, -8.0);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Flapped, GameEvent::Flapped]
        );
    }

    #[test]
    fn test_jump_ignored_outside_play() {
        let config = Config::default();
        let mut state = GameState::new(7, &config);
        state.jump(&config);
        assert_eq!(state.bird.velocity_y, 0.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_reset_round_preserves_high_score() {
        let config = Config::default();
        let mut state = GameState::new(7, &config);
        state.high_score = 12.5;
        state.score = 12.5;
        state.reset_round(&config);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.high_score, 12.5);
    }
}
