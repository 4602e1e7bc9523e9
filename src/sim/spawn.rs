//! Obstacle spawning
//!
//! One pipe pair per invocation, placed just off the right edge. The spawn
//! cadence lives outside the core; the spawner only tolerates being called
//! off-cadence (or in the wrong phase) by doing nothing.

use glam::Vec2;
use rand::Rng;

use super::state::{GamePhase, GameState, Pipe, PipeKind};
use crate::config::Config;

/// Append one top/bottom pipe pair to the live collection.
///
/// The top pipe's visible bottom edge lands in a randomized band: its `y` is
/// `-pipe_height/3 - r` with `r` uniform in `[0, pipe_height/3)`. The bottom
/// pipe hangs below the shared opening. No-op unless playing.
pub fn spawn_obstacle(state: &mut GameState, config: &Config) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let jitter = state.rng.random_range(0.0..config.pipe_height / 3.0);
    let top_y = -config.pipe_height / 3.0 - jitter;
    let bottom_y = top_y + config.pipe_height + config.opening_space();
    let size = Vec2::new(config.pipe_width, config.pipe_height);
    let (top_skin, bottom_skin) = state.pipe_skins();

    state.pipes.push(Pipe {
        pos: Vec2::new(config.field_width, top_y),
        size,
        kind: PipeKind::Top,
        passed: false,
        skin: top_skin,
    });
    state.pipes.push(Pipe {
        pos: Vec2::new(config.field_width, bottom_y),
        size,
        kind: PipeKind::Bottom,
        passed: false,
        skin: bottom_skin,
    });

    log::debug!(
        "spawned pipe pair at tick {}: opening {:.1}..{:.1}",
        state.time_ticks,
        top_y + config.pipe_height,
        bottom_y
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state(seed: u64, config: &Config) -> GameState {
        let mut state = GameState::new(seed, config);
        state.start(config);
        state
    }

    #[test]
    fn test_spawn_appends_exactly_one_pair() {
        let config = Config::default();
        let mut state = playing_state(1, &config);
        spawn_obstacle(&mut state, &config);
        assert_eq!(state.pipes.len(), 2);
        assert_eq!(state.pipes[0].kind, PipeKind::Top);
        assert_eq!(state.pipes[1].kind, PipeKind::Bottom);
        assert!(state.pipes.iter().all(|p| !p.passed));
        assert!(state.pipes.iter().all(|p| p.pos.x == config.field_width));
    }

    #[test]
    fn test_pair_shares_the_opening() {
        let config = Config::default();
        let mut state = playing_state(2, &config);
        for _ in 0..50 {
            spawn_obstacle(&mut state, &config);
        }
        for pair in state.pipes.chunks(2) {
            let (top, bottom) = (&pair[0], &pair[1]);
            let expected = top.pos.y + config.pipe_height + config.field_height / 3.0;
            assert!((bottom.pos.y - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_top_pipe_lands_in_the_randomized_band() {
        let config = Config::default();
        let mut state = playing_state(3, &config);
        for _ in 0..100 {
            spawn_obstacle(&mut state, &config);
        }
        let third = config.pipe_height / 3.0;
        for pipe in state.pipes.iter().filter(|p| p.kind == PipeKind::Top) {
            assert!(pipe.pos.y <= -third);
            assert!(pipe.pos.y > -2.0 * third);
        }
    }

    #[test]
    fn test_noop_outside_playing() {
        let config = Config::default();
        let mut state = GameState::new(4, &config);
        spawn_obstacle(&mut state, &config);
        assert!(state.pipes.is_empty());

        state.phase = GamePhase::GameOver;
        spawn_obstacle(&mut state, &config);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_same_seed_spawns_identical_pipes() {
        let config = Config::default();
        let mut a = playing_state(99, &config);
        let mut b = playing_state(99, &config);
        for _ in 0..10 {
            spawn_obstacle(&mut a, &config);
            spawn_obstacle(&mut b, &config);
        }
        let ys_a: Vec<f32> = a.pipes.iter().map(|p| p.pos.y).collect();
        let ys_b: Vec<f32> = b.pipes.iter().map(|p| p.pos.y).collect();
        assert_eq!(ys_a, ys_b);
    }
}
