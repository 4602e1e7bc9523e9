//! Fixed timestep simulation tick
//!
//! Advances the bird, scrolls the pipes, scores passed pipes and runs the
//! game-over state machine, one step per call. The external run loop owns
//! the cadence and is assumed to tick at a constant rate: gravity and the
//! scroll speed are per-tick increments, not per-second rates.

use super::collision::bird_pipe_collision;
use super::state::{GameEvent, GamePhase, GameState, PipeKind};
use crate::config::Config;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Begin a round (menu only)
    pub start: bool,
    /// Flap (playing only)
    pub jump: bool,
    /// Idle/demo mode: auto-starts and flaps toward the next opening
    pub idle: bool,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput, config: &Config) {
    let mut input = input.clone();
    if input.idle {
        drive_idle(state, &mut input, config);
    }
    let input = &input;

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.start(config);
            }
        }
        GamePhase::Playing => {
            if input.jump {
                state.jump(config);
            }
            advance_round(state, config);
        }
        GamePhase::GameOver => {
            // One-shot countdown; at zero the menu-entry state is restored.
            // Until then score and high score stay frozen.
            if state.menu_return_ticks > 0 {
                state.menu_return_ticks -= 1;
                if state.menu_return_ticks == 0 {
                    state.reset_round(config);
                    state.phase = GamePhase::Menu;
                    state.events.push(GameEvent::ReturnedToMenu);
                    log::debug!("returned to menu");
                }
            }
        }
    }
}

fn advance_round(state: &mut GameState, config: &Config) {
    state.time_ticks += 1;

    // Integrate: constant per-tick gravity, then clamp at the ceiling.
    // Clamping zeroes the overshoot but not the velocity.
    state.bird.velocity_y += config.gravity;
    state.bird.pos.y += state.bird.velocity_y;
    state.bird.pos.y = state.bird.pos.y.max(0.0);

    // Pipes scroll left at constant speed, independent of the bird.
    for pipe in &mut state.pipes {
        pipe.pos.x += config.scroll_velocity;
    }

    // Per pipe: scoring first, then the collision test. Once the round ends
    // mid-pass, the remaining score flips this tick are skipped (scoring
    // freezes at the moment of death).
    let mut ended = false;
    for pipe in &mut state.pipes {
        if !ended && !pipe.passed && pipe.right_edge() < state.bird.pos.x {
            pipe.passed = true;
            state.score += 0.5;
            if state.score > state.high_score {
                state.high_score = state.score;
            }
            state.events.push(GameEvent::Scored { score: state.score });
        }
        if !ended && bird_pipe_collision(&state.bird, pipe, config.collision_inset) {
            ended = true;
        }
    }

    // Floor-out: past the bottom edge the round is over.
    if !ended && state.bird.bottom() > config.field_height {
        ended = true;
    }

    state.pipes.retain(|pipe| !pipe.is_offscreen());

    if ended {
        enter_game_over(state, config);
    }
}

/// Run the terminal transition's side effects at most once per round.
fn enter_game_over(state: &mut GameState, config: &Config) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.menu_return_ticks = config.game_over_delay_ticks;
    state.events.push(GameEvent::EnteredGameOver {
        score: state.score,
        high_score: state.high_score,
    });
    log::info!(
        "game over at tick {}: score {}, high score {}",
        state.time_ticks,
        state.score,
        state.high_score
    );
}

/// Demo autopilot: start from the menu, then flap whenever the bird is
/// falling below the center of the next opening.
fn drive_idle(state: &GameState, input: &mut TickInput, config: &Config) {
    match state.phase {
        GamePhase::Menu => input.start = true,
        GamePhase::Playing => {
            let next_opening = state
                .pipes
                .iter()
                .filter(|p| p.kind == PipeKind::Top && p.right_edge() > state.bird.pos.x)
                .min_by(|a, b| {
                    a.pos
                        .x
                        .partial_cmp(&b.pos.x)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|top| top.pos.y + top.size.y + config.opening_space() / 2.0);
            let target = next_opening.unwrap_or(config.field_height / 2.0);
            let bird_center = state.bird.pos.y + state.bird.size.y / 2.0;
            if state.bird.velocity_y > 0.0 && bird_center > target {
                input.jump = true;
            }
        }
        GamePhase::GameOver => {}
    }
}
