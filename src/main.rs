//! Headless demo entry point
//!
//! Drives the simulation without a renderer: idle mode flies the bird, the
//! spawn cadence and tick loop run at their configured rates, and the cues a
//! real frontend would turn into drawing and sound come out as log lines.
//! Run with `RUST_LOG=info` (or `debug` for spawn details).

use flappy_paimon::consts::TICK_HZ;
use flappy_paimon::sim::{GameEvent, GamePhase, GameState, TickInput, spawn_obstacle, tick};
use flappy_paimon::{Config, HighScores, Settings, theme};

/// Demo length cap: two minutes of simulated time.
const MAX_DEMO_TICKS: u32 = 120 * TICK_HZ;
/// Stop early once this many rounds finished.
const MAX_DEMO_ROUNDS: u32 = 3;

fn main() {
    env_logger::init();

    let config = Config::default();
    if let Err(err) = config.validate() {
        log::error!("invalid configuration: {err}");
        std::process::exit(1);
    }

    let settings = Settings::default();
    let mut scores = HighScores::new();

    let mut state = GameState::new(0x50A1_3019, &config);
    let (top, bottom) = settings.pipe_skins();
    state.set_pipe_skins(top, bottom);
    state.set_bird_skin(settings.bird_skin());

    log::info!(
        "demo: {} over the {} background, {} pipes",
        theme::BIRDS[settings.bird].name,
        theme::BACKGROUNDS[settings.background],
        theme::PIPE_SETS[settings.pipe_set],
    );

    let idle = TickInput {
        idle: true,
        ..Default::default()
    };
    let mut spawn_clock = 0u32;
    for _ in 0..MAX_DEMO_TICKS {
        // The spawn cadence is the embedding layer's job: fire the spawner
        // every spawn interval while a round is live.
        if state.phase == GamePhase::Playing {
            if spawn_clock == 0 {
                spawn_obstacle(&mut state, &config);
            }
            spawn_clock = (spawn_clock + 1) % config.spawn_interval_ticks;
        } else {
            spawn_clock = 0;
        }

        tick(&mut state, &idle, &config);

        for event in state.drain_events() {
            match event {
                GameEvent::Flapped => {
                    log::trace!("flap cue at volume {:.2}", settings.flap_volume);
                }
                GameEvent::Scored { score } => log::info!("score: {score}"),
                GameEvent::EnteredGameOver { score, high_score } => {
                    let rank = scores.record_round(score);
                    match rank {
                        Some(rank) => {
                            log::info!("round over: score {score} (rank {rank}), high score {high_score}")
                        }
                        None => log::info!("round over: score {score}, high score {high_score}"),
                    }
                }
                GameEvent::ReturnedToMenu => log::info!("back at the menu"),
            }
        }

        if scores.rounds_played() >= MAX_DEMO_ROUNDS && state.phase == GamePhase::Menu {
            break;
        }
    }

    println!(
        "demo finished: {} round(s), high score {}",
        scores.rounds_played(),
        state.high_score
    );
    for (i, entry) in scores.entries.iter().enumerate() {
        println!("  {}. {:>5.1}  (round {})", i + 1, entry.score, entry.round);
    }
}
