//! Toroids entry point
//!
//! Runs a headless demo session: a scripted pilot sweeps, thrusts, and
//! fires until the rocks win or the tick cap is reached. A windowed
//! frontend would fill [`TickInput`] from real key state instead and draw
//! the geometry each entity exposes.

use std::time::{SystemTime, UNIX_EPOCH};

use toroids::sim::{GamePhase, GameState, TickInput, tick};

/// Cap so a lucky pilot cannot run forever (10 minutes at 60 fps)
const MAX_TICKS: u64 = 36_000;

/// HUD log interval in ticks
const HUD_INTERVAL: u64 = 600;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);

    while state.running() && state.time_ticks < MAX_TICKS {
        let input = pilot(&state);
        tick(&mut state, &input);

        if state.time_ticks % HUD_INTERVAL == 0 {
            log::info!(
                "tick {}: score {}, lives {}, {} rocks, {} shots in flight",
                state.time_ticks,
                state.score,
                state.lives,
                state.rocks.len(),
                state.ship.shots.len(),
            );
        }
    }

    match state.phase {
        GamePhase::GameOver => log::info!("rocks win: final score {}", state.score),
        GamePhase::Playing => log::info!("tick cap reached: final score {}", state.score),
    }

    match serde_json::to_string(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("state dump failed: {err}"),
    }
}

/// Scripted stand-in for keyboard input: sweep the heading, keep a little
/// way on, fire in a steady cadence.
fn pilot(state: &GameState) -> TickInput {
    TickInput {
        rotate_right: true,
        rotate_left: false,
        thrust: state.time_ticks % 120 < 30,
        fire: state.time_ticks % 9 == 0,
    }
}
