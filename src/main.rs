//! Sky Dodge entry point
//!
//! Headless host: drives the simulation at a fixed timestep with scripted
//! input and logs the session outcome. A rendering host replaces this loop
//! with its own frame timing, input translation, and snapshot drawing.

use glam::Vec2;
use sky_dodge::GameConfig;
use sky_dodge::sim::{GamePhase, GameState, TickInput, tick};

const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut state = match GameState::new(GameConfig::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    // Start command, then run the session to a terminal phase with the
    // avatar sweeping back and forth near the bottom edge.
    let start = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &start, DT);

    let mut frame = 0u64;
    while state.phase == GamePhase::Playing {
        let sway = (frame as f32 * DT * 0.5).sin() * 0.7;
        let input = TickInput {
            pointer: Some(Vec2::new(sway, -0.6)),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        frame += 1;
    }

    if state.phase == GamePhase::Win {
        log::info!(
            "survived {}s and dodged {} rocks ({} rounds)",
            state.config.total_time,
            state.dodge_count,
            state.clock.rounds
        );
    } else {
        log::info!(
            "hit with {:.1}s remaining after dodging {} rocks",
            state.remaining_time(),
            state.dodge_count
        );
    }
}
