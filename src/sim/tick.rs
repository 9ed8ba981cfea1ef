//! Per-tick simulation step
//!
//! One call advances the session by one frame's delta time. Stage order is
//! fixed: input application, obstacle integration, spawn decision, collision
//! detection, state transition, cull.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::difficulty;
use super::obstacle::SpawnSide;
use super::state::{GamePhase, GameState, InputFlags};
use crate::consts::PLAYFIELD_EXTENT;

/// Everything the host supplies for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directional commands
    pub flags: InputFlags,
    /// Absolute pointer position in normalized device space; overrides the
    /// directional commands for this tick
    pub pointer: Option<Vec2>,
    /// Start command in Initial, restart command in GameOver/Win
    pub restart: bool,
}

/// Advance the session by one frame's `dt`.
///
/// In Initial the session idles until the start command; in GameOver/Win the
/// snapshot stays frozen until a restart. Restarts land on a tick boundary:
/// the tick that applies one does nothing else, so no tick ever observes a
/// half-reset session.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart && state.phase != GamePhase::Playing {
        state.restart();
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.clock.advance(dt);

    // Input application
    if let Some(pointer) = input.pointer {
        state.avatar.park_at(pointer);
    } else {
        state.avatar.steer(&input.flags, dt);
    }

    // Obstacle integration
    state.field.integrate(dt);

    // Spawn decision
    let plan = difficulty::schedule(state.remaining_time(), state.config.total_time);
    if state.clock.spawn_elapsed > plan.spawn_interval {
        state.clock.spawn_elapsed = 0.0;

        let x: f32 = state.rng.random_range(-PLAYFIELD_EXTENT..PLAYFIELD_EXTENT);
        let roll: f32 = state.rng.random_range(-1.0..1.0);
        let side = if roll < 0.0 {
            SpawnSide::Bottom
        } else {
            SpawnSide::Top
        };

        state.field.spawn(
            &mut state.rng,
            state.config.palette.obstacle,
            Vec2::new(x, side.entry_y()),
            plan.inverse_velocity,
            side,
            state.config.obstacle_scale,
        );
        log::debug!(
            "spawned rock: side={side:?} x={x:.2} inverse_velocity={:.2}",
            plan.inverse_velocity
        );
    }

    // Collision detection reads the collection before the cull pass touches
    // it, so a rock that overlaps on its way out of the band still ends the
    // round.
    let hit = collision::check(&state.avatar, state.field.obstacles());

    if hit {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: dodged {} rocks with {:.1}s left",
            state.dodge_count,
            state.remaining_time()
        );
    } else if state.clock.screen_elapsed >= state.config.total_time {
        state.phase = GamePhase::Win;
        log::info!("session survived: {} rocks dodged", state.dodge_count);
    }

    state.dodge_count += state.field.cull();
}
