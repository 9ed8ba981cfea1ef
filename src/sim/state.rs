//! Session state: the avatar, the clock, and the state machine's data
//!
//! A host owns one [`GameState`], drives it with [`crate::sim::tick`], and
//! reads it back through a shared reference as the frame's snapshot.

use glam::{Vec2, Vec4};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleField;
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, waiting for the start command
    Initial,
    /// Simulation active
    Playing,
    /// A rock hit the avatar; frozen until restart
    GameOver,
    /// Survived the full session; frozen until restart
    Win,
}

impl GamePhase {
    /// True in GameOver or Win, where ticking is suspended
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Directional commands held down for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player's dodger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Normalized position, kept within ±(1 - scale) per axis
    pub position: Vec2,
    pub scale: f32,
    pub color: Vec4,
}

impl Avatar {
    /// A fresh avatar centered on the playfield
    pub fn new(scale: f32, color: Vec4) -> Self {
        Self {
            position: Vec2::ZERO,
            scale,
            color,
        }
    }

    /// Furthest the avatar's center may sit from center on either axis
    fn bound(&self) -> f32 {
        PLAYFIELD_EXTENT - self.scale
    }

    /// Apply held directional commands for this tick.
    ///
    /// Each axis is handled independently: opposite commands cancel and two
    /// orthogonal commands produce diagonal motion. A command whose step
    /// would leave the playfield is skipped.
    pub fn steer(&mut self, input: &InputFlags, dt: f32) {
        let bound = self.bound();
        let step = AVATAR_SPEED * dt;

        if input.left && self.position.x - step >= -bound {
            self.position.x -= step;
        }
        if input.right && self.position.x + step <= bound {
            self.position.x += step;
        }
        if input.down && self.position.y - step >= -bound {
            self.position.y -= step;
        }
        if input.up && self.position.y + step <= bound {
            self.position.y += step;
        }
    }

    /// Absolute-pointer control: park the avatar at `pointer`, clamped to
    /// the playfield. Overrides relative steering for the tick.
    pub fn park_at(&mut self, pointer: Vec2) {
        let bound = self.bound();
        self.position = pointer.clamp(Vec2::splat(-bound), Vec2::splat(bound));
    }
}

/// Elapsed-time bookkeeping for one Playing phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionClock {
    /// Time since the current Playing phase began
    pub screen_elapsed: f32,
    /// Time since the last rock spawned
    pub spawn_elapsed: f32,
    /// Accumulator for the 1 Hz round counter
    round_elapsed: f32,
    /// Whole seconds survived. Informational only; the Win transition
    /// compares `screen_elapsed` against the session length directly.
    pub rounds: u32,
}

impl SessionClock {
    /// Zero everything on transition into Playing
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance all timers, rolling `rounds` once per elapsed second
    pub fn advance(&mut self, dt: f32) {
        self.screen_elapsed += dt;
        self.spawn_elapsed += dt;
        self.round_elapsed += dt;
        while self.round_elapsed >= 1.0 {
            self.round_elapsed -= 1.0;
            self.rounds += 1;
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the session's random stream started from, for reproducibility
    pub seed: u64,
    /// Single shared random stream behind every procedural choice. Accessed
    /// strictly sequentially within a tick.
    pub(crate) rng: Pcg32,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Rocks that left the playfield without hitting the avatar
    pub dodge_count: u32,
    pub clock: SessionClock,
    pub avatar: Avatar,
    pub field: ObstacleField,
}

impl GameState {
    /// Build a session in the Initial phase, rejecting invalid configuration
    /// up front. Nothing simulates until the start command arrives.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let avatar = Avatar::new(config.avatar_scale, config.palette.avatar);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Initial,
            dodge_count: 0,
            clock: SessionClock::default(),
            avatar,
            field: ObstacleField::default(),
            config,
        })
    }

    /// Seconds left before the session is survived
    pub fn remaining_time(&self) -> f32 {
        (self.config.total_time - self.clock.screen_elapsed).max(0.0)
    }

    /// Enter Playing with everything reset: counters and timers to zero, the
    /// avatar re-centered with the configured palette, and exactly the
    /// configured number of starting rocks. Serves both the start command
    /// from Initial and restarts from GameOver/Win.
    pub(crate) fn restart(&mut self) {
        self.dodge_count = 0;
        self.clock.reset();
        self.avatar = Avatar::new(self.config.avatar_scale, self.config.palette.avatar);
        self.field.reset(
            &mut self.rng,
            self.config.palette.obstacle,
            self.config.initial_obstacles,
            self.config.obstacle_scale,
        );
        self.phase = GamePhase::Playing;
        log::info!(
            "session started: seed={} total_time={}s rocks={}",
            self.seed,
            self.config.total_time,
            self.field.len()
        );
    }
}
