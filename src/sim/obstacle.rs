//! Falling rocks: spawning, integration, and culling
//!
//! The field exclusively owns the live collection. Removal is mark-then-filter:
//! a rock is tagged dead during integration and only dropped in the cull pass,
//! after collision detection has finished reading the collection for the tick.

use glam::{Vec2, Vec4};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::polygon;
use crate::consts::*;
use crate::wrap_angle;

/// Which edge of the playfield a rock enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSide {
    /// Enters at y = +1 moving down
    Top,
    /// Enters at y = -1 moving up
    Bottom,
}

impl SpawnSide {
    /// Unit travel direction for rocks entering from this side
    pub fn direction(self) -> Vec2 {
        match self {
            SpawnSide::Top => Vec2::new(0.0, -1.0),
            SpawnSide::Bottom => Vec2::new(0.0, 1.0),
        }
    }

    /// Entry y coordinate
    pub fn entry_y(self) -> f32 {
        match self {
            SpawnSide::Top => PLAYFIELD_EXTENT,
            SpawnSide::Bottom => -PLAYFIELD_EXTENT,
        }
    }
}

/// A single falling rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Triangle fan: center, perimeter vertices, repeated first perimeter vertex
    pub polygon: Vec<Vec2>,
    pub color: Vec4,
    /// Radius multiplier applied by the renderer and the collision check
    pub scale: f32,
    /// Radians in [0, 2π), wraps on overflow
    pub rotation: f32,
    /// Signed, constant for the rock's lifetime
    pub angular_velocity: f32,
    /// Normalized position ([-1, 1] per axis while visible)
    pub position: Vec2,
    pub velocity: Vec2,
    /// Cleared once the rock leaves the vertical band; flips at most once
    pub alive: bool,
}

impl Obstacle {
    /// Perimeter vertex count of the silhouette
    pub fn sides(&self) -> usize {
        self.polygon.len() - 2
    }

    /// True once the rock has fully left the visible vertical band
    fn exited(&self) -> bool {
        self.position.y.abs() > PLAYFIELD_EXTENT + self.scale
    }
}

/// Owns every live rock in the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub(crate) obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Spawn one rock into the field.
    ///
    /// The silhouette, spin, and color intensity all come from the shared
    /// random stream; speed is `1 / inverse_velocity` along the side's travel
    /// direction.
    pub fn spawn(
        &mut self,
        rng: &mut impl Rng,
        base_color: Vec4,
        position: Vec2,
        inverse_velocity: f32,
        side: SpawnSide,
        scale: f32,
    ) {
        let polygon = polygon::generate(rng);
        let intensity: f32 = rng.random_range(MIN_COLOR_INTENSITY..MAX_COLOR_INTENSITY);
        let angular_velocity: f32 = rng.random_range(-1.0..1.0);

        self.obstacles.push(Obstacle {
            polygon,
            color: base_color * intensity,
            scale,
            rotation: 0.0,
            angular_velocity,
            position,
            velocity: side.direction() * (1.0 / inverse_velocity),
            alive: true,
        });
    }

    /// Replace the field with `count` fresh rocks entering from the top edge
    /// at random x offsets and a gentle fixed pace.
    pub fn reset(&mut self, rng: &mut impl Rng, base_color: Vec4, count: u32, scale: f32) {
        self.obstacles.clear();
        for _ in 0..count {
            let x: f32 = rng.random_range(-PLAYFIELD_EXTENT..PLAYFIELD_EXTENT);
            self.spawn(
                rng,
                base_color,
                Vec2::new(x, PLAYFIELD_EXTENT),
                INITIAL_INVERSE_VELOCITY,
                SpawnSide::Top,
                scale,
            );
        }
    }

    /// Advance every rock by `dt`: spin, translate, and tag rocks that have
    /// left the vertical band. The tag is edge-triggered, so a rock is never
    /// marked twice.
    pub fn integrate(&mut self, dt: f32) {
        for rock in &mut self.obstacles {
            rock.rotation = wrap_angle(rock.rotation + rock.angular_velocity * dt);
            rock.position += rock.velocity * dt;
            if rock.alive && rock.exited() {
                rock.alive = false;
            }
        }
    }

    /// Remove dead rocks, returning how many were dropped. Each removed rock
    /// is one successful dodge. Runs after collision detection for the tick,
    /// never during a scan of the collection.
    pub fn cull(&mut self) -> u32 {
        let before = self.obstacles.len();
        self.obstacles.retain(|rock| rock.alive);
        (before - self.obstacles.len()) as u32
    }

    /// Read-only snapshot of the live collection
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
