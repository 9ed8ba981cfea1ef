//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only, accessed strictly sequentially within a tick
//! - Exactly one simulation step per host invocation
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod polygon;
pub mod state;
pub mod tick;

pub use difficulty::{Schedule, schedule};
pub use obstacle::{Obstacle, ObstacleField, SpawnSide};
pub use state::{Avatar, GamePhase, GameState, InputFlags, SessionClock};
pub use tick::{TickInput, tick};
