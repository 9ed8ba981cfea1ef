//! Startup configuration and palettes
//!
//! Every knob a host can set before a session starts. Palettes are explicit
//! configuration applied on start/restart; nothing recolors entities from
//! outside the tick boundary.

use glam::Vec4;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Base colors for everything the simulation exposes to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Clear color for the host's framebuffer
    pub background: Vec4,
    /// Avatar fill color
    pub avatar: Vec4,
    /// Base rock color, scaled per rock by a random intensity
    pub obstacle: Vec4,
}

impl Palette {
    /// Blue sky, orange avatar, red rocks
    pub fn color() -> Self {
        Self {
            background: Vec4::new(0.2, 0.5, 0.9, 1.0),
            avatar: Vec4::new(1.0, 0.69, 0.3, 1.0),
            obstacle: Vec4::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    /// Black sky, white avatar, white rocks
    pub fn monochrome() -> Self {
        Self {
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
            avatar: Vec4::ONE,
            obstacle: Vec4::ONE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::color()
    }
}

/// Configuration rejected before a session exists
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("total_time must be a positive, finite number of seconds (got {0})")]
    InvalidTotalTime(f32),
    #[error("{name} scale must be in (0, 1) (got {value})")]
    InvalidScale { name: &'static str, value: f32 },
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Named startup parameters
///
/// Defaults: one starting rock, a 60 second session, 0.25 scale for both the
/// avatar and rocks, and the color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rocks alive the moment a session starts
    pub initial_obstacles: u32,
    /// Session length in seconds
    pub total_time: f32,
    /// Avatar scale in normalized units
    pub avatar_scale: f32,
    /// Rock scale in normalized units
    pub obstacle_scale: f32,
    /// Base colors applied on start/restart
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_obstacles: DEFAULT_INITIAL_OBSTACLES,
            total_time: DEFAULT_TOTAL_TIME,
            avatar_scale: DEFAULT_SCALE,
            obstacle_scale: DEFAULT_SCALE,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config from JSON. Missing fields fall back to
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bad parameters up front; ticking itself never fails.
    ///
    /// Scales must leave the avatar room to move, so they are bounded by the
    /// playfield half-extent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(ConfigError::InvalidTotalTime(self.total_time));
        }
        for (name, value) in [
            ("avatar", self.avatar_scale),
            ("obstacle", self.obstacle_scale),
        ] {
            if !value.is_finite() || value <= 0.0 || value >= PLAYFIELD_EXTENT {
                return Err(ConfigError::InvalidScale { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_obstacles, 1);
        assert_eq!(config.total_time, 60.0);
        assert_eq!(config.avatar_scale, 0.25);
    }

    #[test]
    fn non_positive_total_time_rejected() {
        for total_time in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = GameConfig {
                total_time,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTotalTime(_))
            ));
        }
    }

    #[test]
    fn out_of_range_scales_rejected() {
        let config = GameConfig {
            avatar_scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScale { name: "avatar", .. })
        ));

        let config = GameConfig {
            obstacle_scale: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScale {
                name: "obstacle",
                ..
            })
        ));
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = GameConfig::from_json(r#"{"total_time": 30.0}"#).unwrap();
        assert_eq!(config.total_time, 30.0);
        assert_eq!(config.initial_obstacles, 1);
        assert_eq!(config.palette, Palette::color());
    }

    #[test]
    fn from_json_rejects_invalid_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{"total_time": -5.0}"#),
            Err(ConfigError::InvalidTotalTime(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = GameConfig {
            total_time: 45.0,
            palette: Palette::monochrome(),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
