//! Time-based difficulty ramp
//!
//! A pure function of remaining and total session time. Spawn cadence follows
//! three bands of remaining time; rock speed rises monotonically as the
//! session nears its end.

use crate::consts::MIN_INVERSE_VELOCITY;

/// Spawn parameters for the current moment of the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Time-to-cross-unit-distance for the next rock (speed = 1/this)
    pub inverse_velocity: f32,
}

/// Compute the spawn cadence and rock pace for the given remaining time.
///
/// Cadence: the middle stretch of the session spawns fastest (0.75 s), the
/// final sixth eases back to 1.2 s while the rocks themselves get much
/// faster, and the opening runs at 1.0 s.
pub fn schedule(remaining_time: f32, total_time: f32) -> Schedule {
    let lower = total_time / 6.0;
    let upper = total_time / 2.0;

    let spawn_interval = if remaining_time < upper && remaining_time > lower {
        0.75
    } else if remaining_time < lower {
        1.2
    } else {
        1.0
    };

    // Rocks cross the field in remaining / (total / 5) seconds, floored so a
    // spawn in the session's final moments stays finite.
    let inverse_velocity = (remaining_time / (total_time / 5.0)).max(MIN_INVERSE_VELOCITY);

    Schedule {
        spawn_interval,
        inverse_velocity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_bands_for_a_minute_session() {
        // Opening: remaining above half the session
        assert_eq!(schedule(50.0, 60.0).spawn_interval, 1.0);
        // Middle band (10, 30): fastest cadence
        assert_eq!(schedule(20.0, 60.0).spawn_interval, 0.75);
        assert_eq!(schedule(29.9, 60.0).spawn_interval, 0.75);
        // Final sixth: slower cadence, faster rocks
        assert_eq!(schedule(5.0, 60.0).spawn_interval, 1.2);
    }

    #[test]
    fn band_edges_use_the_opening_cadence() {
        assert_eq!(schedule(30.0, 60.0).spawn_interval, 1.0);
        assert_eq!(schedule(10.0, 60.0).spawn_interval, 1.0);
    }

    #[test]
    fn bands_scale_with_total_time() {
        assert_eq!(schedule(8.0, 30.0).spawn_interval, 0.75);
        assert_eq!(schedule(4.0, 30.0).spawn_interval, 1.2);
        assert_eq!(schedule(20.0, 30.0).spawn_interval, 1.0);
    }

    #[test]
    fn pace_rises_as_time_runs_out() {
        let early = schedule(50.0, 60.0).inverse_velocity;
        let mid = schedule(25.0, 60.0).inverse_velocity;
        let late = schedule(5.0, 60.0).inverse_velocity;

        assert!((early - 50.0 / 12.0).abs() < 1e-6);
        assert!(early > mid && mid > late);
        assert!(late > 0.0);
    }

    #[test]
    fn pace_is_floored_near_zero_remaining() {
        let plan = schedule(0.0, 60.0);
        assert_eq!(plan.inverse_velocity, MIN_INVERSE_VELOCITY);
    }
}
