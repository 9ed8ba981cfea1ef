//! Circle-approximate collision between the avatar and rocks
//!
//! Both silhouettes are approximated by circles somewhat smaller than their
//! nominal scale; the irregular polygon outline is ignored on purpose.

use super::obstacle::Obstacle;
use super::state::Avatar;
use crate::consts::{AVATAR_HITBOX, OBSTACLE_HITBOX};

/// True if any rock in the collection overlaps the avatar.
///
/// Short-circuits on the first hit, since a single overlap already ends the
/// round. Runs before the cull pass, so a rock that leaves the band on the
/// same tick it clips the avatar still counts.
pub fn check(avatar: &Avatar, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|rock| {
        let distance = avatar.position.distance(rock.position);
        distance < avatar.scale * AVATAR_HITBOX + rock.scale * OBSTACLE_HITBOX
    })
}
