//! Irregular fan polygons for rock silhouettes
//!
//! Every rock gets its own jagged outline: 8 to 10 perimeter vertices at
//! equal angular steps, each at an independently random radius.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Generate a rock silhouette as a triangle fan.
///
/// Layout: center at (0,0), `sides` perimeter vertices in increasing-angle
/// order starting at angle 0, then the first perimeter vertex repeated so a
/// fan-rendering consumer can close the shape without an index buffer. The
/// returned sequence always holds `sides + 2` points.
pub fn generate(rng: &mut impl Rng) -> Vec<Vec2> {
    let sides = rng.random_range(MIN_POLYGON_SIDES..=MAX_POLYGON_SIDES);
    let step = std::f32::consts::TAU / sides as f32;

    let mut points = Vec::with_capacity(sides as usize + 2);
    points.push(Vec2::ZERO);
    for i in 0..sides {
        let radius: f32 = rng.random_range(MIN_VERTEX_RADIUS..MAX_VERTEX_RADIUS);
        let angle = step * i as f32;
        points.push(Vec2::new(radius * angle.cos(), radius * angle.sin()));
    }
    points.push(points[1]);
    points
}
