//! Collision arbitration between the flyer, obstacles, and the ground
//!
//! Checks are pure predictions; [`handle_hit`] is the only call that mutates.
//! Callers scan obstacles, stop at the first hit, then apply it once, so two
//! obstacles qualifying in the same tick cost a single life.

use super::flyer::Flyer;
use super::obstacle::Obstacle;

/// Result of a collision check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub hit_obstacle: bool,
    /// Always false from [`check_collision`]; see [`check_ground_collision`]
    pub hit_ground: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.hit_obstacle || self.hit_ground
    }
}

/// Flyer against one obstacle. Invincibility suppresses hits entirely.
pub fn check_collision(flyer: &Flyer, obstacle: &Obstacle, flyer_width: f32) -> CollisionResult {
    if flyer.is_invincible() {
        return CollisionResult::miss();
    }

    let hit_obstacle = obstacle.overlaps_x(flyer.pos.x, flyer_width)
        && !obstacle.is_in_gap(flyer.pos.y, flyer.sprite_height());

    CollisionResult {
        hit_obstacle,
        hit_ground: false,
    }
}

pub fn check_ground_collision(flyer: &Flyer) -> bool {
    !flyer.is_invincible() && flyer.is_on_ground()
}

/// First obstacle the flyer collides with, in live-set order
pub fn first_hit<'a>(
    flyer: &Flyer,
    obstacles: &'a [Obstacle],
    flyer_width: f32,
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|o| check_collision(flyer, o, flyer_width).hit_obstacle)
}

pub fn handle_hit(flyer: &mut Flyer) {
    flyer.hit();
}
