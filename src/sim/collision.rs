//! Collision detection between the actor and the world
//!
//! All shapes are axis-aligned rectangles; there is no collision response,
//! any hit ends the session.

use super::state::{Actor, CollisionKind, Ground, Obstacle};

/// True if the actor's horizontal extent overlaps the obstacle's
#[inline]
pub fn overlaps_x(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.right() > obstacle.x && actor.left() < obstacle.right()
}

/// True if the actor touches or is below the ground's top edge
#[inline]
pub fn hits_ground(actor: &Actor, ground: &Ground) -> bool {
    actor.bottom() >= ground.y
}

/// True if the actor overlaps either rectangle of the obstacle
pub fn hits_obstacle(actor: &Actor, obstacle: &Obstacle) -> bool {
    overlaps_x(actor, obstacle)
        && (actor.top() < obstacle.gap_top() || actor.bottom() > obstacle.gap_bottom())
}

/// Check the actor against the ground, then against every obstacle
///
/// Returns the first collision found.
pub fn check_collision(
    actor: &Actor,
    ground: &Ground,
    obstacles: &[Obstacle],
) -> Option<CollisionKind> {
    if hits_ground(actor, ground) {
        return Some(CollisionKind::Ground);
    }

    obstacles
        .iter()
        .any(|o| hits_obstacle(actor, o))
        .then_some(CollisionKind::Obstacle)
}
