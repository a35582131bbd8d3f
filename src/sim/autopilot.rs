//! Idle/demo controller
//!
//! Flaps whenever the next tick would carry the actor below a line just above
//! the bottom of the gap it is heading for.

use super::state::{GamePhase, GameState};
use crate::consts::GRAVITY;

/// Clearance kept between the actor's bottom edge and the gap's bottom edge
const CLEARANCE: f32 = 16.0;

/// Highest y the actor's top edge should sink to
pub fn target_y(state: &GameState) -> f32 {
    let actor = &state.actor;
    state
        .obstacles
        .iter()
        .find(|o| o.right() >= actor.left())
        .map(|o| o.gap_bottom() - actor.height() - CLEARANCE)
        .unwrap_or(state.ground.y * 0.5)
}

/// Whether the actor should flap before the next tick
pub fn should_flap(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }

    let actor = &state.actor;
    let next_y = actor.y() + actor.velocity + GRAVITY;
    next_y > target_y(state)
}
