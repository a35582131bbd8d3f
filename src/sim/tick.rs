//! Per-tick simulation update
//!
//! Advances the session by one frame. Physics only runs while Playing; the
//! other phases just count ticks.

use super::collision::check_collision;
use super::spawn::update_spawn_timer;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::PIPE_SPEED;

/// Advance the game state by one frame of length `dt` (milliseconds)
///
/// Negative or non-finite `dt` counts as 0.
pub fn tick(state: &mut GameState, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.time_ticks += 1;

    if state.phase != GamePhase::Playing {
        return;
    }

    let scale = state.time_step.physics_scale(dt);

    // Actor physics
    state.actor.integrate(scale);
    state.actor.clamp_to_field(state.ground.y);

    // Scroll the world, then spawn so a new obstacle starts at the right edge
    let scroll = PIPE_SPEED * scale;
    for obstacle in &mut state.obstacles {
        obstacle.x -= scroll;
    }
    state.obstacles.retain(|o| !o.is_offscreen());
    update_spawn_timer(state, dt);
    state.ground.scroll(scroll, state.playfield.width);

    if let Some(kind) = check_collision(&state.actor, &state.ground, &state.obstacles) {
        log::info!(
            "Collision with {:?} at tick {}, score {}",
            kind,
            state.time_ticks,
            state.score
        );
        state.events.push(GameEvent::Collided { kind });
        state.set_phase(GamePhase::GameOver);
        return;
    }

    update_score(state);
    state.actor.animate();
}

/// Mark every obstacle the actor has fully passed and count it once
pub fn update_score(state: &mut GameState) {
    let actor_x = state.actor.x();
    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.scored && actor_x > obstacle.right() {
            obstacle.scored = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }
}
