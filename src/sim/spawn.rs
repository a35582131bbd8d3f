//! Procedural obstacle generation

use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle};
use crate::consts::{PIPE_GAP, PIPE_MIN_HEIGHT, SPAWN_INTERVAL};
use crate::settings::SpawnTimerPolicy;

/// Pick a bottom-rectangle height for a field whose ground top is `ground_y`
///
/// Uniform integer in [PIPE_MIN_HEIGHT, ground_y - PIPE_GAP - PIPE_MIN_HEIGHT].
/// When the field is too short for that range the free height is split evenly
/// between top and bottom.
pub fn roll_bottom_height(rng: &mut impl Rng, ground_y: f32) -> f32 {
    let free = (ground_y - PIPE_GAP).max(0.0);
    let min = PIPE_MIN_HEIGHT as i32;
    let max = (free - PIPE_MIN_HEIGHT).floor() as i32;

    if max < min {
        return (free / 2.0).floor();
    }

    rng.random_range(min..=max) as f32
}

/// Add a fresh obstacle at the right edge of the playfield
pub fn spawn_obstacle(state: &mut GameState) {
    let ground_y = state.ground.y;
    let bottom_height = roll_bottom_height(&mut state.rng, ground_y);
    let obstacle = Obstacle::new(state.playfield.width, ground_y, bottom_height);

    log::debug!(
        "Spawned obstacle at x={} (gap {}..{})",
        obstacle.x,
        obstacle.gap_top(),
        obstacle.gap_bottom()
    );

    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleSpawned);
}

/// Accumulate `dt` and spawn at most one obstacle when the interval elapses
///
/// Returns true if an obstacle was spawned.
pub fn update_spawn_timer(state: &mut GameState, dt: f32) -> bool {
    state.spawn_timer += dt;
    if state.spawn_timer < SPAWN_INTERVAL {
        return false;
    }

    spawn_obstacle(state);
    state.spawn_timer = match state.spawn_policy {
        SpawnTimerPolicy::Reset => 0.0,
        SpawnTimerPolicy::Carry => state.spawn_timer % SPAWN_INTERVAL,
    };
    true
}
