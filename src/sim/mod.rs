//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering, input or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::should_flap;
pub use collision::{check_collision, hits_ground, hits_obstacle};
pub use spawn::{roll_bottom_height, spawn_obstacle};
pub use state::{Actor, CollisionKind, GameEvent, GamePhase, GameState, Ground, Obstacle};
pub use tick::tick;
