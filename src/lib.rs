//! Flappy - simulation core for a single-screen flappy arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle spawning, collisions, scoring)
//! - `engine`: Phase state machine wrapping the simulation, public game operations
//! - `best_score`: Best score tracking
//! - `persistence`: Key-value store backends (memory, file, LocalStorage)
//! - `settings`: Playfield and timing configuration
//!
//! The native binary only runs a headless demo. Browser frontends link this
//! crate as a library, open `persistence::LocalStore` themselves and hand it
//! to `SimulationEngine::new`; there is no wasm entry point here.

pub mod best_score;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use engine::SimulationEngine;
pub use error::StoreError;
pub use persistence::{KeyValueStore, MemoryStore};
pub use settings::{Playfield, Settings, SpawnTimerPolicy, TimeStep};

/// Game configuration constants
pub mod consts {
    /// Velocity added to the actor every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity the actor is set to on flap (negative = upward)
    pub const FLAP_POWER: f32 = -8.0;
    /// Horizontal scroll speed of obstacles and ground (pixels/tick)
    pub const PIPE_SPEED: f32 = 2.0;
    /// Time between obstacle spawns, in the unit of `dt` (milliseconds)
    pub const SPAWN_INTERVAL: f32 = 1500.0;
    /// Vertical opening between top and bottom obstacle rectangles
    pub const PIPE_GAP: f32 = 150.0;
    /// Height of the ground band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_MIN_HEIGHT: f32 = 50.0;

    /// Actor defaults
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    /// Rotation per unit of velocity (radians)
    pub const ROTATION_FACTOR: f32 = 0.1;
    pub const MAX_ROTATION: f32 = std::f32::consts::FRAC_PI_4;

    /// Sprite animation
    pub const BIRD_FRAMES: u8 = 3;
    /// Ticks per animation frame
    pub const ANIMATION_SPEED: u32 = 5;

    /// Frame budget used when scaling physics by dt (60 Hz, milliseconds)
    pub const FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;
}
