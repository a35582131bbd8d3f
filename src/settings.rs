//! Game settings
//!
//! Persisted as JSON in the same key-value store as the best score.

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_BUDGET_MS, GROUND_HEIGHT, PIPE_GAP, PIPE_WIDTH};
use crate::persistence::KeyValueStore;

/// How `dt` affects physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeStep {
    /// Gravity and scrolling advance a fixed amount per tick regardless of dt
    #[default]
    PerFrame,
    /// Gravity and scrolling are scaled by dt / FRAME_BUDGET_MS
    Scaled,
}

impl TimeStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeStep::PerFrame => "PerFrame",
            TimeStep::Scaled => "Scaled",
        }
    }

    /// Multiplier applied to per-tick physics for a tick of length `dt`
    pub fn physics_scale(&self, dt: f32) -> f32 {
        match self {
            TimeStep::PerFrame => 1.0,
            TimeStep::Scaled => dt / FRAME_BUDGET_MS,
        }
    }
}

/// What happens to the spawn timer when it reaches the interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnTimerPolicy {
    /// Timer goes back to 0; surplus time is dropped
    #[default]
    Reset,
    /// Surplus time carries into the next interval
    Carry,
}

impl SpawnTimerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnTimerPolicy::Reset => "Reset",
            SpawnTimerPolicy::Carry => "Carry",
        }
    }
}

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Smallest height that still fits the ground band and one gap
    pub const MIN_HEIGHT: f32 = GROUND_HEIGHT + PIPE_GAP;
    /// Smallest width that fits one obstacle
    pub const MIN_WIDTH: f32 = PIPE_WIDTH;

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }.sanitized()
    }

    /// Top edge of the ground band
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }

    /// Clamp to minimum dimensions (non-finite values become the minimum)
    pub fn sanitized(self) -> Self {
        let clamp = |v: f32, min: f32| if v.is_finite() { v.max(min) } else { min };
        Self {
            width: clamp(self.width, Self::MIN_WIDTH),
            height: clamp(self.height, Self::MIN_HEIGHT),
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Playfield size
    pub playfield: Playfield,
    /// Fixed RNG seed; `None` picks a fresh one per engine
    #[serde(default)]
    pub seed: Option<u64>,
    /// Physics/frame coupling
    #[serde(default)]
    pub time_step: TimeStep,
    /// Spawn timer overflow handling
    #[serde(default)]
    pub spawn_timer: SpawnTimerPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            seed: None,
            time_step: TimeStep::PerFrame,
            spawn_timer: SpawnTimerPolicy::Reset,
        }
    }
}

impl Settings {
    /// Store key
    pub const STORAGE_KEY: &'static str = "flappySettings";

    /// Settings with a fixed seed (reproducible sessions)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Apply minimum-dimension constraints
    pub fn sanitized(mut self) -> Self {
        self.playfield = self.playfield.sanitized();
        self
    }

    /// Seed to use for the next session
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Load settings from a store (missing or malformed = defaults)
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from store");
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to a store
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Settings not saved: {}", e),
            },
            Err(e) => log::warn!("Settings not serialized: {}", e),
        }
    }
}
