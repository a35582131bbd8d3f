//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, including the RNG, so a
//! session can be serialized and replayed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{Playfield, Settings, SpawnTimerPolicy, TimeStep};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Start,
    /// Active gameplay
    Playing,
    /// Session ended by a collision
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "Start",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// What the actor hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Ground,
    Obstacle,
}

/// Things a presentation layer may react to (sounds, HUD refresh)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    ObstacleSpawned,
    Scored { score: u32 },
    Collided { kind: CollisionKind },
    NewBestScore { score: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// The player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
    /// Cosmetic tilt in radians, derived from velocity
    pub rotation: f32,
    /// Current sprite frame in [0, BIRD_FRAMES)
    pub animation_frame: u8,
    /// Ticks since the last frame change
    pub frame_counter: u32,
}

impl Actor {
    /// Actor at its starting spot for the given playfield
    pub fn spawn(playfield: &Playfield) -> Self {
        Self {
            pos: Vec2::new(playfield.width / 3.0, playfield.height / 2.0),
            size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            velocity: 0.0,
            rotation: 0.0,
            animation_frame: 0,
            frame_counter: 0,
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Replace the current velocity with the flap impulse
    pub fn flap(&mut self) {
        self.velocity = FLAP_POWER;
    }

    /// Apply gravity and move, scaled by `scale` (1.0 per frame)
    pub fn integrate(&mut self, scale: f32) {
        self.velocity += GRAVITY * scale;
        self.pos.y += self.velocity * scale;
        self.rotation = (self.velocity * ROTATION_FACTOR).clamp(-MAX_ROTATION, MAX_ROTATION);
    }

    /// Keep the actor between the top of the field and the ground
    pub fn clamp_to_field(&mut self, ground_y: f32) {
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.velocity = 0.0;
        }

        let floor = ground_y - self.size.y;
        if self.pos.y >= floor {
            self.pos.y = floor;
            self.velocity = 0.0;
        }
    }

    /// Advance the sprite animation by one tick
    pub fn animate(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter >= ANIMATION_SPEED {
            self.animation_frame = (self.animation_frame + 1) % BIRD_FRAMES;
            self.frame_counter = 0;
        }
    }
}

/// A top/bottom barrier pair with a gap between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    /// Top rectangle spans y in [0, top_height)
    pub top_height: f32,
    /// Bottom rectangle spans y in [bottom_y, bottom_y + bottom_height)
    pub bottom_y: f32,
    pub bottom_height: f32,
    pub scored: bool,
}

impl Obstacle {
    /// Obstacle at `x` whose bottom part is `bottom_height` tall
    pub fn new(x: f32, ground_y: f32, bottom_height: f32) -> Self {
        Self {
            x,
            width: PIPE_WIDTH,
            top_height: ground_y - PIPE_GAP - bottom_height,
            bottom_y: ground_y - bottom_height,
            bottom_height,
            scored: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Re-anchor the bottom rectangle on a moved ground, keeping its height
    /// where it still fits under the gap
    pub fn fit_to_ground(&mut self, ground_y: f32) {
        self.bottom_height = self.bottom_height.min((ground_y - PIPE_GAP).max(0.0));
        self.top_height = ground_y - PIPE_GAP - self.bottom_height;
        self.bottom_y = ground_y - self.bottom_height;
    }

    /// Bottom edge of the top rectangle
    pub fn gap_top(&self) -> f32 {
        self.top_height
    }

    /// Top edge of the bottom rectangle
    pub fn gap_bottom(&self) -> f32 {
        self.bottom_y
    }

    /// Fully scrolled past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// The scrolling ground band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    /// Top edge
    pub y: f32,
    pub height: f32,
    /// Cosmetic scroll offset in (-playfield_width, 0]
    pub scroll_offset: f32,
}

impl Ground {
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            y: playfield.ground_y(),
            height: GROUND_HEIGHT,
            scroll_offset: 0.0,
        }
    }

    /// Scroll left by `distance`, wrapping after one full playfield width
    pub fn scroll(&mut self, distance: f32, playfield_width: f32) {
        self.scroll_offset -= distance;
        if self.scroll_offset <= -playfield_width {
            self.scroll_offset = 0.0;
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub time_step: TimeStep,
    pub spawn_policy: SpawnTimerPolicy,
    pub phase: GamePhase,
    pub score: u32,
    /// Elapsed time since the last spawn, in dt units
    pub spawn_timer: f32,
    /// Ticks processed in any phase
    pub time_ticks: u64,
    pub actor: Actor,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub ground: Ground,
    /// Pending events, drained by the engine's owner
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let playfield = settings.playfield.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            time_step: settings.time_step,
            spawn_policy: settings.spawn_timer,
            phase: GamePhase::Start,
            score: 0,
            spawn_timer: 0.0,
            time_ticks: 0,
            actor: Actor::spawn(&playfield),
            obstacles: Vec::new(),
            ground: Ground::new(&playfield),
            events: Vec::new(),
        }
    }

    /// Reinitialize the session; the RNG keeps running so sessions differ
    pub fn reset(&mut self) {
        self.reset_to(GamePhase::Start);
    }

    /// Reinitialize the session and enter `phase` with a single phase event
    pub fn reset_to(&mut self, phase: GamePhase) {
        self.actor = Actor::spawn(&self.playfield);
        self.obstacles.clear();
        self.ground = Ground::new(&self.playfield);
        self.score = 0;
        self.spawn_timer = 0.0;
        self.set_phase(phase);
    }

    /// Change phase, queuing an event when it actually changes
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to: phase,
            });
            self.phase = phase;
        }
    }

    /// Change playfield size
    ///
    /// The ground follows the new height, the actor is pulled back inside the
    /// field and live obstacles are refitted to the new ground. Actor x and
    /// obstacle x are unchanged.
    pub fn resize(&mut self, playfield: Playfield) {
        self.playfield = playfield.sanitized();
        self.ground.y = self.playfield.ground_y();
        self.actor.clamp_to_field(self.ground.y);
        for obstacle in &mut self.obstacles {
            obstacle.fit_to_ground(self.ground.y);
        }
    }
}
