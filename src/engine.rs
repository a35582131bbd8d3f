//! Simulation engine: the public face of the game
//!
//! Owns the session state, the best score and the store it is persisted in.
//! Frontends forward input into `start`/`flap`/`restart`, call `advance` once
//! per frame and read state through the accessors.
//!
//! Legal phase transitions:
//!
//! | from     | operation            | to       |
//! |----------|----------------------|----------|
//! | Start    | `start()`            | Playing  |
//! | Playing  | collision in advance | GameOver |
//! | any      | `restart()`          | Playing  |
//! | any      | `reset()`            | Start    |
//!
//! Anything else is a no-op.

use crate::best_score::BestScore;
use crate::persistence::KeyValueStore;
use crate::settings::{Playfield, Settings};
use crate::sim::{Actor, GameEvent, GamePhase, GameState, Ground, Obstacle, tick};

pub struct SimulationEngine<S: KeyValueStore> {
    state: GameState,
    best: BestScore,
    store: S,
}

impl<S: KeyValueStore> SimulationEngine<S> {
    /// Create an engine in the Start phase, reading the best score from `store`
    pub fn new(settings: &Settings, store: S) -> Self {
        let seed = settings.resolve_seed();
        let best = BestScore::load(&store);
        log::info!(
            "Engine ready: {}x{} field, seed {}, best {}",
            settings.playfield.width,
            settings.playfield.height,
            seed,
            best.value()
        );

        Self {
            state: GameState::new(settings, seed),
            best,
            store,
        }
    }

    /// Start -> Playing
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Start {
            self.state.set_phase(GamePhase::Playing);
            log::info!("Session started");
        }
    }

    /// Reinitialize the session and return to Start
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Reinitialize the session and go straight to Playing
    pub fn restart(&mut self) {
        self.state.reset_to(GamePhase::Playing);
        log::info!("Session restarted");
    }

    /// Set the actor's velocity to the flap impulse (Playing only)
    pub fn flap(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.state.actor.flap();
            self.state.events.push(GameEvent::Flapped);
        }
    }

    /// Advance one frame of `dt` milliseconds
    pub fn advance(&mut self, dt: f32) {
        tick(&mut self.state, dt);

        // Checked on the transition tick and every tick after; record() is idempotent
        if self.state.phase == GamePhase::GameOver {
            self.record_best();
        }
    }

    /// Change the playfield size (window resize)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Playfield::new(width, height));
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    fn record_best(&mut self) {
        let score = self.state.score;
        if self.best.record(score, &mut self.store) {
            self.state.events.push(GameEvent::NewBestScore { score });
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.best.value()
    }

    pub fn actor(&self) -> &Actor {
        &self.state.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    pub fn ground(&self) -> &Ground {
        &self.state.ground
    }

    pub fn playfield(&self) -> Playfield {
        self.state.playfield
    }

    /// Full session state (for autopilots, debugging, snapshots)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::MemoryStore;

    const DT: f32 = 1000.0 / 60.0;

    fn engine() -> SimulationEngine<MemoryStore> {
        SimulationEngine::new(&Settings::with_seed(7), MemoryStore::new())
    }

    /// Drop the actor onto the ground to end the session
    fn crash(engine: &mut SimulationEngine<MemoryStore>) {
        while engine.phase() == GamePhase::Playing {
            engine.advance(DT);
        }
    }

    #[test]
    fn test_start_transition() {
        let mut engine = engine();
        assert_eq!(engine.phase(), GamePhase::Start);

        // Flap before start does nothing
        engine.flap();
        assert_eq!(engine.actor().velocity, 0.0);

        engine.start();
        assert_eq!(engine.phase(), GamePhase::Playing);

        // A second start is a no-op
        engine.start();
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_flap_only_while_playing() {
        let mut engine = engine();
        engine.start();
        engine.advance(DT);
        engine.advance(DT);
        engine.flap();
        assert_eq!(engine.actor().velocity, FLAP_POWER);

        crash(&mut engine);
        let velocity = engine.actor().velocity;
        engine.flap();
        assert_eq!(engine.actor().velocity, velocity);
    }

    #[test]
    fn test_game_over_until_restart() {
        let mut engine = engine();
        engine.start();
        crash(&mut engine);
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.start();
        for _ in 0..100 {
            engine.advance(DT);
        }
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.score(), 0);
        assert!(engine.obstacles().is_empty());
        assert_eq!(engine.ground().scroll_offset, 0.0);
        assert_eq!(engine.actor().velocity, 0.0);
        assert_eq!(engine.actor().y(), engine.playfield().height / 2.0);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut engine = engine();
        engine.start();
        engine.advance(DT);
        engine.reset();
        assert_eq!(engine.phase(), GamePhase::Start);
        engine.start();
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_collision_happens_once() {
        let mut engine = engine();
        engine.start();
        engine.drain_events();
        crash(&mut engine);
        for _ in 0..10 {
            engine.advance(DT);
        }

        let collisions = engine
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Collided { .. }))
            .count();
        assert_eq!(collisions, 1);
    }

    #[test]
    fn test_best_score_recorded_on_game_over() {
        let mut engine = engine();
        engine.start();
        engine.state.score = 4;
        crash(&mut engine);

        assert_eq!(engine.best_score(), 4);
        assert_eq!(
            engine.store().get(BestScore::STORAGE_KEY).as_deref(),
            Some("4")
        );
        let events = engine.drain_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::NewBestScore { .. }))
                .count(),
            1
        );

        // A worse session leaves it alone
        engine.restart();
        engine.state.score = 2;
        crash(&mut engine);
        assert_eq!(engine.best_score(), 4);
    }

    #[test]
    fn test_best_score_loaded_from_store() {
        let store = MemoryStore::with_entry(BestScore::STORAGE_KEY, "17");
        let engine = SimulationEngine::new(&Settings::with_seed(1), store);
        assert_eq!(engine.best_score(), 17);
    }

    #[test]
    fn test_malformed_best_score_is_zero() {
        let store = MemoryStore::with_entry(BestScore::STORAGE_KEY, "seventeen");
        let engine = SimulationEngine::new(&Settings::with_seed(1), store);
        assert_eq!(engine.best_score(), 0);
    }

    #[test]
    fn test_resize_moves_ground() {
        let mut engine = engine();
        let x = engine.actor().x();
        engine.resize(800.0, 900.0);
        assert_eq!(engine.ground().y, 900.0 - GROUND_HEIGHT);
        assert_eq!(engine.actor().x(), x);

        // Too small is clamped to a playable field
        engine.resize(1.0, 1.0);
        assert_eq!(engine.ground().y, PIPE_GAP);
    }

    #[test]
    fn test_resize_keeps_actor_above_ground_when_idle() {
        // Start phase: tick skips physics, resize must clamp
        let mut idle = engine();
        idle.resize(480.0, 300.0);
        idle.advance(16.0);
        let floor = idle.ground().y - idle.actor().height();
        assert_eq!(idle.phase(), GamePhase::Start);
        assert!(idle.actor().y() >= 0.0 && idle.actor().y() <= floor);

        // GameOver phase, after crashing on a taller field
        let mut over = engine();
        over.resize(480.0, 1000.0);
        over.start();
        crash(&mut over);
        over.resize(480.0, 400.0);
        over.advance(16.0);
        let floor = over.ground().y - over.actor().height();
        assert_eq!(over.phase(), GamePhase::GameOver);
        assert!(over.actor().y() >= 0.0 && over.actor().y() <= floor);
    }

    #[test]
    fn test_restart_emits_single_phase_change() {
        let mut engine = engine();
        engine.start();
        crash(&mut engine);
        engine.drain_events();

        engine.restart();
        let phase_events: Vec<_> = engine
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::PhaseChanged { .. }))
            .collect();
        assert_eq!(
            phase_events,
            vec![GameEvent::PhaseChanged {
                from: GamePhase::GameOver,
                to: GamePhase::Playing
            }]
        );
    }

    #[test]
    fn test_events_for_flap_and_phase() {
        let mut engine = engine();
        engine.start();
        engine.flap();
        let events = engine.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::PhaseChanged {
                    from: GamePhase::Start,
                    to: GamePhase::Playing
                },
                GameEvent::Flapped,
            ]
        );
        assert!(engine.drain_events().is_empty());
    }
}
