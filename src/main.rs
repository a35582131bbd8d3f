//! Flappy entry point
//!
//! Rendering and input live in the frontends; natively this binary runs a
//! headless autopilot session against the on-disk store and reports the result.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy::persistence::{FileStore, KeyValueStore, MemoryStore};
    use flappy::sim::{GameEvent, GamePhase, should_flap};
    use flappy::{Settings, SimulationEngine};

    /// Simulated frame length (60 Hz)
    const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Stop the demo after ten simulated minutes
    const MAX_TICKS: u32 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Flappy (native) starting...");

    let mut store: Box<dyn KeyValueStore> = match FileStore::open_default() {
        Ok(store) => {
            log::info!("Using store {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("Store unavailable ({}), best score will not persist", e);
            Box::new(MemoryStore::new())
        }
    };

    let settings = Settings::load(&store);
    // First run: write defaults so they can be edited in the store file
    if store.get(Settings::STORAGE_KEY).is_none() {
        settings.save(&mut store);
    }
    log::info!(
        "Time step {}, spawn timer {}",
        settings.time_step.as_str(),
        settings.spawn_timer.as_str()
    );

    let mut engine = SimulationEngine::new(&settings, store);
    engine.start();

    let mut ticks = 0;
    while engine.phase() == GamePhase::Playing && ticks < MAX_TICKS {
        if should_flap(engine.state()) {
            engine.flap();
        }
        engine.advance(FRAME_MS);
        ticks += 1;

        for event in engine.drain_events() {
            match event {
                GameEvent::Scored { score } => log::debug!("Score {}", score),
                GameEvent::NewBestScore { score } => log::info!("New best score: {}", score),
                GameEvent::PhaseChanged { from, to } => {
                    log::info!("Phase {} -> {}", from.as_str(), to.as_str())
                }
                _ => {}
            }
        }
    }

    println!(
        "Demo finished after {} ticks: score {}, best {} ({})",
        ticks,
        engine.score(),
        engine.best_score(),
        engine.phase().as_str()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser frontends drive the engine directly
}
