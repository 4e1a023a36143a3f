//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use match_em::cards::{CardIndex, Deck};
use match_em::core::GameConfig;
use match_em::engine::MatchEngine;
use match_em::events::EngineEvent;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once. `RUST_LOG=match_em=debug` shows
/// engine transitions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Engine on the four-card layout `[🐶, 🐱, 🐶, 🐱]`.
pub fn dog_cat_engine() -> MatchEngine {
    init_tracing();
    let deck = Deck::from_symbols(["🐶", "🐱", "🐶", "🐱"]).expect("valid layout");
    MatchEngine::with_deck(GameConfig::new().with_seed(42), deck).expect("valid config")
}

/// Record every event the engine emits.
pub fn record_events(engine: &mut MatchEngine) -> Arc<Mutex<Vec<EngineEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    engine.subscribe_fn(move |event| sink.lock().unwrap().push(*event));
    log
}

/// Pairs of positions sharing a face, in order of first appearance.
pub fn pairs(engine: &MatchEngine) -> Vec<[CardIndex; 2]> {
    let deck = engine.state().deck();
    deck.distinct_symbols()
        .iter()
        .map(|symbol| {
            let positions: Vec<_> = deck
                .iter()
                .enumerate()
                .filter(|(_, s)| *s == symbol)
                .map(|(i, _)| CardIndex::from(i))
                .collect();
            [positions[0], positions[1]]
        })
        .collect()
}
