//! Side-effect events.
//!
//! The engine tells collaborators what happened through an [`EventBus`].
//! Nothing flows back: listeners can't see or touch the engine, and their
//! failures never reach it.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use match_em::cards::{CardIndex, Deck};
//! use match_em::core::GameConfig;
//! use match_em::engine::MatchEngine;
//! use match_em::events::EngineEvent;
//!
//! let deck = Deck::from_symbols(["🐶", "🐱", "🐶", "🐱"]).unwrap();
//! let mut engine = MatchEngine::with_deck(GameConfig::new().with_seed(1), deck).unwrap();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! engine.subscribe_fn(move |event| sink.lock().unwrap().push(*event));
//!
//! engine.reveal(CardIndex(0));
//! assert_eq!(*seen.lock().unwrap(), vec![EngineEvent::Revealed(CardIndex(0))]);
//! ```

mod bus;
mod event;

pub use bus::{EventBus, EventListener, ListenerError, ListenerId};
pub use event::EngineEvent;
